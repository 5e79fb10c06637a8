//! Monetization action gate.
//!
//! Download and save requests from non-privileged users do not take effect
//! immediately: they arm a timed interstitial and only fire once the
//! countdown has elapsed and the user explicitly confirms. Admins bypass the
//! gate entirely. The countdown cadence is driven by the UI layer through
//! `tick`; the machine itself is pure and synchronous.

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::config::GateSettings;
use crate::download::{download_filename, ForcedDownloader};
use crate::notify::Notifier;
use crate::store::{AppStore, Pin, UserRole};

/// The action intercepted by the gate.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardedAction {
    Download(Pin),
    Save(Pin),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Closed,
    /// Counting down; the interstitial cannot be skipped yet.
    Armed { remaining: u32 },
    /// Countdown elapsed; an explicit confirmation releases the action.
    Unlockable,
}

/// Outcome of a guarded request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Privileged actor: the effect was invoked immediately.
    Bypassed,
    /// The gate armed; the effect waits for confirmation.
    Deferred,
    /// The request was refused outright (e.g. saving while anonymous).
    Rejected,
}

/// The interstitial state machine. One instance per gate surface; multiple
/// gates are fully independent.
#[derive(Debug)]
pub struct ActionGate {
    countdown_ticks: u32,
    state: GateState,
    pending: Option<GuardedAction>,
}

impl ActionGate {
    pub fn new(settings: &GateSettings) -> Self {
        Self {
            countdown_ticks: settings.countdown_ticks,
            state: GateState::Closed,
            pending: None,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn pending(&self) -> Option<&GuardedAction> {
        self.pending.as_ref()
    }

    /// Arms the gate for a non-privileged request. Re-arming replaces the
    /// pending action and resets the countdown to its initial value.
    pub fn arm(&mut self, action: GuardedAction) {
        self.state = GateState::Armed {
            remaining: self.countdown_ticks,
        };
        self.pending = Some(action);
    }

    /// Advances the countdown by one time unit. No-op unless armed.
    pub fn tick(&mut self) {
        if let GateState::Armed { remaining } = self.state {
            self.state = if remaining <= 1 {
                GateState::Unlockable
            } else {
                GateState::Armed {
                    remaining: remaining - 1,
                }
            };
        }
    }

    /// Confirmation while unlockable releases the pending action exactly
    /// once and closes the gate. In any other state this is a no-op.
    pub fn confirm(&mut self) -> Option<GuardedAction> {
        if self.state != GateState::Unlockable {
            return None;
        }
        self.state = GateState::Closed;
        self.pending.take()
    }

    /// Closes the gate without firing. The pending action is discarded.
    pub fn dismiss(&mut self) {
        self.state = GateState::Closed;
        self.pending = None;
    }
}

/// Entry points for guarded user actions. Wires the gate to the store, the
/// download executor and the notification port.
pub struct GuardedActions {
    store: Arc<AppStore>,
    downloader: Arc<ForcedDownloader>,
    notifier: Arc<dyn Notifier>,
    gate: Mutex<ActionGate>,
}

impl GuardedActions {
    pub fn new(
        store: Arc<AppStore>,
        downloader: Arc<ForcedDownloader>,
        notifier: Arc<dyn Notifier>,
        settings: &GateSettings,
    ) -> Self {
        Self {
            store,
            downloader,
            notifier,
            gate: Mutex::new(ActionGate::new(settings)),
        }
    }

    pub fn gate_state(&self) -> GateState {
        self.gate.lock().unwrap().state()
    }

    /// Requests a download of the pin's media. Admins get the effect
    /// immediately; everyone else goes through the interstitial.
    pub async fn request_download(&self, pin: &Pin, role: UserRole) -> GateDecision {
        if role.is_privileged() {
            self.perform(GuardedAction::Download(pin.clone())).await;
            return GateDecision::Bypassed;
        }
        self.gate
            .lock()
            .unwrap()
            .arm(GuardedAction::Download(pin.clone()));
        GateDecision::Deferred
    }

    /// Requests saving the pin. Saving needs an account; admins bypass the
    /// interstitial.
    pub async fn request_save(&self, pin: &Pin, role: UserRole) -> GateDecision {
        if self.store.current_user().is_none() {
            self.notifier.notify("Please login first");
            return GateDecision::Rejected;
        }
        if role.is_privileged() {
            self.perform(GuardedAction::Save(pin.clone())).await;
            return GateDecision::Bypassed;
        }
        self.gate
            .lock()
            .unwrap()
            .arm(GuardedAction::Save(pin.clone()));
        GateDecision::Deferred
    }

    /// Advances the interstitial countdown by one unit.
    pub fn tick(&self) {
        self.gate.lock().unwrap().tick();
    }

    /// User confirmation. Fires the pending effect if the gate is
    /// unlockable, otherwise does nothing.
    pub async fn confirm(&self) {
        let action = self.gate.lock().unwrap().confirm();
        if let Some(action) = action {
            self.perform(action).await;
        }
    }

    /// User dismissed the interstitial; the guarded action never fires.
    pub fn dismiss(&self) {
        self.gate.lock().unwrap().dismiss();
    }

    async fn perform(&self, action: GuardedAction) {
        match action {
            GuardedAction::Download(pin) => {
                let filename = download_filename(&pin.title, pin.kind);
                debug!("Executing guarded download of {} as {}", pin.id, filename);
                if self.downloader.download(&pin.image_url, &filename).await {
                    self.notifier
                        .notify("Successfully saved to your Device Gallery/Files!");
                } else {
                    self.notifier.notify("Download failed. Please try again.");
                }
            }
            GuardedAction::Save(pin) => {
                self.store.toggle_save_pin(&pin.id);
                self.notifier.notify("Pin saved successfully!");
            }
        }
    }
}
