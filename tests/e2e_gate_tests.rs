//! End-to-end tests for the guarded-action boundary.

mod common;

use std::sync::Arc;

use common::fixtures::{make_pin, RecordingNotifier};
use interest_core::config::GateSettings;
use interest_core::download::{DiskSaveSink, ForcedDownloader};
use interest_core::gate::{GateDecision, GateState, GuardedActions};
use interest_core::notify::Notifier;
use interest_core::persistence::NullSnapshotStore;
use interest_core::store::{AppStore, UserRole};
use tempfile::TempDir;

struct Harness {
    store: Arc<AppStore>,
    notifier: Arc<RecordingNotifier>,
    actions: GuardedActions,
    _downloads: TempDir,
}

fn make_harness() -> Harness {
    let downloads = TempDir::new().unwrap();
    let notifier = Arc::new(RecordingNotifier::default());
    let store = Arc::new(AppStore::new(
        Arc::new(NullSnapshotStore),
        notifier.clone() as Arc<dyn Notifier>,
    ));
    let sink = Arc::new(DiskSaveSink::new(downloads.path()));
    let downloader = Arc::new(ForcedDownloader::new(2, sink).unwrap());
    let actions = GuardedActions::new(
        store.clone(),
        downloader,
        notifier.clone() as Arc<dyn Notifier>,
        &GateSettings { countdown_ticks: 5 },
    );
    Harness {
        store,
        notifier,
        actions,
        _downloads: downloads,
    }
}

#[tokio::test]
async fn privileged_save_bypasses_gate() {
    let h = make_harness();
    h.store.login("admin_1");
    let pin = make_pin("p");
    h.store.add_pin(pin.clone());

    let decision = h.actions.request_save(&pin, UserRole::Admin).await;

    assert_eq!(decision, GateDecision::Bypassed);
    assert_eq!(h.actions.gate_state(), GateState::Closed);
    assert!(h.store.is_pin_saved("p"));
    assert!(h
        .notifier
        .messages()
        .contains(&"Pin saved successfully!".to_string()));
}

#[tokio::test]
async fn unprivileged_save_waits_for_confirmation() {
    let h = make_harness();
    h.store.login("user_1");
    let pin = make_pin("p");
    h.store.add_pin(pin.clone());

    let decision = h.actions.request_save(&pin, UserRole::User).await;
    assert_eq!(decision, GateDecision::Deferred);
    assert_eq!(h.actions.gate_state(), GateState::Armed { remaining: 5 });
    assert!(!h.store.is_pin_saved("p"));

    // confirming early does nothing
    h.actions.confirm().await;
    assert!(!h.store.is_pin_saved("p"));

    for _ in 0..5 {
        h.actions.tick();
    }
    assert_eq!(h.actions.gate_state(), GateState::Unlockable);

    h.actions.confirm().await;
    assert!(h.store.is_pin_saved("p"));
    assert_eq!(h.actions.gate_state(), GateState::Closed);

    // the effect fired exactly once; a stray confirm cannot re-toggle
    h.actions.confirm().await;
    assert!(h.store.is_pin_saved("p"));
}

#[tokio::test]
async fn dismiss_before_unlockable_drops_action() {
    let h = make_harness();
    h.store.login("user_1");
    let pin = make_pin("p");
    h.store.add_pin(pin.clone());

    h.actions.request_save(&pin, UserRole::User).await;
    h.actions.tick();
    h.actions.dismiss();
    assert_eq!(h.actions.gate_state(), GateState::Closed);

    for _ in 0..10 {
        h.actions.tick();
    }
    h.actions.confirm().await;
    assert!(!h.store.is_pin_saved("p"));
}

#[tokio::test]
async fn reopening_resets_countdown_and_pending_action() {
    let h = make_harness();
    h.store.login("user_1");
    let first = make_pin("first");
    let second = make_pin("second");
    h.store.add_pin(first.clone());
    h.store.add_pin(second.clone());

    h.actions.request_save(&first, UserRole::User).await;
    h.actions.tick();
    h.actions.tick();

    h.actions.request_save(&second, UserRole::User).await;
    assert_eq!(h.actions.gate_state(), GateState::Armed { remaining: 5 });

    for _ in 0..5 {
        h.actions.tick();
    }
    h.actions.confirm().await;

    // only the replacement action fired
    assert!(h.store.is_pin_saved("second"));
    assert!(!h.store.is_pin_saved("first"));
}

#[tokio::test]
async fn anonymous_save_requires_login() {
    let h = make_harness();
    let pin = make_pin("p");
    h.store.add_pin(pin.clone());

    let decision = h.actions.request_save(&pin, UserRole::User).await;

    assert_eq!(decision, GateDecision::Rejected);
    assert_eq!(h.actions.gate_state(), GateState::Closed);
    assert!(h
        .notifier
        .messages()
        .contains(&"Please login first".to_string()));
}

#[tokio::test]
async fn gated_download_fires_after_confirmation() {
    let h = make_harness();
    h.store.login("user_1");
    let mut pin = make_pin("p");
    // unreachable source: the executor still succeeds via its fallback
    pin.image_url = "http://127.0.0.1:9/p.jpg".to_string();

    let decision = h.actions.request_download(&pin, UserRole::User).await;
    assert_eq!(decision, GateDecision::Deferred);
    assert!(h.notifier.messages().is_empty());

    for _ in 0..5 {
        h.actions.tick();
    }
    h.actions.confirm().await;

    assert!(h
        .notifier
        .messages()
        .contains(&"Successfully saved to your Device Gallery/Files!".to_string()));
}

#[tokio::test]
async fn privileged_download_fires_immediately() {
    let h = make_harness();
    h.store.login("admin_1");
    let mut pin = make_pin("p");
    pin.image_url = "http://127.0.0.1:9/p.jpg".to_string();

    let decision = h.actions.request_download(&pin, UserRole::Admin).await;

    assert_eq!(decision, GateDecision::Bypassed);
    assert_eq!(h.actions.gate_state(), GateState::Closed);
    assert!(h
        .notifier
        .messages()
        .iter()
        .any(|m| m.contains("saved to your Device")));
}
