//! Infinite-scroll pagination over the (optionally filtered) pin collection.
//!
//! The controller grows the displayed prefix in steps while local inventory
//! lasts, and only reaches out to ingestion once local results are
//! exhausted. A single loading flag is the mutual exclusion: near-bottom
//! signals arriving while a reveal or an ingestion call is in flight are
//! dropped.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::config::FeedSettings;
use crate::ingestion::IngestionManager;
use crate::store::{AppStore, Pin};

/// Case-insensitive substring filter on title or any tag. Order of the
/// underlying collection is preserved.
pub fn filter_pins(pins: &[Pin], query: &str) -> Vec<Pin> {
    if query.is_empty() {
        return pins.to_vec();
    }
    let needle = query.to_lowercase();
    pins.iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.tags.iter().any(|t| t.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

pub struct FeedController {
    store: Arc<AppStore>,
    ingestor: Arc<IngestionManager>,
    settings: FeedSettings,
    displayed: AtomicUsize,
    loading: AtomicBool,
}

impl FeedController {
    pub fn new(
        store: Arc<AppStore>,
        ingestor: Arc<IngestionManager>,
        settings: FeedSettings,
    ) -> Self {
        let initial = settings.page_step;
        Self {
            store,
            ingestor,
            settings,
            displayed: AtomicUsize::new(initial),
            loading: AtomicBool::new(false),
        }
    }

    /// The filtered set the viewer is paging through.
    pub fn filtered(&self) -> Vec<Pin> {
        filter_pins(&self.store.pins(), &self.store.search_query())
    }

    /// Number of items currently revealed, clamped to the filtered set.
    pub fn displayed_count(&self) -> usize {
        self.displayed
            .load(Ordering::SeqCst)
            .min(self.filtered().len())
    }

    /// The revealed prefix of the filtered set.
    pub fn visible(&self) -> Vec<Pin> {
        let mut pins = self.filtered();
        pins.truncate(self.displayed.load(Ordering::SeqCst));
        pins
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Handles a viewport-near-bottom signal.
    ///
    /// While local inventory remains, reveals one more page after a short
    /// artificial latency. Once the filtered set is fully revealed and no
    /// search is active, triggers interactive ingestion instead. Signals
    /// arriving while either is in flight are ignored.
    pub async fn near_bottom(&self) {
        if self
            .loading
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return;
        }

        let filtered_len = self.filtered().len();
        let shown = self.displayed.load(Ordering::SeqCst).min(filtered_len);

        if shown < filtered_len {
            tokio::time::sleep(Duration::from_millis(self.settings.reveal_latency_ms)).await;
            let target = (shown + self.settings.page_step).min(filtered_len);
            self.displayed.store(target, Ordering::SeqCst);
            debug!("Revealed {} of {} pins", target, filtered_len);
        } else if self.store.search_query().is_empty() {
            // Local inventory exhausted: grow the collection. The merge is
            // idempotent, so a late completion can never corrupt the feed.
            let _ = self.ingestor.fetch_interactive().await;
        }

        self.loading.store(false, Ordering::SeqCst);
    }

    /// Re-checks a freshly-changed search query. Thin result sets are
    /// backfilled right away, regardless of scroll position.
    pub async fn ensure_backfill(&self) {
        if self.store.search_query().is_empty() {
            return;
        }
        if self.filtered().len() >= self.settings.low_yield_floor {
            return;
        }
        if self
            .loading
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return;
        }

        debug!("Filtered results below floor, backfilling");
        let _ = self.ingestor.fetch_interactive().await;
        self.loading.store(false, Ordering::SeqCst);
    }
}
