//! Remote content ingestion.
//!
//! Enriches the local pin collection with content fetched from the stock
//! media search API. Two modes share the fetch/map/dedup/merge path:
//! interactive backfill when a viewer exhausts the local feed, and
//! administrative seeding of larger batches.

mod pixabay;
mod topics;

pub use pixabay::{
    PixabayClient, SearchApi, SearchApiError, SearchHit, SearchPage, SearchRequest,
    PIXABAY_API_BASE,
};
pub use topics::{RandomTopicStrategy, TopicStrategy, SEO_TOPICS};

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use tracing::{info, warn};

use crate::config::IngestionSettings;
use crate::store::seed::ADMIN_USER_ID;
use crate::store::{AppStore, MediaKind, Pin};

/// Author id attributed to interactively ingested pins. Deliberately has no
/// users-map entry; author lookups resolve it leniently.
pub const API_AUTHOR_ID: &str = "api_user";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestionMode {
    /// Viewer-driven backfill of an exhausted feed.
    Interactive,
    /// Admin-triggered bulk import.
    Seeding,
}

impl IngestionMode {
    fn id_prefix(self) -> &'static str {
        match self {
            IngestionMode::Interactive => "pixabay",
            IngestionMode::Seeding => "seeded",
        }
    }

    fn author_id(self) -> &'static str {
        match self {
            IngestionMode::Interactive => API_AUTHOR_ID,
            IngestionMode::Seeding => ADMIN_USER_ID,
        }
    }

    fn fallback_like_cap(self) -> u32 {
        match self {
            IngestionMode::Interactive => 2000,
            IngestionMode::Seeding => 5000,
        }
    }
}

/// Maps a batch of search hits into pins.
///
/// Ids follow `<prefix>_<external-id>_<request-timestamp>_<index>`, which
/// keeps them unique even when different requests return the same external
/// id. The timestamp is per request, shared by the whole batch.
pub fn map_hits(mode: IngestionMode, hits: &[SearchHit], request_ts_millis: i64) -> Vec<Pin> {
    let mut rng = rand::rng();
    let now = Utc::now();

    hits.iter()
        .enumerate()
        .map(|(idx, hit)| {
            let first_tag = hit.tags.split(',').next().unwrap_or("").trim().to_string();
            let title = match mode {
                IngestionMode::Interactive => {
                    format!("HD {} Image by {}", first_tag, hit.user)
                }
                IngestionMode::Seeding => format!("Seeded HD {} Image", first_tag),
            };
            let description = match mode {
                IngestionMode::Interactive => {
                    format!("High Quality Unlimited Image. Tags: {}", hit.tags)
                }
                IngestionMode::Seeding => {
                    format!("High Quality Image imported by Admin. Tags: {}", hit.tags)
                }
            };

            let mut tags: Vec<String> = hit
                .tags
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();
            if mode == IngestionMode::Seeding {
                tags.extend(["seeded", "HD", "wallpaper"].map(String::from));
            }

            Pin {
                id: format!(
                    "{}_{}_{}_{}",
                    mode.id_prefix(),
                    hit.id,
                    request_ts_millis,
                    idx
                ),
                title,
                description,
                image_url: hit.large_image_url.clone(),
                kind: MediaKind::Image,
                width: hit.image_width.unwrap_or(800),
                height: hit.image_height.unwrap_or(1200),
                author_id: mode.author_id().to_string(),
                tags,
                likes: hit
                    .likes
                    .filter(|l| *l > 0)
                    .unwrap_or_else(|| rng.random_range(0..mode.fallback_like_cap())),
                comments: vec![],
                created_at: now,
                nsfw: false,
                hidden: false,
            }
        })
        .collect()
}

/// Orchestrates search calls and merges the results into the store.
pub struct IngestionManager {
    api: Arc<dyn SearchApi>,
    store: Arc<AppStore>,
    topics: Arc<dyn TopicStrategy>,
    settings: IngestionSettings,
}

impl IngestionManager {
    pub fn new(
        api: Arc<dyn SearchApi>,
        store: Arc<AppStore>,
        topics: Arc<dyn TopicStrategy>,
        settings: IngestionSettings,
    ) -> Self {
        Self {
            api,
            store,
            topics,
            settings,
        }
    }

    /// Interactive backfill. Uses the active search query, or a topic from
    /// the catalog when none is set. Page indices are randomized so a capped
    /// upstream feels unlimited.
    ///
    /// Returns the number of pins merged. A failed call leaves the store
    /// untouched and is not retried.
    pub async fn fetch_interactive(&self) -> Result<usize, SearchApiError> {
        let active = self.store.search_query();
        let query = if active.is_empty() {
            self.topics.next_topic()
        } else {
            active
        };
        let page = rand::rng().random_range(1..=self.settings.interactive_max_page);

        let request = SearchRequest {
            query,
            per_page: self.settings.interactive_per_page,
            page,
            vertical_only: true,
        };
        self.fetch(IngestionMode::Interactive, request).await
    }

    /// Administrative seeding: a larger batch on a catalog topic, attributed
    /// to the admin author and tagged with the extra catalog markers.
    pub async fn seed(&self) -> Result<usize, SearchApiError> {
        let request = SearchRequest {
            query: self.topics.next_topic(),
            per_page: self.settings.seed_per_page,
            page: rand::rng().random_range(1..=self.settings.seed_max_page),
            vertical_only: false,
        };
        self.fetch(IngestionMode::Seeding, request).await
    }

    async fn fetch(
        &self,
        mode: IngestionMode,
        request: SearchRequest,
    ) -> Result<usize, SearchApiError> {
        let page = match self.api.search(&request).await {
            Ok(page) => page,
            Err(err) => {
                warn!(
                    "Ingestion call failed for query {:?} (page {}): {}",
                    request.query, request.page, err
                );
                return Err(err);
            }
        };

        if page.hits.is_empty() {
            return Ok(0);
        }

        let pins = map_hits(mode, &page.hits, Utc::now().timestamp_millis());
        let merged = self.store.merge_unique(pins);
        info!(
            "Ingested {} new pins for query {:?} ({} hits)",
            merged,
            request.query,
            page.hits.len()
        );
        Ok(merged)
    }
}
