//! Topic selection for query-less ingestion.
//!
//! When no search is active, ingestion still needs a query term. Picking one
//! pseudo-randomly from a broad fixed catalog makes a capped upstream API
//! feel like an unlimited inventory. The strategy is a trait so tests can
//! pin the sequence.

use rand::Rng;

/// Fixed catalog of high-traffic search topics.
pub const SEO_TOPICS: &[&str] = &[
    "hindu gods",
    "shiva god",
    "krishna god",
    "hanuman god",
    "ganesha",
    "ram god",
    "lakshmi god",
    "nature 4k wallpaper",
    "luxury cars",
    "beautiful animals",
    "backgrounds hd",
    "science galaxy",
    "education learning",
    "happy people",
    "feelings meditation",
    "religion temple",
    "health wellness",
    "places travel",
    "industry modern",
    "computer hacking",
    "food aesthetic",
    "sports extreme",
    "transportation flight",
    "business success",
    "music concert live",
    "cyberpunk neon",
    "vintage classic",
    "minimalist architecture",
    "ocean sunset",
    "flowers macro",
];

pub trait TopicStrategy: Send + Sync {
    /// Returns the next topic to query for.
    fn next_topic(&self) -> String;
}

/// Picks a topic uniformly at random from the catalog.
pub struct RandomTopicStrategy;

impl TopicStrategy for RandomTopicStrategy {
    fn next_topic(&self) -> String {
        let mut rng = rand::rng();
        SEO_TOPICS[rng.random_range(0..SEO_TOPICS.len())].to_string()
    }
}
