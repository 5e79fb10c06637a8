//! Interest Core Library
//!
//! Application-state and content-acquisition core of the Interest feed app.
//! This library exposes the internal modules for testing and reuse by UI
//! collaborators.

pub mod config;
pub mod download;
pub mod feed;
pub mod gate;
pub mod ingestion;
pub mod notify;
pub mod persistence;
pub mod store;

// Re-export commonly used types for convenience
pub use config::{AppConfig, CliConfig, FeedSettings, GateSettings, IngestionSettings};
pub use download::{DiskSaveSink, ForcedDownloader, SaveSink};
pub use feed::FeedController;
pub use gate::{ActionGate, GateDecision, GateState, GuardedAction, GuardedActions};
pub use ingestion::{
    IngestionManager, PixabayClient, RandomTopicStrategy, SearchApi, TopicStrategy,
};
pub use notify::{Notifier, TracingNotifier};
pub use persistence::{NullSnapshotStore, Snapshot, SnapshotStore, SqliteSnapshotStore};
pub use store::{AppStore, MediaKind, Pin, Theme, User, UserRole};
