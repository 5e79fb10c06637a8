//! Session snapshot persistence.
//!
//! One named durable record holds the whole persisted session state. The
//! store is write-through: the app saves after every mutation and loads once
//! at startup. An absent record means a fresh install.

mod schema;
mod sqlite_snapshot_store;

pub use sqlite_snapshot_store::SqliteSnapshotStore;

use std::collections::HashMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::store::models::{Pin, Theme, User};

/// Name of the single record the app persists under.
pub const SNAPSHOT_NAME: &str = "interest-storage";

/// The persisted slice of session state. Everything except the transient
/// search query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub theme: Theme,
    pub current_user: Option<User>,
    pub users: HashMap<String, User>,
    pub saved_pin_ids: Vec<String>,
    pub followed_users: Vec<String>,
    pub pins: Vec<Pin>,
}

pub trait SnapshotStore: Send + Sync {
    /// Loads the snapshot. Returns Ok(None) if none was ever saved.
    fn load(&self) -> Result<Option<Snapshot>>;

    /// Replaces the snapshot. The write is not transactional with respect to
    /// in-memory state; a crash mid-write leaves the previous record intact.
    fn save(&self, snapshot: &Snapshot) -> Result<()>;
}

/// Store that persists nothing. Loads empty, drops every save.
pub struct NullSnapshotStore;

impl SnapshotStore for NullSnapshotStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        Ok(None)
    }

    fn save(&self, _snapshot: &Snapshot) -> Result<()> {
        Ok(())
    }
}
