//! SQLite-backed snapshot store implementation.

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::schema::SNAPSHOT_VERSIONED_SCHEMAS;
use super::{Snapshot, SnapshotStore, SNAPSHOT_NAME};

/// Stores the session snapshot as a single JSON row in SQLite.
#[derive(Clone)]
pub struct SqliteSnapshotStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteSnapshotStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path).context("Failed to open snapshot database")?;
        Self::with_connection(conn)
    }

    /// In-memory variant, used by tests.
    pub fn in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        let schema = SNAPSHOT_VERSIONED_SCHEMAS.first().unwrap();
        conn.execute_batch(schema.up)
            .context("Failed to initialize snapshot schema")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

impl SnapshotStore for SqliteSnapshotStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        let conn = self.conn.lock().unwrap();
        let value: Option<String> = conn
            .query_row(
                "SELECT value FROM snapshots WHERE name = ?1",
                params![SNAPSHOT_NAME],
                |row| row.get(0),
            )
            .optional()
            .context("Failed to read snapshot record")?;

        match value {
            Some(json) => {
                let snapshot =
                    serde_json::from_str(&json).context("Failed to decode snapshot record")?;
                Ok(Some(snapshot))
            }
            None => Ok(None),
        }
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let json = serde_json::to_string(snapshot).context("Failed to encode snapshot")?;
        let updated_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);

        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO snapshots (name, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(name) DO UPDATE SET value = ?2, updated_at = ?3",
            params![SNAPSHOT_NAME, json, updated_at],
        )
        .context("Failed to write snapshot record")?;
        Ok(())
    }
}
