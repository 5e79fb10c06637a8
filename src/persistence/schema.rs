//! Schema definition for the snapshot database.

/// Versioned schema for the snapshot store.
pub struct SnapshotSchema {
    pub version: usize,
    pub up: &'static str,
}

pub const SNAPSHOT_VERSIONED_SCHEMAS: &[SnapshotSchema] = &[SnapshotSchema {
    version: 1,
    up: r#"
            CREATE TABLE IF NOT EXISTS snapshots (
                name TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );
        "#,
}];
