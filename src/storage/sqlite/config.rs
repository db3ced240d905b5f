//! SQLite storage configuration

/// Configuration for the SQLite store
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// Database file path (":memory:" for in-memory)
    pub path: String,

    /// Enable WAL journal mode
    pub wal_mode: bool,

    /// Busy timeout in milliseconds
    pub busy_timeout_ms: u64,

    /// Enforce foreign keys
    pub foreign_keys: bool,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            path: "./muster.db".to_string(),
            wal_mode: true,
            busy_timeout_ms: 5000,
            foreign_keys: true,
        }
    }
}
