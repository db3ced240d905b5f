//! SQLite store: connection handling and trait implementation

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use rusqlite::Connection;
use uuid::Uuid;

use super::config::SqliteConfig;
use super::schema;
use crate::error::{ServerError, ServerResult, StorageError};
use crate::traits::{AttendanceEntry, MusterSheet, NewEntry, NewSheet, Storage};

/// SQLite implementation of the Storage trait
pub struct SqliteStore {
    /// Database connection (protected by mutex for thread safety)
    conn: Arc<Mutex<Connection>>,

    /// Configuration
    #[allow(dead_code)]
    config: SqliteConfig,
}

impl SqliteStore {
    /// Create a new store with default configuration
    ///
    /// Creates the database file if it doesn't exist.
    pub fn new<P: AsRef<Path>>(path: P) -> ServerResult<Self> {
        let config = SqliteConfig {
            path: path.as_ref().to_string_lossy().to_string(),
            ..Default::default()
        };
        Self::with_config(config)
    }

    /// Create with custom configuration
    pub fn with_config(config: SqliteConfig) -> ServerResult<Self> {
        let conn = Connection::open(&config.path).map_err(|e| {
            ServerError::Storage(StorageError::ConnectionFailed(format!(
                "failed to open db: {}",
                e
            )))
        })?;

        Self::configure_connection(&conn, &config)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            config,
        })
    }

    /// Create an in-memory database (for testing)
    pub fn in_memory() -> ServerResult<Self> {
        let config = SqliteConfig {
            path: ":memory:".to_string(),
            wal_mode: false,
            ..Default::default()
        };
        Self::with_config(config)
    }

    /// Open an existing database (fails if it doesn't exist)
    pub fn open<P: AsRef<Path>>(path: P) -> ServerResult<Self> {
        if !path.as_ref().exists() {
            return Err(ServerError::Storage(StorageError::ConnectionFailed(
                "database does not exist".into(),
            )));
        }
        Self::new(path)
    }

    /// Configure SQLite connection pragmas
    fn configure_connection(conn: &Connection, config: &SqliteConfig) -> ServerResult<()> {
        if config.wal_mode {
            conn.pragma_update(None, "journal_mode", "WAL")?;
        }
        conn.pragma_update(None, "busy_timeout", config.busy_timeout_ms)?;
        if config.foreign_keys {
            conn.pragma_update(None, "foreign_keys", "ON")?;
        }
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Ok(())
    }

    /// Create schema and record its version. Idempotent; call once at startup.
    pub fn initialize(&self) -> ServerResult<()> {
        let conn = self.get_conn()?;
        schema::create_tables(&conn)?;
        schema::record_schema_version(&conn)?;
        Ok(())
    }

    pub(crate) fn get_conn(&self) -> ServerResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| {
            ServerError::Storage(StorageError::ConnectionFailed("lock poisoned".into()))
        })
    }
}

#[async_trait]
impl Storage for SqliteStore {
    async fn create_sheet(&self, params: NewSheet) -> ServerResult<MusterSheet> {
        self.create_sheet_impl(params)
    }

    async fn get_sheet(&self, id: &Uuid) -> ServerResult<MusterSheet> {
        self.get_sheet_impl(id)
    }

    async fn insert_entry(&self, params: NewEntry) -> ServerResult<AttendanceEntry> {
        self.insert_entry_impl(params)
    }

    async fn attach_hash(&self, entry_id: &Uuid, hash: &str) -> ServerResult<()> {
        self.attach_hash_impl(entry_id, hash)
    }

    async fn get_entry(&self, id: &Uuid) -> ServerResult<AttendanceEntry> {
        self.get_entry_impl(id)
    }

    async fn find_entry_by_hash(&self, hash: &str) -> ServerResult<Option<AttendanceEntry>> {
        self.find_entry_by_hash_impl(hash)
    }

    async fn list_entries(&self, sheet_id: &Uuid) -> ServerResult<Vec<AttendanceEntry>> {
        self.list_entries_impl(sheet_id)
    }

    async fn health_check(&self) -> ServerResult<()> {
        let conn = self.get_conn()?;
        conn.query_row("SELECT 1", [], |_| Ok(()))?;
        Ok(())
    }
}
