//! SQLite schema

use rusqlite::Connection;

use crate::error::ServerResult;

/// Current schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Create all tables (idempotent)
pub fn create_tables(conn: &Connection) -> ServerResult<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Record the schema version in the config table
pub fn record_schema_version(conn: &Connection) -> ServerResult<()> {
    let now = chrono::Utc::now().to_rfc3339();
    conn.execute(
        "INSERT OR REPLACE INTO muster_config (key, value, updated_at) VALUES ('schema_version', ?1, ?2)",
        rusqlite::params![SCHEMA_VERSION.to_string(), now],
    )?;
    Ok(())
}

const SCHEMA_SQL: &str = r#"
-- Core configuration
CREATE TABLE IF NOT EXISTS muster_config (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Muster sheets (event/roster definitions)
CREATE TABLE IF NOT EXISTS mustersheets (
    id TEXT PRIMARY KEY,                    -- UUID as text
    title TEXT NOT NULL,
    description TEXT,
    required_fields TEXT,                   -- JSON array (nullable)
    created_at TEXT NOT NULL                -- RFC 3339
);

-- Attendance entries (sign-in submissions)
CREATE TABLE IF NOT EXISTS musterentries (
    id TEXT PRIMARY KEY,                    -- UUID as text, store-assigned
    sheet_id TEXT NOT NULL REFERENCES mustersheets(id),
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    timestamp TEXT NOT NULL,                -- client-supplied ISO 8601, verbatim
    email TEXT,
    phone TEXT,
    rank TEXT,
    badge_number TEXT,
    unit TEXT,
    age INTEGER,
    attendance_hash TEXT,                   -- NULL until phase two attaches it
    created_at TEXT NOT NULL                -- RFC 3339, store-assigned
);

CREATE INDEX IF NOT EXISTS idx_musterentries_sheet
    ON musterentries(sheet_id, created_at);

-- Receipt lookup path; partial so NULL (phase-one) rows stay out
CREATE UNIQUE INDEX IF NOT EXISTS idx_musterentries_hash
    ON musterentries(attendance_hash)
    WHERE attendance_hash IS NOT NULL;
"#;
