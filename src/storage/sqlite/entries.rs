//! Attendance entry persistence

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

use super::store::SqliteStore;
use crate::error::{ServerError, ServerResult, StorageError};
use crate::receipt::canonical_created_at;
use crate::traits::{AttendanceEntry, NewEntry};

const ENTRY_COLUMNS: &str = "id, sheet_id, first_name, last_name, timestamp, email, phone, \
                             rank, badge_number, unit, age, attendance_hash, created_at";

impl SqliteStore {
    /// Insert a new entry (phase one): assigns `id` and `created_at`,
    /// leaves `attendance_hash` NULL.
    pub(crate) fn insert_entry_impl(&self, params: NewEntry) -> ServerResult<AttendanceEntry> {
        let conn = self.get_conn()?;

        let id = Uuid::new_v4();
        // Render once and parse back so the in-memory value carries exactly
        // the precision the TEXT column does.
        let created_at_text = canonical_created_at(&Utc::now());
        let created_at = parse_created_at(&created_at_text)?;

        conn.execute(
            "INSERT INTO musterentries (id, sheet_id, first_name, last_name, timestamp, email, \
             phone, rank, badge_number, unit, age, attendance_hash, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, NULL, ?12)",
            rusqlite::params![
                id.to_string(),
                params.sheet_id.to_string(),
                params.first_name,
                params.last_name,
                params.timestamp,
                params.email,
                params.phone,
                params.rank,
                params.badge_number,
                params.unit,
                params.age,
                created_at_text,
            ],
        )?;

        Ok(AttendanceEntry {
            id,
            sheet_id: params.sheet_id,
            first_name: params.first_name,
            last_name: params.last_name,
            timestamp: params.timestamp,
            email: params.email,
            phone: params.phone,
            rank: params.rank,
            badge_number: params.badge_number,
            unit: params.unit,
            age: params.age,
            attendance_hash: None,
            created_at,
        })
    }

    /// Attach the receipt hash (phase two). Exactly-once: a row that
    /// already carries a hash is never overwritten.
    pub(crate) fn attach_hash_impl(&self, entry_id: &Uuid, hash: &str) -> ServerResult<()> {
        let conn = self.get_conn()?;

        let updated = conn.execute(
            "UPDATE musterentries SET attendance_hash = ?1 \
             WHERE id = ?2 AND attendance_hash IS NULL",
            params![hash, entry_id.to_string()],
        )?;

        if updated == 1 {
            return Ok(());
        }

        // Distinguish "no such entry" from "hash already attached"
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM musterentries WHERE id = ?1)",
            params![entry_id.to_string()],
            |row| row.get(0),
        )?;

        if exists {
            Err(ServerError::Storage(StorageError::Corruption(format!(
                "entry {} already has a hash attached",
                entry_id
            ))))
        } else {
            Err(ServerError::EntryNotFound(entry_id.to_string()))
        }
    }

    pub(crate) fn get_entry_impl(&self, id: &Uuid) -> ServerResult<AttendanceEntry> {
        let conn = self.get_conn()?;
        conn.query_row(
            &format!("SELECT {ENTRY_COLUMNS} FROM musterentries WHERE id = ?1"),
            params![id.to_string()],
            entry_from_row,
        )
        .optional()?
        .ok_or_else(|| ServerError::EntryNotFound(id.to_string()))?
        .into_entry()
    }

    pub(crate) fn find_entry_by_hash_impl(
        &self,
        hash: &str,
    ) -> ServerResult<Option<AttendanceEntry>> {
        let conn = self.get_conn()?;
        conn.query_row(
            &format!("SELECT {ENTRY_COLUMNS} FROM musterentries WHERE attendance_hash = ?1"),
            params![hash],
            entry_from_row,
        )
        .optional()?
        .map(EntryRow::into_entry)
        .transpose()
    }

    pub(crate) fn list_entries_impl(&self, sheet_id: &Uuid) -> ServerResult<Vec<AttendanceEntry>> {
        let conn = self.get_conn()?;
        collect_entries(&conn, sheet_id)
    }
}

/// Raw row before UUID/timestamp parsing
struct EntryRow {
    id: String,
    sheet_id: String,
    first_name: String,
    last_name: String,
    timestamp: String,
    email: Option<String>,
    phone: Option<String>,
    rank: Option<String>,
    badge_number: Option<String>,
    unit: Option<String>,
    age: Option<u32>,
    attendance_hash: Option<String>,
    created_at: String,
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<EntryRow> {
    Ok(EntryRow {
        id: row.get(0)?,
        sheet_id: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        timestamp: row.get(4)?,
        email: row.get(5)?,
        phone: row.get(6)?,
        rank: row.get(7)?,
        badge_number: row.get(8)?,
        unit: row.get(9)?,
        age: row.get(10)?,
        attendance_hash: row.get(11)?,
        created_at: row.get(12)?,
    })
}

impl EntryRow {
    fn into_entry(self) -> ServerResult<AttendanceEntry> {
        Ok(AttendanceEntry {
            id: self.id.parse()?,
            sheet_id: self.sheet_id.parse()?,
            first_name: self.first_name,
            last_name: self.last_name,
            timestamp: self.timestamp,
            email: self.email,
            phone: self.phone,
            rank: self.rank,
            badge_number: self.badge_number,
            unit: self.unit,
            age: self.age,
            attendance_hash: self.attendance_hash,
            created_at: parse_created_at(&self.created_at)?,
        })
    }
}

fn parse_created_at(text: &str) -> ServerResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            ServerError::Storage(StorageError::Corruption(format!(
                "unparseable created_at '{}': {}",
                text, e
            )))
        })
}

fn collect_entries(conn: &Connection, sheet_id: &Uuid) -> ServerResult<Vec<AttendanceEntry>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ENTRY_COLUMNS} FROM musterentries WHERE sheet_id = ?1 ORDER BY created_at, rowid"
    ))?;
    let rows = stmt.query_map(params![sheet_id.to_string()], entry_from_row)?;

    let mut entries = Vec::new();
    for row in rows {
        entries.push(row?.into_entry()?);
    }
    Ok(entries)
}
