//! Muster sheet persistence

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

use super::store::SqliteStore;
use crate::error::{ServerError, ServerResult, StorageError};
use crate::traits::{MusterSheet, NewSheet};

impl SqliteStore {
    pub(crate) fn create_sheet_impl(&self, params: NewSheet) -> ServerResult<MusterSheet> {
        let conn = self.get_conn()?;

        let id = Uuid::new_v4();
        let created_at = Utc::now();
        let required_fields_text = params
            .required_fields
            .as_ref()
            .map(|v| serde_json::to_string(v))
            .transpose()?;

        conn.execute(
            "INSERT INTO mustersheets (id, title, description, required_fields, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                id.to_string(),
                params.title,
                params.description,
                required_fields_text,
                created_at.to_rfc3339(),
            ],
        )?;

        Ok(MusterSheet {
            id,
            title: params.title,
            description: params.description,
            required_fields: params.required_fields,
            created_at,
        })
    }

    pub(crate) fn get_sheet_impl(&self, id: &Uuid) -> ServerResult<MusterSheet> {
        let conn = self.get_conn()?;
        conn.query_row(
            "SELECT id, title, description, required_fields, created_at \
             FROM mustersheets WHERE id = ?1",
            params![id.to_string()],
            sheet_from_row,
        )
        .optional()?
        .ok_or_else(|| ServerError::SheetNotFound(id.to_string()))?
        .into_sheet()
    }
}

struct SheetRow {
    id: String,
    title: String,
    description: Option<String>,
    required_fields: Option<String>,
    created_at: String,
}

fn sheet_from_row(row: &Row<'_>) -> rusqlite::Result<SheetRow> {
    Ok(SheetRow {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        required_fields: row.get(3)?,
        created_at: row.get(4)?,
    })
}

impl SheetRow {
    fn into_sheet(self) -> ServerResult<MusterSheet> {
        let required_fields = self
            .required_fields
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(|e| {
                ServerError::Storage(StorageError::Corruption(format!(
                    "unparseable required_fields: {}",
                    e
                )))
            })?;

        Ok(MusterSheet {
            id: self.id.parse()?,
            title: self.title,
            description: self.description,
            required_fields,
            created_at: DateTime::parse_from_rfc3339(&self.created_at)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| {
                    ServerError::Storage(StorageError::Corruption(format!(
                        "unparseable created_at '{}': {}",
                        self.created_at, e
                    )))
                })?,
        })
    }
}
