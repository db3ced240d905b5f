//! Canonical form of an attendance entry for hashing
//!
//! The canonical byte string must be reproduced bit-for-bit by every
//! implementation that issues or verifies receipts: field order, key
//! names, normalization rules, and the salt constant are all part of the
//! wire contract.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::error::{ServerError, ServerResult};
use crate::traits::AttendanceEntry;

/// Shared salt appended to the canonical structure before digesting.
///
/// This is process-wide immutable configuration, not a secret key: it
/// raises the bar against casual forgery but does not resist anyone with
/// the source. Changing it invalidates every receipt issued so far, so
/// any rotation must be an explicit versioned migration.
pub const RECEIPT_SALT: &str = "muster-sheets-attendance-2024";

/// Render a store-assigned creation instant in its canonical textual form.
///
/// Used both when persisting `created_at` and when rebuilding the
/// hashable view, so parse/format round-trips are byte-identical.
pub(crate) fn canonical_created_at(created_at: &DateTime<Utc>) -> String {
    created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// An entry in hashable form: every field a receipt hash is computed over.
///
/// Only complete entries can reach this type. A stored [`AttendanceEntry`]
/// always has its store-assigned `id` and `created_at`, and the builder
/// refuses to produce a view while any required field is missing. This is
/// what enforces the two-phase write: there is no hashable view of an
/// entry the store has not inserted yet.
#[derive(Debug, Clone)]
pub struct HashableEntry {
    pub id: String,
    pub sheet_id: String,
    pub first_name: String,
    pub last_name: String,
    pub timestamp: String,
    pub created_at: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub rank: Option<String>,
    pub badge_number: Option<String>,
    pub unit: Option<String>,
    pub age: Option<u32>,
}

/// Canonical record layout. Field order and key names are part of the
/// receipt contract; serde_json serializes struct fields in declaration
/// order, giving the exact byte string older receipts were issued over.
#[derive(Serialize)]
struct CanonicalRecord<'a> {
    id: &'a str,
    #[serde(rename = "sheetId")]
    sheet_id: &'a str,
    #[serde(rename = "firstName")]
    first_name: String,
    #[serde(rename = "lastName")]
    last_name: String,
    timestamp: &'a str,
    #[serde(rename = "createdAt")]
    created_at: &'a str,
    email: String,
    phone: String,
    rank: String,
    #[serde(rename = "badgeNumber")]
    badge_number: String,
    unit: String,
    age: u32,
    salt: &'static str,
}

/// Lowercase and trim (name-like fields)
fn fold(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Trim only (identifier-like fields keep their case)
fn trim_opt(s: &Option<String>) -> String {
    s.as_deref().map(str::trim).unwrap_or_default().to_string()
}

impl HashableEntry {
    /// Build the hashable view of a stored entry.
    pub fn from_entry(entry: &AttendanceEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            sheet_id: entry.sheet_id.to_string(),
            first_name: entry.first_name.clone(),
            last_name: entry.last_name.clone(),
            timestamp: entry.timestamp.clone(),
            created_at: canonical_created_at(&entry.created_at),
            email: entry.email.clone(),
            phone: entry.phone.clone(),
            rank: entry.rank.clone(),
            badge_number: entry.badge_number.clone(),
            unit: entry.unit.clone(),
            age: entry.age,
        }
    }

    /// Builder for loosely-typed inputs (e.g. the hash endpoint).
    pub fn builder() -> HashableEntryBuilder {
        HashableEntryBuilder::default()
    }

    /// Serialize the canonical record, salt included.
    pub fn canonical_string(&self) -> ServerResult<String> {
        let record = CanonicalRecord {
            id: &self.id,
            sheet_id: &self.sheet_id,
            first_name: fold(&self.first_name),
            last_name: fold(&self.last_name),
            timestamp: &self.timestamp,
            created_at: &self.created_at,
            email: fold(self.email.as_deref().unwrap_or_default()),
            phone: trim_opt(&self.phone),
            rank: trim_opt(&self.rank),
            badge_number: trim_opt(&self.badge_number),
            unit: trim_opt(&self.unit),
            age: self.age.unwrap_or(0),
            salt: RECEIPT_SALT,
        };
        serde_json::to_string(&record)
            .map_err(|e| ServerError::Internal(format!("canonicalization failed: {e}")))
    }
}

/// Builder that refuses to produce a hashable view until every
/// store-assigned and required field is present.
#[derive(Debug, Default)]
pub struct HashableEntryBuilder {
    id: Option<String>,
    sheet_id: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    timestamp: Option<String>,
    created_at: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    rank: Option<String>,
    badge_number: Option<String>,
    unit: Option<String>,
    age: Option<u32>,
}

impl HashableEntryBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn sheet_id(mut self, sheet_id: impl Into<String>) -> Self {
        self.sheet_id = Some(sheet_id.into());
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    pub fn rank(mut self, rank: Option<String>) -> Self {
        self.rank = rank;
        self
    }

    pub fn badge_number(mut self, badge_number: Option<String>) -> Self {
        self.badge_number = badge_number;
        self
    }

    pub fn unit(mut self, unit: Option<String>) -> Self {
        self.unit = unit;
        self
    }

    pub fn age(mut self, age: Option<u32>) -> Self {
        self.age = age;
        self
    }

    /// Build the view, failing fast on the first missing required field.
    pub fn build(self) -> ServerResult<HashableEntry> {
        Ok(HashableEntry {
            id: self.id.ok_or(ServerError::MissingField("id"))?,
            sheet_id: self.sheet_id.ok_or(ServerError::MissingField("sheetId"))?,
            first_name: self
                .first_name
                .ok_or(ServerError::MissingField("firstName"))?,
            last_name: self
                .last_name
                .ok_or(ServerError::MissingField("lastName"))?,
            timestamp: self
                .timestamp
                .ok_or(ServerError::MissingField("timestamp"))?,
            created_at: self
                .created_at
                .ok_or(ServerError::MissingField("createdAt"))?,
            email: self.email,
            phone: self.phone,
            rank: self.rank,
            badge_number: self.badge_number,
            unit: self.unit,
            age: self.age,
        })
    }
}
