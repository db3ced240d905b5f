//! SQLite implementation of the Storage trait

mod config;
mod entries;
mod schema;
mod sheets;
mod store;

pub use config::SqliteConfig;
pub use store::SqliteStore;
