//! HTTP handlers

mod entries;
mod hash;
mod health;
mod sheets;
mod verify;

pub use entries::{list_entries, submit_entry};
pub use hash::generate_hash;
pub use health::health_check;
pub use sheets::{create_sheet, get_sheet};
pub use verify::verify_receipt;
