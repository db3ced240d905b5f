//! Trait definitions for external collaborators

pub mod storage;

pub use storage::{AttendanceEntry, MusterSheet, NewEntry, NewSheet, Storage};
