//! Type-safe wrappers for league identifiers and seasons.

pub mod ids;
pub mod time;
