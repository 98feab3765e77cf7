//! Storage layer for league standings data
//!
//! This module wraps the SQLite database that owns the league's teams,
//! scoring periods and per-period team statistics:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Read/write operations

pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::LeagueDatabase;
