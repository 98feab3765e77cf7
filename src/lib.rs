//! Fantasy Baseball League Standings Library
//!
//! Rotisserie standings for fantasy baseball leagues: per-team category
//! statistics are stored per scoring period, ranked category by category,
//! and turned into period and season standings.
//!
//! ## Features
//!
//! - **Category Ranking**: rank teams in one category, higher- or lower-is-better
//! - **Standings**: N..1 points per category, summed into a sorted table
//! - **Season Standings**: period points summed across a season
//! - **Configurable Categories**: the scoring category list is data (TOML)
//! - **Stat Import**: JSON stat files reconciled to teams by fuzzy name matching
//! - **Database Storage**: teams, periods and team stats in SQLite
//!
//! ## Quick Start
//!
//! ```rust
//! use fbl_standings::{compute_standings, CategoryDefinition, TeamId, TeamStatLine};
//!
//! let rows = vec![
//!     TeamStatLine::new(TeamId::new(1), "Team A").with_stat("R", 10.0).with_stat("ERA", 3.00),
//!     TeamStatLine::new(TeamId::new(2), "Team B").with_stat("R", 20.0).with_stat("ERA", 4.00),
//! ];
//! let categories = vec![
//!     CategoryDefinition::new("R", "Runs", false),
//!     CategoryDefinition::new("ERA", "Earned Run Average", true),
//! ];
//!
//! let standings = compute_standings(&rows, &categories);
//! assert_eq!(standings.len(), 2);
//! assert_eq!(standings[0].points, 3);
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export FBL_DATABASE=~/league.db
//! export FBL_CONFIG=~/fbl.toml
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod scoring;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{
    ids::{PeriodId, TeamId},
    time::Season,
};
pub use error::{FblError, Result};
pub use scoring::{
    compute_season_standings, compute_standings, compute_standings_with, rank, rank_with,
    CategoryConfig, CategoryDefinition, CategoryRankRow, ScoringOptions, StandingsRow,
    TeamStatLine, TieBreak,
};

pub const DATABASE_PATH_ENV_VAR: &str = "FBL_DATABASE";
pub const CONFIG_PATH_ENV_VAR: &str = "FBL_CONFIG";
