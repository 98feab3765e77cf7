//! Rotisserie scoring engine
//!
//! Pure, synchronous computations over snapshots of team statistics:
//! - `categories`: the ordered scoring category configuration
//! - `stat_line`: per-team statistic rows with safe numeric coercion
//! - `ranker`: ranks teams within a single category and assigns points
//! - `standings`: sums category points into period standings
//! - `season`: sums period standings into season standings

pub mod categories;
pub mod ranker;
pub mod season;
pub mod standings;
pub mod stat_line;

pub use categories::{CategoryConfig, CategoryDefinition};
pub use ranker::{rank, rank_with, CategoryRankRow, TieBreak};
pub use season::{compute_season_standings, PeriodStatLines};
pub use standings::{
    compute_standings, compute_standings_with, CategoryScore, ScoringOptions, StandingsRow,
};
pub use stat_line::TeamStatLine;
