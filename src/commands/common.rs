//! Common utilities shared across commands.

use std::path::Path;
use tracing::debug;

use crate::{config::AppConfig, storage::LeagueDatabase, Result};

/// Context containing the resources most commands need
pub struct CommandContext {
    pub config: AppConfig,
    pub db: LeagueDatabase,
}

impl CommandContext {
    /// Load configuration and open the database
    pub fn new(config_path: Option<&Path>, database_override: Option<&Path>) -> Result<Self> {
        let config = AppConfig::load(config_path)?;
        let db_path = config.resolve_database_path(database_override)?;

        debug!(path = %db_path.display(), "connecting to database");
        let db = LeagueDatabase::open(&db_path)?;

        Ok(Self { config, db })
    }

    /// Build a context from already prepared parts
    pub fn from_parts(config: AppConfig, db: LeagueDatabase) -> Self {
        Self { config, db }
    }
}

/// Print a serializable value as pretty JSON on stdout
pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format a stat value for text output: integers without decimals,
/// ratios with three.
pub fn format_stat(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e9 {
        format!("{}", value as i64)
    } else {
        format!("{:.3}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(42.0), "42");
        assert_eq!(format_stat(0.2754), "0.275");
        assert_eq!(format_stat(3.5), "3.500");
        assert_eq!(format_stat(-2.0), "-2");
    }

    #[test]
    fn test_context_new_with_explicit_paths() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "tie_break = \"shared\"\n").unwrap();
        let db_path = dir.path().join("nested").join("league.db");

        let ctx = CommandContext::new(Some(&config_path), Some(&db_path)).unwrap();
        assert_eq!(ctx.config.tie_break, crate::TieBreak::Shared);
        assert!(db_path.exists());
    }
}
