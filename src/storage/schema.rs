//! Database schema and connection management

use crate::error::FblError;
use anyhow::Result;
use dirs::cache_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Database connection manager for league data
pub struct LeagueDatabase {
    pub(crate) conn: Connection,
}

impl LeagueDatabase {
    /// Open the database at the default location and ensure tables exist
    pub fn new() -> Result<Self> {
        let db_path = Self::default_path()?;
        Self::open(&db_path)
    }

    /// Open (or create) the database at `path` and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!(path = %path.display(), "opening league database");
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// In-memory database, mostly useful for tests
    pub fn new_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the default path to the database file
    pub fn default_path() -> Result<PathBuf> {
        let cache_dir = cache_dir().ok_or_else(|| FblError::Config {
            message: "Could not determine cache directory".to_string(),
        })?;
        Ok(cache_dir.join("fbl-standings").join("league.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS teams (
                team_id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                owner TEXT
            )",
            [],
        )?;

        // Period IDs restart every season
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS periods (
                season INTEGER NOT NULL,
                period_id INTEGER NOT NULL,
                label TEXT,
                PRIMARY KEY (season, period_id)
            )",
            [],
        )?;

        // One row per team, period and category
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS team_period_stats (
                team_id INTEGER NOT NULL,
                season INTEGER NOT NULL,
                period_id INTEGER NOT NULL,
                category TEXT NOT NULL,
                value REAL NOT NULL,
                updated_at INTEGER NOT NULL,
                PRIMARY KEY (team_id, season, period_id, category),
                FOREIGN KEY (team_id) REFERENCES teams(team_id),
                FOREIGN KEY (season, period_id) REFERENCES periods(season, period_id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_stats_period
             ON team_period_stats(season, period_id)",
            [],
        )?;

        Ok(())
    }
}
