//! Application configuration.
//!
//! Settings are read from a TOML file (default
//! `<config_dir>/fbl-standings/config.toml`, overridable with `--config` or
//! `FBL_CONFIG`). A missing file means defaults. The database path can also
//! be overridden with `--database` or `FBL_DATABASE`.
//!
//! ```toml
//! database_path = "/var/lib/fbl/league.db"
//! tie_break = "shared"
//!
//! [[categories]]
//! key = "OBP"
//! label = "On Base Percentage"
//!
//! [[categories]]
//! key = "ERA"
//! label = "Earned Run Average"
//! lower_is_better = true
//! ```

use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{
    error::{FblError, Result},
    scoring::{CategoryConfig, CategoryDefinition, TieBreak},
    storage::LeagueDatabase,
    CONFIG_PATH_ENV_VAR, DATABASE_PATH_ENV_VAR,
};

/// Raw file contents; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    database_path: Option<PathBuf>,
    tie_break: Option<TieBreak>,
    categories: Option<Vec<CategoryDefinition>>,
}

/// Resolved configuration used by commands.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_path: Option<PathBuf>,
    pub tie_break: TieBreak,
    pub categories: CategoryConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            tie_break: TieBreak::default(),
            categories: CategoryConfig::roto_5x5(),
        }
    }
}

impl AppConfig {
    /// Load from an explicit path, `FBL_CONFIG`, or the default location.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match std::env::var_os(CONFIG_PATH_ENV_VAR) {
                Some(value) => PathBuf::from(value),
                None => match Self::default_path() {
                    Some(path) => path,
                    None => return Ok(Self::default()),
                },
            },
        };

        if !path.exists() {
            if explicit.is_some() {
                return Err(FblError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading config file");
        Self::from_toml_str(&fs::read_to_string(&path)?)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents)?;

        let categories = match file.categories {
            Some(list) => CategoryConfig::new(list)?,
            None => CategoryConfig::roto_5x5(),
        };

        Ok(Self {
            database_path: file.database_path,
            tie_break: file.tie_break.unwrap_or_default(),
            categories,
        })
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fbl-standings").join("config.toml"))
    }

    /// Database path by precedence: CLI flag, `FBL_DATABASE`, config file, cache dir.
    pub fn resolve_database_path(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = cli_override {
            return Ok(path.to_path_buf());
        }
        if let Some(value) = std::env::var_os(DATABASE_PATH_ENV_VAR) {
            return Ok(PathBuf::from(value));
        }
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }
        Ok(LeagueDatabase::default_path()?)
    }
}
