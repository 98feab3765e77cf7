//! Error types for the fantasy baseball standings CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, FblError>;

#[derive(Error, Debug)]
pub enum FblError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file parsing failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse ID: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid category configuration: {reason}")]
    InvalidCategories { reason: String },

    #[error("Period {period} not found in season {season}")]
    PeriodNotFound { season: u16, period: u32 },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl From<anyhow::Error> for FblError {
    fn from(err: anyhow::Error) -> Self {
        // Keep typed database errors when the storage layer wrapped one
        match err.downcast::<rusqlite::Error>() {
            Ok(db_err) => FblError::Database(db_err),
            Err(other) => FblError::Storage {
                message: other.to_string(),
            },
        }
    }
}
