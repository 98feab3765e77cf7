//! Scoring category configuration.
//!
//! The category list is data: an ordered set of `key -> {label, direction}`
//! entries. Adding or reordering categories never requires touching the
//! ranking code.

use crate::error::{FblError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One statistical dimension used for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    /// Stat key as it appears on team stat lines (e.g. `"HR"`).
    pub key: String,
    /// Human readable label.
    pub label: String,
    /// True for categories like ERA/WHIP where smaller values rank higher.
    #[serde(default)]
    pub lower_is_better: bool,
}

impl CategoryDefinition {
    pub fn new(key: &str, label: &str, lower_is_better: bool) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            lower_is_better,
        }
    }
}

/// Ordered, validated list of scoring categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryConfig {
    categories: Vec<CategoryDefinition>,
}

impl CategoryConfig {
    /// Build a config, rejecting empty or duplicate keys.
    pub fn new(categories: Vec<CategoryDefinition>) -> Result<Self> {
        if categories.is_empty() {
            return Err(FblError::InvalidCategories {
                reason: "at least one category is required".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for category in &categories {
            let key = category.key.trim();
            if key.is_empty() {
                return Err(FblError::InvalidCategories {
                    reason: format!("category '{}' has an empty key", category.label),
                });
            }
            if !seen.insert(key.to_string()) {
                return Err(FblError::InvalidCategories {
                    reason: format!("duplicate key {}", key),
                });
            }
        }

        Ok(Self { categories })
    }

    /// Standard 5x5 rotisserie categories.
    pub fn roto_5x5() -> Self {
        Self {
            categories: vec![
                CategoryDefinition::new("R", "Runs", false),
                CategoryDefinition::new("HR", "Home Runs", false),
                CategoryDefinition::new("RBI", "Runs Batted In", false),
                CategoryDefinition::new("SB", "Stolen Bases", false),
                CategoryDefinition::new("AVG", "Batting Average", false),
                CategoryDefinition::new("W", "Wins", false),
                CategoryDefinition::new("SV", "Saves", false),
                CategoryDefinition::new("K", "Strikeouts", false),
                CategoryDefinition::new("ERA", "Earned Run Average", true),
                CategoryDefinition::new("WHIP", "Walks + Hits per Inning", true),
            ],
        }
    }

    pub fn categories(&self) -> &[CategoryDefinition] {
        &self.categories
    }

    pub fn get(&self, key: &str) -> Option<&CategoryDefinition> {
        self.categories.iter().find(|c| c.key == key)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self::roto_5x5()
    }
}
