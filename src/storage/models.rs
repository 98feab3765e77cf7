//! Data models for the storage layer

use crate::cli::types::{
    ids::{PeriodId, TeamId},
    time::Season,
};
use serde::{Deserialize, Serialize};

/// A fantasy team in the league
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub team_id: TeamId,
    pub name: String,
    pub owner: Option<String>,
}

/// A scoring period within a season
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub period_id: PeriodId,
    pub season: Season,
    pub label: Option<String>,
}
