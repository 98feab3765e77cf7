//! Period standings: category points summed per team.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, warn};

use super::{
    categories::CategoryDefinition,
    ranker::{rank_with, TieBreak},
    stat_line::TeamStatLine,
};
use crate::cli::types::ids::TeamId;


/// Knobs for a standings computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoringOptions {
    pub tie_break: TieBreak,
    /// Attach the per-category value/rank/points to each row.
    pub include_breakdown: bool,
}

/// One category's contribution to a team's standings row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    pub points: u32,
}

/// One team's line in the standings table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRow {
    pub team_id: TeamId,
    pub team_name: String,
    pub points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<String, CategoryScore>>,
}

impl StandingsRow {
    pub(crate) fn new(team_id: TeamId, team_name: &str, include_breakdown: bool) -> Self {
        Self {
            team_id,
            team_name: team_name.to_string(),
            points: 0,
            categories: include_breakdown.then(BTreeMap::new),
        }
    }
}

/// Compute standings with the default options (input-order ties, no breakdown).
pub fn compute_standings(
    rows: &[TeamStatLine],
    categories: &[CategoryDefinition],
) -> Vec<StandingsRow> {
    compute_standings_with(rows, categories, &ScoringOptions::default())
}

/// Rank every category, sum each team's points and sort by total, best first.
///
/// Rows without a team id, and repeat rows for a team already seen, are
/// skipped with a warning. Equal totals keep first-seen input order.
pub fn compute_standings_with(
    rows: &[TeamStatLine],
    categories: &[CategoryDefinition],
    options: &ScoringOptions,
) -> Vec<StandingsRow> {
    let scored = identified_rows(rows);

    let mut standings: Vec<StandingsRow> = scored
        .iter()
        .filter_map(|row| {
            row.team_id
                .map(|id| StandingsRow::new(id, &row.team_name, options.include_breakdown))
        })
        .collect();
    let index: HashMap<TeamId, usize> = standings
        .iter()
        .enumerate()
        .map(|(i, row)| (row.team_id, i))
        .collect();

    for category in categories {
        let ranked = rank_with(&scored, &category.key, category.lower_is_better, options.tie_break);

        for entry in ranked {
            let Some(slot) = entry.team_id.and_then(|id| index.get(&id)) else {
                continue;
            };
            let row = &mut standings[*slot];
            row.points += entry.points;

            if let Some(breakdown) = row.categories.as_mut() {
                breakdown.insert(
                    category.key.clone(),
                    CategoryScore {
                        value: Some(entry.value),
                        rank: Some(entry.rank),
                        points: entry.points,
                    },
                );
            }
        }
    }

    // sort_by is stable, so equal totals keep input order
    standings.sort_by(|a, b| b.points.cmp(&a.points));

    debug!(
        teams = standings.len(),
        categories = categories.len(),
        "computed standings"
    );
    standings
}

/// Drop rows that cannot be attributed to a single team.
fn identified_rows(rows: &[TeamStatLine]) -> Vec<TeamStatLine> {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(rows.len());

    for (position, row) in rows.iter().enumerate() {
        match row.team_id {
            None => {
                warn!(
                    position,
                    team_name = %row.team_name,
                    "skipping stat line without a team id"
                );
            }
            Some(id) if !seen.insert(id) => {
                warn!(position, team_id = %id, "skipping duplicate stat line for team");
            }
            Some(_) => kept.push(row.clone()),
        }
    }

    kept
}
