//! Season standings: period points summed across every scoring period.

use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use super::{
    categories::CategoryDefinition,
    standings::{compute_standings_with, CategoryScore, ScoringOptions, StandingsRow},
    stat_line::TeamStatLine,
};
use crate::cli::types::ids::{PeriodId, TeamId};

/// Stat lines for one scoring period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodStatLines {
    pub period_id: PeriodId,
    pub lines: Vec<TeamStatLine>,
}

impl PeriodStatLines {
    pub fn new(period_id: PeriodId, lines: Vec<TeamStatLine>) -> Self {
        Self { period_id, lines }
    }
}

/// Sum each team's period standings points across `periods`.
///
/// Periods are independent snapshots, so they are scored in parallel; the
/// merge happens in period order to keep the result deterministic. With a
/// breakdown, each category carries only the summed points.
pub fn compute_season_standings(
    periods: &[PeriodStatLines],
    categories: &[CategoryDefinition],
    options: &ScoringOptions,
) -> Vec<StandingsRow> {
    let per_period: Vec<Vec<StandingsRow>> = periods
        .par_iter()
        .map(|period| compute_standings_with(&period.lines, categories, options))
        .collect();

    let mut season: Vec<StandingsRow> = Vec::new();
    let mut index: HashMap<TeamId, usize> = HashMap::new();

    // First appearance in the input lines fixes the pre-sort order
    for period in periods {
        for line in &period.lines {
            let Some(id) = line.team_id else { continue };
            index.entry(id).or_insert_with(|| {
                season.push(StandingsRow::new(id, &line.team_name, options.include_breakdown));
                season.len() - 1
            });
        }
    }

    for standings in per_period {
        for row in standings {
            let Some(slot) = index.get(&row.team_id) else {
                continue;
            };
            let total = &mut season[*slot];
            total.points += row.points;

            if let (Some(sum), Some(period_breakdown)) = (total.categories.as_mut(), row.categories) {
                for (key, score) in period_breakdown {
                    sum.entry(key)
                        .or_insert(CategoryScore {
                            value: None,
                            rank: None,
                            points: 0,
                        })
                        .points += score.points;
                }
            }
        }
    }

    season.sort_by(|a, b| b.points.cmp(&a.points));

    debug!(
        periods = periods.len(),
        teams = season.len(),
        "computed season standings"
    );
    season
}
