//! Single-category ranking.

use crate::cli::types::ids::TeamId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::stat_line::TeamStatLine;


/// How equal category values are ranked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Every team gets a distinct rank; equal values keep their input order.
    #[default]
    InputOrder,
    /// Competition ranking: equal values share the best rank of the group
    /// and the following rank is skipped (1, 2, 2, 4).
    Shared,
}

/// Ranking result for one team in one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRankRow {
    pub team_id: Option<TeamId>,
    pub team_name: String,
    pub value: f64,
    /// 1 = best.
    pub rank: u32,
    pub points: u32,
}

/// Rank `rows` in one category with the default `TieBreak::InputOrder` policy.
///
/// For N rows the team at rank `r` earns `N - r + 1` points. Output is in
/// rank order; empty input gives empty output.
pub fn rank(rows: &[TeamStatLine], category_key: &str, lower_is_better: bool) -> Vec<CategoryRankRow> {
    rank_with(rows, category_key, lower_is_better, TieBreak::InputOrder)
}

/// Rank `rows` in one category using an explicit tie-break policy.
pub fn rank_with(
    rows: &[TeamStatLine],
    category_key: &str,
    lower_is_better: bool,
    tie_break: TieBreak,
) -> Vec<CategoryRankRow> {
    let n = rows.len() as u32;

    let mut ordered: Vec<(&TeamStatLine, f64)> =
        rows.iter().map(|row| (row, row.value(category_key))).collect();

    // sort_by is stable, so ties stay in input order
    ordered.sort_by(|(_, a), (_, b)| compare_values(*a, *b, lower_is_better));

    let mut ranked = Vec::with_capacity(ordered.len());
    let mut previous: Option<(f64, u32)> = None;

    for (position, (row, value)) in ordered.into_iter().enumerate() {
        let sequential = position as u32 + 1;
        let rank = match (tie_break, previous) {
            (TieBreak::Shared, Some((prev_value, prev_rank))) if prev_value == value => prev_rank,
            _ => sequential,
        };
        previous = Some((value, rank));

        ranked.push(CategoryRankRow {
            team_id: row.team_id,
            team_name: row.team_name.clone(),
            value,
            rank,
            points: n - rank + 1,
        });
    }

    ranked
}

/// Better values sort first. Values are always finite after coercion.
fn compare_values(a: f64, b: f64, lower_is_better: bool) -> Ordering {
    let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
    if lower_is_better {
        ord
    } else {
        ord.reverse()
    }
}
