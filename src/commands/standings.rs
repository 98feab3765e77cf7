//! Period and season standings commands.

use std::fmt::Write as _;
use tracing::info;

use crate::{
    cli::StandingsOutput,
    scoring::{
        compute_season_standings, compute_standings_with, CategoryDefinition, ScoringOptions,
        StandingsRow,
    },
    FblError, PeriodId, Result, Season,
};

use super::common::{format_stat, print_json, CommandContext};

fn scoring_options(ctx: &CommandContext, output: &StandingsOutput) -> ScoringOptions {
    ScoringOptions {
        tie_break: output.tie_break.unwrap_or(ctx.config.tie_break),
        include_breakdown: output.breakdown,
    }
}

/// Standings for one period of a season from stored stats
pub fn period_standings(
    ctx: &CommandContext,
    season: Season,
    period_id: PeriodId,
    options: &ScoringOptions,
) -> Result<Vec<StandingsRow>> {
    if ctx.db.get_period(season, period_id)?.is_none() {
        return Err(FblError::PeriodNotFound {
            season: season.as_u16(),
            period: period_id.as_u32(),
        });
    }

    let lines = ctx.db.get_period_stat_lines(season, period_id)?;
    Ok(compute_standings_with(
        &lines,
        ctx.config.categories.categories(),
        options,
    ))
}

/// Season standings from every stored period of `season`
pub fn season_standings(
    ctx: &CommandContext,
    season: Season,
    options: &ScoringOptions,
) -> Result<Vec<StandingsRow>> {
    let periods = ctx.db.get_season_stat_lines(season)?;
    info!(season = %season, periods = periods.len(), "computing season standings");
    Ok(compute_season_standings(
        &periods,
        ctx.config.categories.categories(),
        options,
    ))
}

/// Handle `standings period`
pub fn handle_period_standings(
    ctx: &CommandContext,
    season: Season,
    period_id: PeriodId,
    output: &StandingsOutput,
) -> Result<()> {
    let options = scoring_options(ctx, output);
    let rows = period_standings(ctx, season, period_id, &options)?;

    if output.json {
        return print_json(&rows);
    }

    println!("Standings for period {} of {}", period_id, season);
    print!("{}", render_table(&rows, ctx.config.categories.categories(), true));
    Ok(())
}

/// Handle `standings season`
pub fn handle_season_standings(
    ctx: &CommandContext,
    season: Season,
    output: &StandingsOutput,
) -> Result<()> {
    let options = scoring_options(ctx, output);
    let rows = season_standings(ctx, season, &options)?;

    if output.json {
        return print_json(&rows);
    }

    println!("Season {} standings", season);
    print!("{}", render_table(&rows, ctx.config.categories.categories(), false));
    Ok(())
}

/// Render standings as a text table.
///
/// Breakdown columns appear only when the rows carry one. Period tables show
/// `value (points)` per category, season tables only the points.
pub fn render_table(
    rows: &[StandingsRow],
    categories: &[CategoryDefinition],
    show_values: bool,
) -> String {
    let mut out = String::new();
    if rows.is_empty() {
        out.push_str("No standings data.\n");
        return out;
    }

    let name_width = rows
        .iter()
        .map(|r| r.team_name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);
    let with_breakdown = rows.iter().any(|r| r.categories.is_some());

    let _ = write!(out, "{:>3}  {:<name_width$}  {:>6}", "#", "Team", "Pts");
    if with_breakdown {
        for category in categories {
            let _ = write!(out, "  {:>12}", category.key);
        }
    }
    out.push('\n');

    for (position, row) in rows.iter().enumerate() {
        let _ = write!(
            out,
            "{:>3}  {:<name_width$}  {:>6}",
            position + 1,
            row.team_name,
            row.points
        );

        if let Some(breakdown) = &row.categories {
            for category in categories {
                let cell = match breakdown.get(&category.key) {
                    Some(score) => match (show_values, score.value) {
                        (true, Some(value)) => format!("{} ({})", format_stat(value), score.points),
                        _ => score.points.to_string(),
                    },
                    None => "-".to_string(),
                };
                let _ = write!(out, "  {:>12}", cell);
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::AppConfig,
        scoring::CategoryConfig,
        storage::{LeagueDatabase, Period, Team},
        TeamId, TeamStatLine, TieBreak,
    };

    fn test_context() -> CommandContext {
        let mut db = LeagueDatabase::new_in_memory().unwrap();
        for (id, name) in [(1, "Team A"), (2, "Team B"), (3, "Team C")] {
            db.upsert_team(&Team {
                team_id: TeamId::new(id),
                name: name.to_string(),
                owner: None,
            })
            .unwrap();
        }
        db.upsert_period(&Period {
            period_id: PeriodId::new(1),
            season: Season::new(2025),
            label: None,
        })
        .unwrap();

        for (id, name, r, era) in [(1, "Team A", 10.0, 3.0), (2, "Team B", 20.0, 4.0), (3, "Team C", 10.0, 2.0)] {
            db.store_stat_line(
                Season::new(2025),
                PeriodId::new(1),
                &TeamStatLine::new(TeamId::new(id), name)
                    .with_stat("R", r)
                    .with_stat("ERA", era),
            )
            .unwrap();
        }

        let config = AppConfig {
            categories: CategoryConfig::new(vec![
                CategoryDefinition::new("R", "Runs", false),
                CategoryDefinition::new("ERA", "Earned Run Average", true),
            ])
            .unwrap(),
            ..AppConfig::default()
        };
        CommandContext::from_parts(config, db)
    }

    #[test]
    fn test_period_standings_from_storage() {
        let ctx = test_context();
        let rows = period_standings(
            &ctx,
            Season::new(2025),
            PeriodId::new(1),
            &ScoringOptions::default(),
        )
        .unwrap();

        let summary: Vec<(u32, u32)> = rows.iter().map(|r| (r.team_id.as_u32(), r.points)).collect();
        assert_eq!(summary, vec![(1, 4), (2, 4), (3, 4)]);
    }

    #[test]
    fn test_period_standings_unknown_period() {
        let ctx = test_context();
        let result = period_standings(
            &ctx,
            Season::new(2025),
            PeriodId::new(9),
            &ScoringOptions::default(),
        );
        assert!(matches!(
            result,
            Err(FblError::PeriodNotFound {
                season: 2025,
                period: 9
            })
        ));
    }

    #[test]
    fn test_period_standings_wrong_season() {
        let ctx = test_context();
        let result = period_standings(
            &ctx,
            Season::new(2026),
            PeriodId::new(1),
            &ScoringOptions::default(),
        );
        assert!(matches!(
            result,
            Err(FblError::PeriodNotFound { season: 2026, .. })
        ));
    }

    #[test]
    fn test_season_standings_from_storage() {
        let ctx = test_context();
        let rows = season_standings(&ctx, Season::new(2025), &ScoringOptions::default()).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(season_standings(&ctx, Season::new(1999), &ScoringOptions::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_cli_tie_break_overrides_config() {
        let ctx = test_context();
        let output = StandingsOutput {
            json: false,
            breakdown: false,
            tie_break: Some(TieBreak::Shared),
        };
        assert_eq!(scoring_options(&ctx, &output).tie_break, TieBreak::Shared);

        let output = StandingsOutput {
            tie_break: None,
            ..output
        };
        assert_eq!(scoring_options(&ctx, &output).tie_break, TieBreak::InputOrder);
    }

    #[test]
    fn test_render_table_with_breakdown() {
        let ctx = test_context();
        let options = ScoringOptions {
            include_breakdown: true,
            ..ScoringOptions::default()
        };
        let rows = period_standings(&ctx, Season::new(2025), PeriodId::new(1), &options).unwrap();
        let table = render_table(&rows, ctx.config.categories.categories(), true);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Team") && lines[0].contains("ERA"));
        assert!(lines[1].contains("Team A"));
        assert!(lines[3].contains("2 (3)"));
    }

    #[test]
    fn test_render_table_empty() {
        assert_eq!(render_table(&[], &[], true), "No standings data.\n");
    }
}
