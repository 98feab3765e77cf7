//! Import of external stat files into the league database.
//!
//! A stat file is a JSON array of team stat lines for one scoring period.
//! Lines are reconciled against the league's teams (by ID when it is known,
//! otherwise by fuzzy team name) before being stored. Lines that cannot be
//! attributed to a team are reported, never fatal.

pub mod name_match;

use serde::Serialize;
use serde_json::Value;
use std::{collections::HashSet, fs, path::Path};
use tracing::{info, warn};

use crate::{
    cli::types::ids::TeamId,
    error::Result,
    scoring::TeamStatLine,
    storage::{LeagueDatabase, Period},
};
use name_match::{MatchOutcome, TeamLookup};

/// Outcome of reconciling and storing one stat file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub imported: usize,
    /// Names that matched no team.
    pub unmatched: Vec<String>,
    /// Names that matched several teams equally well.
    pub ambiguous: Vec<String>,
    /// Names of later lines for a team that already had one.
    pub duplicates: Vec<String>,
    /// Array entries that were not stat line objects.
    pub malformed: usize,
}

/// Stat lines read from a file, plus the entries that could not be read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatFile {
    pub lines: Vec<TeamStatLine>,
    pub malformed: usize,
}

/// Read a JSON array of stat lines.
pub fn read_stat_lines(path: &Path) -> Result<StatFile> {
    parse_stat_lines(&fs::read_to_string(path)?)
}

/// Parse a JSON array of stat lines entry by entry.
///
/// The document must be an array; an entry that is not a stat line object is
/// skipped with a warning and counted instead of failing the whole file.
pub fn parse_stat_lines(raw: &str) -> Result<StatFile> {
    let entries: Vec<Value> = serde_json::from_str(raw)?;
    let mut file = StatFile::default();

    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<TeamStatLine>(entry) {
            Ok(line) => file.lines.push(line),
            Err(err) => {
                warn!(index, error = %err, "skipping malformed stat line");
                file.malformed += 1;
            }
        }
    }

    Ok(file)
}

/// Attach a known team ID to every line that can be attributed to one.
///
/// A line whose `teamId` is a known team is kept as-is. Otherwise its
/// name is resolved through `lookup`. Only the first line per team is kept.
/// Returned lines all carry a team ID.
pub fn reconcile_lines(
    lines: Vec<TeamStatLine>,
    lookup: &mut TeamLookup,
) -> (Vec<TeamStatLine>, ImportSummary) {
    let mut summary = ImportSummary::default();
    let mut matched = Vec::with_capacity(lines.len());
    let mut seen: HashSet<TeamId> = HashSet::new();

    for mut line in lines {
        let team_id = match line.team_id.filter(|id| lookup.contains(*id)) {
            Some(id) => id,
            None => {
                if let Some(id) = line.team_id {
                    warn!(team_id = %id, team_name = %line.team_name, "unknown team id, matching by name");
                }
                match lookup.resolve(&line.team_name) {
                    MatchOutcome::Exact(id) | MatchOutcome::Fuzzy(id) => id,
                    MatchOutcome::Ambiguous(ids) => {
                        warn!(team_name = %line.team_name, candidates = ?ids, "ambiguous team name, skipping");
                        summary.ambiguous.push(line.team_name);
                        continue;
                    }
                    MatchOutcome::NotFound => {
                        warn!(team_name = %line.team_name, "no team matches name, skipping");
                        summary.unmatched.push(line.team_name);
                        continue;
                    }
                }
            }
        };

        if !seen.insert(team_id) {
            warn!(team_id = %team_id, team_name = %line.team_name, "team already has a stat line, skipping");
            summary.duplicates.push(line.team_name);
            continue;
        }

        line.team_id = Some(team_id);
        matched.push(line);
    }

    (matched, summary)
}

/// Reconcile `lines` against the league's teams and store them for `period`.
///
/// The period row, the optional clear (`replace`) and every stat line are
/// written in one transaction.
pub fn import_period(
    db: &mut LeagueDatabase,
    period: &Period,
    lines: Vec<TeamStatLine>,
    replace: bool,
) -> Result<ImportSummary> {
    let teams = db.list_teams()?;
    let mut lookup = TeamLookup::new(&teams);
    let (matched, mut summary) = reconcile_lines(lines, &mut lookup);

    let removed = db.store_period_stat_lines(period, &matched, replace)?;
    summary.imported = matched.len();

    info!(
        season = %period.season,
        period = %period.period_id,
        removed,
        imported = summary.imported,
        unmatched = summary.unmatched.len(),
        ambiguous = summary.ambiguous.len(),
        duplicates = summary.duplicates.len(),
        "imported stat lines"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::{
        ids::{PeriodId, TeamId},
        time::Season,
    };
    use crate::storage::Team;
    use serde_json::json;

    fn league_teams() -> Vec<Team> {
        vec![
            Team {
                team_id: TeamId::new(1),
                name: "The Sluggers".to_string(),
                owner: None,
            },
            Team {
                team_id: TeamId::new(2),
                name: "Mudville Nine".to_string(),
                owner: Some("Casey".to_string()),
            },
        ]
    }

    fn db_with_teams() -> LeagueDatabase {
        let mut db = LeagueDatabase::new_in_memory().unwrap();
        for team in league_teams() {
            db.upsert_team(&team).unwrap();
        }
        db
    }

    fn period_one() -> Period {
        Period {
            period_id: PeriodId::new(1),
            season: Season::new(2025),
            label: None,
        }
    }

    fn parse(value: serde_json::Value) -> Vec<TeamStatLine> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_reconcile_by_id_and_name() {
        let mut lookup = TeamLookup::new(&league_teams());
        let lines = parse(json!([
            { "teamId": 2, "teamName": "whatever", "HR": 10 },
            { "teamName": "sluggers", "HR": 12 },
            { "teamName": "Rally Monkeys", "HR": 3 }
        ]));

        let (matched, summary) = reconcile_lines(lines, &mut lookup);
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].team_id, Some(TeamId::new(2)));
        assert_eq!(matched[1].team_id, Some(TeamId::new(1)));
        assert_eq!(summary.unmatched, vec!["Rally Monkeys".to_string()]);
        assert!(summary.ambiguous.is_empty());
    }

    #[test]
    fn test_reconcile_unknown_id_falls_back_to_name() {
        let mut lookup = TeamLookup::new(&league_teams());
        let lines = parse(json!([{ "teamId": 77, "teamName": "Mudville", "R": 40 }]));

        let (matched, _) = reconcile_lines(lines, &mut lookup);
        assert_eq!(matched[0].team_id, Some(TeamId::new(2)));
    }

    #[test]
    fn test_import_period_stores_matched_lines() {
        let mut db = db_with_teams();
        let lines = parse(json!([
            { "teamName": "The Sluggers", "R": 55, "ERA": "3.80" },
            { "teamName": "Mudville Nine", "R": 61, "ERA": 4.1 },
            { "teamName": "", "R": 99 }
        ]));

        let summary = import_period(&mut db, &period_one(), lines, false).unwrap();
        assert_eq!(summary.imported, 2);
        assert_eq!(summary.unmatched, vec![String::new()]);

        let stored = db
            .get_period_stat_lines(Season::new(2025), PeriodId::new(1))
            .unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].value("ERA"), 3.8);
        assert!(db
            .get_period(Season::new(2025), PeriodId::new(1))
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_import_period_replace_clears_old_categories() {
        let mut db = db_with_teams();
        let first = parse(json!([{ "teamId": 1, "teamName": "Sluggers", "SB": 5, "OBP": 0.33 }]));
        import_period(&mut db, &period_one(), first, false).unwrap();

        let second = parse(json!([{ "teamId": 1, "teamName": "Sluggers", "SB": 8 }]));
        import_period(&mut db, &period_one(), second, true).unwrap();

        let stored = db
            .get_period_stat_lines(Season::new(2025), PeriodId::new(1))
            .unwrap();
        assert_eq!(stored[0].value("SB"), 8.0);
        assert!(!stored[0].stats.contains_key("OBP"));
    }

    #[test]
    fn test_read_stat_lines_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("period1.json");
        fs::write(&path, r#"[{"teamName": "Sluggers", "HR": "14"}]"#).unwrap();

        let file = read_stat_lines(&path).unwrap();
        assert_eq!(file.lines.len(), 1);
        assert_eq!(file.malformed, 0);
        assert_eq!(file.lines[0].value("HR"), 14.0);
    }

    #[test]
    fn test_parse_stat_lines_skips_bad_entries() {
        let file = parse_stat_lines(
            r#"[
                {"teamId": "2", "teamName": "Mudville Nine", "HR": 9},
                {"teamId": 1, "teamName": null, "HR": 4},
                42,
                "Sluggers",
                {"teamName": "Rally Monkeys", "HR": 1}
            ]"#,
        )
        .unwrap();

        assert_eq!(file.malformed, 2);
        assert_eq!(file.lines.len(), 3);
        assert_eq!(file.lines[0].team_id, Some(TeamId::new(2)));
        assert_eq!(file.lines[1].team_name, "");

        let mut lookup = TeamLookup::new(&league_teams());
        let (matched, summary) = reconcile_lines(file.lines, &mut lookup);
        assert_eq!(matched.len(), 2);
        assert_eq!(summary.unmatched, vec!["Rally Monkeys".to_string()]);
    }

    #[test]
    fn test_reconcile_keeps_first_line_per_team() {
        let mut lookup = TeamLookup::new(&league_teams());
        let lines = parse(json!([
            { "teamId": 1, "teamName": "The Sluggers", "HR": 10, "SB": 3 },
            { "teamName": "Sluggers", "HR": 50 },
            { "teamId": 1, "teamName": "again", "HR": 70 }
        ]));

        let (matched, summary) = reconcile_lines(lines, &mut lookup);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].value("HR"), 10.0);
        assert_eq!(
            summary.duplicates,
            vec!["Sluggers".to_string(), "again".to_string()]
        );
    }

    #[test]
    fn test_import_period_does_not_merge_duplicate_lines() {
        let mut db = db_with_teams();
        let lines = parse(json!([
            { "teamId": 1, "teamName": "The Sluggers", "HR": 10, "SB": 3 },
            { "teamName": "Sluggers", "HR": 50 }
        ]));

        let summary = import_period(&mut db, &period_one(), lines, false).unwrap();
        assert_eq!(summary.imported, 1);
        assert_eq!(summary.duplicates.len(), 1);

        let stored = db
            .get_period_stat_lines(Season::new(2025), PeriodId::new(1))
            .unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].value("HR"), 10.0);
        assert_eq!(stored[0].value("SB"), 3.0);
    }

    #[test]
    fn test_same_period_id_in_two_seasons() {
        let mut db = db_with_teams();
        let last_year = parse(json!([{ "teamId": 1, "HR": 10 }]));
        import_period(&mut db, &period_one(), last_year, false).unwrap();

        let next_season = Period {
            period_id: PeriodId::new(1),
            season: Season::new(2026),
            label: None,
        };
        let this_year = parse(json!([{ "teamId": 1, "HR": 3 }]));
        import_period(&mut db, &next_season, this_year, false).unwrap();

        let old = db.get_season_stat_lines(Season::new(2025)).unwrap();
        assert_eq!(old.len(), 1);
        assert_eq!(old[0].lines[0].value("HR"), 10.0);

        let new = db.get_season_stat_lines(Season::new(2026)).unwrap();
        assert_eq!(new.len(), 1);
        assert_eq!(new[0].lines[0].value("HR"), 3.0);
    }

    #[test]
    fn test_read_stat_lines_rejects_non_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"teamName": "Sluggers"}"#).unwrap();

        assert!(matches!(
            read_stat_lines(&path),
            Err(crate::error::FblError::Json(_))
        ));
    }
}
