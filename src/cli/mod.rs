//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{
    ids::{PeriodId, TeamId},
    time::Season,
};

use crate::scoring::TieBreak;

/// Output options shared between standings commands
#[derive(Debug, Args)]
pub struct StandingsOutput {
    /// Output results as JSON instead of a text table.
    #[clap(long)]
    pub json: bool,

    /// Include per-category value, rank and points.
    #[clap(long)]
    pub breakdown: bool,

    /// Tie-break policy for equal category values (defaults to the config file).
    #[clap(long, value_enum)]
    pub tie_break: Option<TieBreak>,
}

#[derive(Debug, Subcommand)]
pub enum StandingsCmd {
    /// Standings for a single scoring period.
    Period {
        /// Season year the period belongs to.
        #[clap(long, short)]
        season: Season,

        /// Scoring period ID.
        #[clap(long, short)]
        period: PeriodId,

        #[clap(flatten)]
        output: StandingsOutput,
    },

    /// Season standings: period points summed over every period of the season.
    Season {
        /// Season year (e.g. 2025).
        #[clap(long, short)]
        season: Season,

        #[clap(flatten)]
        output: StandingsOutput,
    },
}

#[derive(Debug, Subcommand)]
pub enum TeamsCmd {
    /// Add or rename a team.
    Add {
        /// Team ID.
        #[clap(long)]
        id: TeamId,

        /// Team name as shown in standings.
        #[clap(long)]
        name: String,

        /// Team owner.
        #[clap(long)]
        owner: Option<String>,
    },

    /// List the league's teams.
    List {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "fbl", about = "Fantasy baseball league standings")]
pub struct Fbl {
    /// SQLite database path (or set `FBL_DATABASE` env var).
    #[clap(long, global = true)]
    pub database: Option<PathBuf>,

    /// Config file path (or set `FBL_CONFIG` env var).
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Show debug logging.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute rotisserie standings
    Standings {
        #[clap(subcommand)]
        cmd: StandingsCmd,
    },

    /// Import a JSON file of team stat lines for one scoring period.
    ///
    /// Each line is matched to a team by `teamId`, or by fuzzy team name when
    /// the ID is missing or unknown. Unmatched lines are reported and skipped.
    Import {
        /// Scoring period ID.
        #[clap(long, short)]
        period: PeriodId,

        /// Season year the period belongs to.
        #[clap(long, short)]
        season: Season,

        /// Period label (e.g. "April").
        #[clap(long)]
        label: Option<String>,

        /// Path to the JSON stat file.
        #[clap(long, short)]
        file: PathBuf,

        /// Clear stats already stored for the period before importing.
        #[clap(long)]
        replace: bool,
    },

    /// Manage league teams
    Teams {
        #[clap(subcommand)]
        cmd: TeamsCmd,
    },

    /// Show the configured scoring categories
    Categories {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_requires_season() {
        let missing = Fbl::try_parse_from(["fbl", "import", "--period", "1", "--file", "p1.json"]);
        assert!(missing.is_err());

        let app = Fbl::try_parse_from([
            "fbl", "import", "--period", "1", "--season", "2025", "--file", "p1.json",
        ])
        .unwrap();
        match app.command {
            Commands::Import { season, period, .. } => {
                assert_eq!(season, Season::new(2025));
                assert_eq!(period, PeriodId::new(1));
            }
            other => panic!("Expected import command, got {other:?}"),
        }
    }

    #[test]
    fn test_standings_commands_require_season() {
        assert!(Fbl::try_parse_from(["fbl", "standings", "season"]).is_err());
        assert!(Fbl::try_parse_from(["fbl", "standings", "period", "-p", "3"]).is_err());

        let app = Fbl::try_parse_from(["fbl", "standings", "period", "-s", "2026", "-p", "3"]).unwrap();
        assert!(matches!(
            app.command,
            Commands::Standings {
                cmd: StandingsCmd::Period { .. }
            }
        ));
    }
}
