//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use fbl_standings::{
    cli::{Commands, Fbl, StandingsCmd, TeamsCmd},
    commands::{
        categories::handle_categories,
        import::{handle_import, ImportParams},
        standings::{handle_period_standings, handle_season_standings},
        teams::{handle_add_team, handle_list_teams},
        CommandContext,
    },
    config::AppConfig,
    logging::init_logging,
    Result,
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = Fbl::parse();
    init_logging(app.verbose);

    // Listing categories only needs the config, not the database
    if let Commands::Categories { json } = app.command {
        let config = AppConfig::load(app.config.as_deref())?;
        return handle_categories(&config, json);
    }

    let mut ctx = CommandContext::new(app.config.as_deref(), app.database.as_deref())?;

    match app.command {
        Commands::Standings { cmd } => match cmd {
            StandingsCmd::Period {
                season,
                period,
                output,
            } => handle_period_standings(&ctx, season, period, &output)?,
            StandingsCmd::Season { season, output } => {
                handle_season_standings(&ctx, season, &output)?
            }
        },

        Commands::Import {
            period,
            season,
            label,
            file,
            replace,
        } => {
            handle_import(
                &mut ctx,
                ImportParams {
                    period,
                    season,
                    label,
                    file: &file,
                    replace,
                },
            )?;
        }

        Commands::Teams { cmd } => match cmd {
            TeamsCmd::Add { id, name, owner } => handle_add_team(&mut ctx, id, name, owner)?,
            TeamsCmd::List { json } => handle_list_teams(&ctx, json)?,
        },

        // Handled before the database is opened
        Commands::Categories { .. } => {}
    }

    Ok(())
}
