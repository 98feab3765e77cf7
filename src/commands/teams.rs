//! Team management commands.

use crate::{storage::Team, Result, TeamId};

use super::common::{print_json, CommandContext};

/// Handle `teams add`
pub fn handle_add_team(
    ctx: &mut CommandContext,
    team_id: TeamId,
    name: String,
    owner: Option<String>,
) -> Result<()> {
    let team = Team {
        team_id,
        name: name.trim().to_string(),
        owner,
    };
    ctx.db.upsert_team(&team)?;
    println!("✓ Saved team {}: {}", team.team_id, team.name);
    Ok(())
}

/// Handle `teams list`
pub fn handle_list_teams(ctx: &CommandContext, as_json: bool) -> Result<()> {
    let teams = ctx.db.list_teams()?;

    if as_json {
        return print_json(&teams);
    }

    if teams.is_empty() {
        println!("No teams yet. Add one with `teams add --id <ID> --name <NAME>`.");
        return Ok(());
    }

    for team in &teams {
        match &team.owner {
            Some(owner) => println!("{:>4}  {} ({})", team.team_id, team.name, owner),
            None => println!("{:>4}  {}", team.team_id, team.name),
        }
    }
    Ok(())
}
