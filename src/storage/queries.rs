//! Basic database query operations

use super::{models::*, schema::LeagueDatabase};
use crate::cli::types::{
    ids::{PeriodId, TeamId},
    time::Season,
};
use crate::scoring::{stat_line::coerce_stat, PeriodStatLines, TeamStatLine};
use anyhow::{anyhow, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::time::{SystemTime, UNIX_EPOCH};

impl LeagueDatabase {
    /// Insert or update a team's basic information
    pub fn upsert_team(&mut self, team: &Team) -> Result<()> {
        self.conn.execute(
            "INSERT INTO teams (team_id, name, owner) VALUES (?, ?, ?)
             ON CONFLICT(team_id) DO UPDATE SET name = excluded.name, owner = excluded.owner",
            params![team.team_id.as_u32(), team.name, team.owner],
        )?;
        Ok(())
    }

    /// Get a single team by ID
    pub fn get_team(&self, team_id: TeamId) -> Result<Option<Team>> {
        let team = self
            .conn
            .query_row(
                "SELECT team_id, name, owner FROM teams WHERE team_id = ?",
                params![team_id.as_u32()],
                row_to_team,
            )
            .optional()?;
        Ok(team)
    }

    /// All teams ordered by ID
    pub fn list_teams(&self) -> Result<Vec<Team>> {
        let mut stmt = self
            .conn
            .prepare("SELECT team_id, name, owner FROM teams ORDER BY team_id")?;
        let rows = stmt.query_map([], row_to_team)?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    /// Insert or update a scoring period
    pub fn upsert_period(&mut self, period: &Period) -> Result<()> {
        upsert_period_row(&self.conn, period)
    }

    /// Get a single period of a season
    pub fn get_period(&self, season: Season, period_id: PeriodId) -> Result<Option<Period>> {
        let period = self
            .conn
            .query_row(
                "SELECT period_id, season, label FROM periods
                 WHERE season = ? AND period_id = ?",
                params![season.as_u16(), period_id.as_u32()],
                row_to_period,
            )
            .optional()?;
        Ok(period)
    }

    /// All periods of a season in period order
    pub fn list_periods(&self, season: Season) -> Result<Vec<Period>> {
        let mut stmt = self.conn.prepare(
            "SELECT period_id, season, label FROM periods
             WHERE season = ?
             ORDER BY period_id",
        )?;
        let rows = stmt.query_map(params![season.as_u16()], row_to_period)?;

        let mut periods = Vec::new();
        for row in rows {
            periods.push(row?);
        }
        Ok(periods)
    }

    /// Store every category value of a stat line for one period.
    ///
    /// Values are coerced to numbers on the way in. Returns how many
    /// category values were written.
    pub fn store_stat_line(
        &mut self,
        season: Season,
        period_id: PeriodId,
        line: &TeamStatLine,
    ) -> Result<usize> {
        let now = unix_now()?;
        let tx = self.conn.transaction()?;
        let written = insert_stat_line(&tx, season, period_id, line, now)?;
        tx.commit()?;
        Ok(written)
    }

    /// Write a whole period in one transaction.
    ///
    /// Upserts the period, clears its stored stats when `replace` is set and
    /// stores every line. Nothing is written if any step fails. Returns the
    /// number of cleared rows.
    pub fn store_period_stat_lines(
        &mut self,
        period: &Period,
        lines: &[TeamStatLine],
        replace: bool,
    ) -> Result<usize> {
        let now = unix_now()?;
        let tx = self.conn.transaction()?;

        upsert_period_row(&tx, period)?;
        let removed = if replace {
            delete_period_stats(&tx, period.season, period.period_id)?
        } else {
            0
        };
        for line in lines {
            insert_stat_line(&tx, period.season, period.period_id, line, now)?;
        }

        tx.commit()?;
        Ok(removed)
    }

    /// Stat lines for one period, ordered by team ID
    pub fn get_period_stat_lines(
        &self,
        season: Season,
        period_id: PeriodId,
    ) -> Result<Vec<TeamStatLine>> {
        let mut stmt = self.conn.prepare(
            "SELECT s.team_id, t.name, s.category, s.value
             FROM team_period_stats s
             JOIN teams t ON t.team_id = s.team_id
             WHERE s.season = ? AND s.period_id = ?
             ORDER BY s.team_id, s.category",
        )?;

        let rows = stmt.query_map(params![season.as_u16(), period_id.as_u32()], |row| {
            Ok((
                TeamId::new(row.get(0)?),
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, f64>(3)?,
            ))
        })?;

        let mut lines: Vec<TeamStatLine> = Vec::new();
        for row in rows {
            let (team_id, team_name, category, value) = row?;
            match lines.last_mut() {
                Some(line) if line.team_id == Some(team_id) => line.set_stat(&category, value),
                _ => lines.push(TeamStatLine::new(team_id, &team_name).with_stat(&category, value)),
            }
        }
        Ok(lines)
    }

    /// Stat lines for every period of a season, in period order
    pub fn get_season_stat_lines(&self, season: Season) -> Result<Vec<PeriodStatLines>> {
        let mut periods = Vec::new();
        for period in self.list_periods(season)? {
            let lines = self.get_period_stat_lines(season, period.period_id)?;
            periods.push(PeriodStatLines::new(period.period_id, lines));
        }
        Ok(periods)
    }

    /// Delete all stored stats for a period, returning the number of rows removed
    pub fn clear_period_stats(&mut self, season: Season, period_id: PeriodId) -> Result<usize> {
        delete_period_stats(&self.conn, season, period_id)
    }
}

fn unix_now() -> Result<i64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64)
}

fn upsert_period_row(conn: &Connection, period: &Period) -> Result<()> {
    conn.execute(
        "INSERT INTO periods (season, period_id, label) VALUES (?, ?, ?)
         ON CONFLICT(season, period_id) DO UPDATE SET
            label = COALESCE(excluded.label, periods.label)",
        params![period.season.as_u16(), period.period_id.as_u32(), period.label],
    )?;
    Ok(())
}

fn insert_stat_line(
    conn: &Connection,
    season: Season,
    period_id: PeriodId,
    line: &TeamStatLine,
    now: i64,
) -> Result<usize> {
    let team_id = line
        .team_id
        .ok_or_else(|| anyhow!("stat line for '{}' has no team id", line.team_name))?;

    let mut stmt = conn.prepare(
        "INSERT OR REPLACE INTO team_period_stats
         (team_id, season, period_id, category, value, updated_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )?;
    for (category, raw) in &line.stats {
        stmt.execute(params![
            team_id.as_u32(),
            season.as_u16(),
            period_id.as_u32(),
            category,
            coerce_stat(raw),
            now
        ])?;
    }
    Ok(line.stats.len())
}

fn delete_period_stats(conn: &Connection, season: Season, period_id: PeriodId) -> Result<usize> {
    let removed = conn.execute(
        "DELETE FROM team_period_stats WHERE season = ? AND period_id = ?",
        params![season.as_u16(), period_id.as_u32()],
    )?;
    Ok(removed)
}

fn row_to_team(row: &Row) -> rusqlite::Result<Team> {
    Ok(Team {
        team_id: TeamId::new(row.get(0)?),
        name: row.get(1)?,
        owner: row.get(2)?,
    })
}

fn row_to_period(row: &Row) -> rusqlite::Result<Period> {
    Ok(Period {
        period_id: PeriodId::new(row.get(0)?),
        season: Season::new(row.get(1)?),
        label: row.get(2)?,
    })
}
