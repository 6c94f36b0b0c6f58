//! Read queries over the fantasy database
//!
//! Every list query orders by primary key before applying LIMIT/OFFSET, so a
//! given filter and page always return the same slice of an unchanged table.

use super::filters::{LeagueFilter, Page, PerformanceFilter, PlayerFilter, TeamFilter, WhereClause};
use super::{models::*, schema::Session};
use crate::{LeagueId, PerformanceId, PlayerId, TeamId};
use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension, Row, ToSql};

const PLAYER_COLUMNS: &str =
    "SELECT player_id, gsis_id, first_name, last_name, position, last_changed_date FROM player";

const PERFORMANCE_COLUMNS: &str = "SELECT performance_id, week_number, fantasy_points, \
     last_changed_date, player_id FROM performance";

const LEAGUE_COLUMNS: &str =
    "SELECT league_id, league_name, scoring_type, last_changed_date FROM league";

const TEAM_COLUMNS: &str = "SELECT team_id, team_name, last_changed_date, league_id FROM team";

impl Session {
    /// Look up one player by id
    pub fn get_player(&self, player_id: PlayerId) -> Result<Option<Player>> {
        let Some(id) = sql_id(player_id.as_u64()) else {
            return Ok(None);
        };
        self.conn
            .query_row(
                &format!("{} WHERE player_id = ?", PLAYER_COLUMNS),
                params![id],
                row_to_player,
            )
            .optional()
            .with_context(|| format!("loading player {}", player_id))
    }

    /// List players matching every provided filter
    pub fn get_players(&self, filter: &PlayerFilter) -> Result<Vec<Player>> {
        let (query, params) = WhereClause::new()
            .eq("first_name", filter.first_name.clone())
            .eq("last_name", filter.last_name.clone())
            .on_or_after("last_changed_date", filter.min_last_changed_date)
            .paginate(PLAYER_COLUMNS, "player_id", filter.page);

        self.collect(&query, &params, row_to_player)
            .context("listing players")
    }

    /// List performances, optionally restricted to recently changed rows
    pub fn get_performances(&self, filter: &PerformanceFilter) -> Result<Vec<Performance>> {
        let (query, params) = WhereClause::new()
            .on_or_after("last_changed_date", filter.min_last_changed_date)
            .paginate(PERFORMANCE_COLUMNS, "performance_id", filter.page);

        self.collect(&query, &params, row_to_performance)
            .context("listing performances")
    }

    /// Look up one league by id
    pub fn get_league(&self, league_id: LeagueId) -> Result<Option<League>> {
        let Some(id) = sql_id(league_id.as_u64()) else {
            return Ok(None);
        };
        self.conn
            .query_row(
                &format!("{} WHERE league_id = ?", LEAGUE_COLUMNS),
                params![id],
                row_to_league,
            )
            .optional()
            .with_context(|| format!("loading league {}", league_id))
    }

    /// List leagues matching every provided filter
    pub fn get_leagues(&self, filter: &LeagueFilter) -> Result<Vec<League>> {
        let (query, params) = WhereClause::new()
            .eq("league_name", filter.league_name.clone())
            .on_or_after("last_changed_date", filter.min_last_changed_date)
            .paginate(LEAGUE_COLUMNS, "league_id", filter.page);

        self.collect(&query, &params, row_to_league)
            .context("listing leagues")
    }

    /// List teams matching every provided filter
    pub fn get_teams(&self, filter: &TeamFilter) -> Result<Vec<Team>> {
        let league_id = match filter.league_id {
            Some(league_id) => match sql_id(league_id.as_u64()) {
                Some(id) => Some(id),
                None => return Ok(Vec::new()),
            },
            None => None,
        };

        let (query, params) = WhereClause::new()
            .eq("team_name", filter.team_name.clone())
            .eq("league_id", league_id)
            .on_or_after("last_changed_date", filter.min_last_changed_date)
            .paginate(TEAM_COLUMNS, "team_id", filter.page);

        self.collect(&query, &params, row_to_team)
            .context("listing teams")
    }

    /// Players on a team's roster, resolved through `team_player`
    pub fn get_team_players(&self, team_id: TeamId, page: Page) -> Result<Vec<Player>> {
        let Some(id) = sql_id(team_id.as_u64()) else {
            return Ok(Vec::new());
        };
        let query = "SELECT p.player_id, p.gsis_id, p.first_name, p.last_name, p.position,
                            p.last_changed_date
                     FROM player p
                     JOIN team_player tp ON tp.player_id = p.player_id
                     WHERE tp.team_id = ?
                     ORDER BY p.player_id
                     LIMIT ? OFFSET ?";
        let params: Vec<Box<dyn ToSql>> = vec![
            Box::new(id),
            Box::new(i64::from(page.limit)),
            Box::new(i64::from(page.skip)),
        ];

        self.collect(query, &params, row_to_player)
            .with_context(|| format!("listing roster of team {}", team_id))
    }

    /// Teams that have a player on their roster, resolved through `team_player`
    pub fn get_player_teams(&self, player_id: PlayerId, page: Page) -> Result<Vec<Team>> {
        let Some(id) = sql_id(player_id.as_u64()) else {
            return Ok(Vec::new());
        };
        let query = "SELECT t.team_id, t.team_name, t.last_changed_date, t.league_id
                     FROM team t
                     JOIN team_player tp ON tp.team_id = t.team_id
                     WHERE tp.player_id = ?
                     ORDER BY t.team_id
                     LIMIT ? OFFSET ?";
        let params: Vec<Box<dyn ToSql>> = vec![
            Box::new(id),
            Box::new(i64::from(page.limit)),
            Box::new(i64::from(page.skip)),
        ];

        self.collect(query, &params, row_to_team)
            .with_context(|| format!("listing teams of player {}", player_id))
    }

    /// Weekly performances belonging to one player
    pub fn get_player_performances(
        &self,
        player_id: PlayerId,
        page: Page,
    ) -> Result<Vec<Performance>> {
        let Some(id) = sql_id(player_id.as_u64()) else {
            return Ok(Vec::new());
        };
        let (query, params) = WhereClause::new()
            .eq("player_id", Some(id))
            .paginate(PERFORMANCE_COLUMNS, "performance_id", page);

        self.collect(&query, &params, row_to_performance)
            .with_context(|| format!("listing performances of player {}", player_id))
    }

    pub fn get_player_count(&self) -> Result<u64> {
        self.count_rows("player")
    }

    pub fn get_team_count(&self) -> Result<u64> {
        self.count_rows("team")
    }

    pub fn get_league_count(&self) -> Result<u64> {
        self.count_rows("league")
    }

    fn count_rows(&self, table: &'static str) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })
            .with_context(|| format!("counting {} rows", table))?;
        Ok(count as u64)
    }

    fn collect<T>(
        &self,
        query: &str,
        params: &[Box<dyn ToSql>],
        map_row: fn(&Row<'_>) -> rusqlite::Result<T>,
    ) -> Result<Vec<T>> {
        let mut stmt = self.conn.prepare(query)?;
        let rows = stmt.query_map(
            rusqlite::params_from_iter(params.iter().map(|p| p.as_ref())),
            map_row,
        )?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }
}

/// SQLite integers are signed 64-bit; ids beyond that range match no row.
fn sql_id(id: u64) -> Option<i64> {
    i64::try_from(id).ok()
}

fn row_to_player(row: &Row<'_>) -> rusqlite::Result<Player> {
    Ok(Player {
        player_id: PlayerId::new(row.get(0)?),
        gsis_id: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        position: row.get(4)?,
        last_changed_date: row.get(5)?,
    })
}

fn row_to_performance(row: &Row<'_>) -> rusqlite::Result<Performance> {
    Ok(Performance {
        performance_id: PerformanceId::new(row.get(0)?),
        week_number: row.get(1)?,
        fantasy_points: row.get(2)?,
        last_changed_date: row.get(3)?,
        player_id: PlayerId::new(row.get(4)?),
    })
}

fn row_to_league(row: &Row<'_>) -> rusqlite::Result<League> {
    Ok(League {
        league_id: LeagueId::new(row.get(0)?),
        league_name: row.get(1)?,
        scoring_type: row.get(2)?,
        last_changed_date: row.get(3)?,
    })
}

fn row_to_team(row: &Row<'_>) -> rusqlite::Result<Team> {
    Ok(Team {
        team_id: TeamId::new(row.get(0)?),
        team_name: row.get(1)?,
        last_changed_date: row.get(2)?,
        league_id: LeagueId::new(row.get(3)?),
    })
}
