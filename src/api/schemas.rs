//! Response bodies returned across the API boundary.
//!
//! Each schema is a projection of a storage model. Roster membership rows
//! from `team_player` have no schema here and are never returned directly.

use crate::storage::{models, Session};
use crate::{LeagueId, PerformanceId, PlayerId, TeamId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const HEALTH_CHECK_MESSAGE: &str = "This is an API health check (status:successful)";

/// Body of `GET /`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthCheck {
    pub message: String,
}

impl Default for HealthCheck {
    fn default() -> Self {
        Self {
            message: HEALTH_CHECK_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub gsis_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub last_changed_date: NaiveDate,
}

impl From<models::Player> for Player {
    fn from(player: models::Player) -> Self {
        Self {
            player_id: player.player_id,
            gsis_id: player.gsis_id,
            first_name: player.first_name,
            last_name: player.last_name,
            position: player.position,
            last_changed_date: player.last_changed_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    pub performance_id: PerformanceId,
    pub week_number: String,
    pub fantasy_points: f64,
    pub last_changed_date: NaiveDate,
    pub player_id: PlayerId,
}

impl From<models::Performance> for Performance {
    fn from(performance: models::Performance) -> Self {
        Self {
            performance_id: performance.performance_id,
            week_number: performance.week_number,
            fantasy_points: performance.fantasy_points,
            last_changed_date: performance.last_changed_date,
            player_id: performance.player_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub league_id: LeagueId,
    pub league_name: String,
    pub scoring_type: String,
    pub last_changed_date: NaiveDate,
}

impl From<models::League> for League {
    fn from(league: models::League) -> Self {
        Self {
            league_id: league.league_id,
            league_name: league.league_name,
            scoring_type: league.scoring_type,
            last_changed_date: league.last_changed_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: TeamId,
    pub team_name: String,
    pub last_changed_date: NaiveDate,
    pub league_id: LeagueId,
}

impl From<models::Team> for Team {
    fn from(team: models::Team) -> Self {
        Self {
            team_id: team.team_id,
            team_name: team.team_name,
            last_changed_date: team.last_changed_date,
            league_id: team.league_id,
        }
    }
}

/// Row counts of the league, team and player tables, taken together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub league_count: u64,
    pub team_count: u64,
    pub player_count: u64,
}

impl Counts {
    /// Take all three counts within one session
    pub fn load(session: &Session) -> anyhow::Result<Self> {
        Ok(Self {
            league_count: session.get_league_count()?,
            team_count: session.get_team_count()?,
            player_count: session.get_player_count()?,
        })
    }
}
