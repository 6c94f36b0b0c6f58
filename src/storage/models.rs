//! Data models for the storage layer

use crate::cli::types::{LeagueId, PerformanceId, PlayerId, TeamId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An NFL player as stored in the `player` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub gsis_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub last_changed_date: NaiveDate,
}

/// One player's fantasy result for one week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    pub performance_id: PerformanceId,
    pub week_number: String,
    pub fantasy_points: f64,
    pub last_changed_date: NaiveDate,
    pub player_id: PlayerId,
}

/// A fantasy league
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub league_id: LeagueId,
    pub league_name: String,
    pub scoring_type: String,
    pub last_changed_date: NaiveDate,
}

/// A fantasy team within a league
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: TeamId,
    pub team_name: String,
    pub last_changed_date: NaiveDate,
    pub league_id: LeagueId,
}
