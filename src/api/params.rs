//! Query string parameters for the list endpoints.
//!
//! Field names match the public query parameters; conversion into the storage
//! filter structs applies the pagination defaults.

use crate::storage::{LeagueFilter, Page, PerformanceFilter, PlayerFilter, TeamFilter};
use crate::LeagueId;
use chrono::NaiveDate;
use serde::Deserialize;

/// `GET /v0/players`
#[derive(Debug, Default, Deserialize)]
pub struct PlayerParams {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub minimum_last_changed_date: Option<NaiveDate>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<PlayerParams> for PlayerFilter {
    fn from(params: PlayerParams) -> Self {
        Self {
            first_name: params.first_name,
            last_name: params.last_name,
            min_last_changed_date: params.minimum_last_changed_date,
            page: Page::from_options(params.skip, params.limit),
        }
    }
}

/// `GET /v0/performances/`
#[derive(Debug, Default, Deserialize)]
pub struct PerformanceParams {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub minimum_last_changed_date: Option<NaiveDate>,
}

impl From<PerformanceParams> for PerformanceFilter {
    fn from(params: PerformanceParams) -> Self {
        Self {
            min_last_changed_date: params.minimum_last_changed_date,
            page: Page::from_options(params.skip, params.limit),
        }
    }
}

/// `GET /v0/leagues/`
///
/// Older clients spell the date parameter `minimum_last_changed_data`; it is
/// accepted as an alias with the same inclusive semantics.
#[derive(Debug, Default, Deserialize)]
pub struct LeagueParams {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    #[serde(alias = "minimum_last_changed_data")]
    pub minimum_last_changed_date: Option<NaiveDate>,
    pub league_name: Option<String>,
}

impl From<LeagueParams> for LeagueFilter {
    fn from(params: LeagueParams) -> Self {
        Self {
            league_name: params.league_name,
            min_last_changed_date: params.minimum_last_changed_date,
            page: Page::from_options(params.skip, params.limit),
        }
    }
}

/// `GET /v0/teams/`
#[derive(Debug, Default, Deserialize)]
pub struct TeamParams {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub minimum_last_changed_date: Option<NaiveDate>,
    pub team_name: Option<String>,
    pub league_id: Option<LeagueId>,
}

impl From<TeamParams> for TeamFilter {
    fn from(params: TeamParams) -> Self {
        Self {
            team_name: params.team_name,
            league_id: params.league_id,
            min_last_changed_date: params.minimum_last_changed_date,
            page: Page::from_options(params.skip, params.limit),
        }
    }
}
