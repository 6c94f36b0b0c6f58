//! Request handlers for the `/v0` endpoints.
//!
//! Each handler parses its parameters, runs exactly one query-layer call in a
//! fresh session and projects the result into a response schema. Extractor
//! rejections are taken as `Result` so they come back as JSON 422 bodies.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use super::error::{ApiError, ApiResult};
use super::params::{LeagueParams, PerformanceParams, PlayerParams, TeamParams};
use super::schemas::{Counts, HealthCheck, League, Performance, Player, Team};
use super::ApiState;
use crate::storage::{LeagueFilter, PerformanceFilter, PlayerFilter, TeamFilter};
use crate::{LeagueId, PlayerId};

/// `GET /`
pub async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck::default())
}

/// `GET /v0/players`
pub async fn list_players(
    State(state): State<ApiState>,
    params: Result<Query<PlayerParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Player>>> {
    let Query(params) = params?;
    let filter = PlayerFilter::from(params);
    tracing::debug!(?filter, "listing players");

    let players = state
        .db
        .with_session(move |session| session.get_players(&filter))
        .await?;
    Ok(Json(players.into_iter().map(Player::from).collect()))
}

/// `GET /v0/players/{player_id}`
pub async fn get_player(
    State(state): State<ApiState>,
    player_id: Result<Path<PlayerId>, PathRejection>,
) -> ApiResult<Json<Player>> {
    let Path(player_id) = player_id?;

    let player = state
        .db
        .with_session(move |session| session.get_player(player_id))
        .await?
        .ok_or(ApiError::NotFound { resource: "player" })?;
    Ok(Json(player.into()))
}

/// `GET /v0/performances/`
pub async fn list_performances(
    State(state): State<ApiState>,
    params: Result<Query<PerformanceParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Performance>>> {
    let Query(params) = params?;
    let filter = PerformanceFilter::from(params);
    tracing::debug!(?filter, "listing performances");

    let performances = state
        .db
        .with_session(move |session| session.get_performances(&filter))
        .await?;
    Ok(Json(performances.into_iter().map(Performance::from).collect()))
}

/// `GET /v0/leagues/{league_id}/`
pub async fn get_league(
    State(state): State<ApiState>,
    league_id: Result<Path<LeagueId>, PathRejection>,
) -> ApiResult<Json<League>> {
    let Path(league_id) = league_id?;

    let league = state
        .db
        .with_session(move |session| session.get_league(league_id))
        .await?
        .ok_or(ApiError::NotFound { resource: "league" })?;
    Ok(Json(league.into()))
}

/// `GET /v0/leagues/`
pub async fn list_leagues(
    State(state): State<ApiState>,
    params: Result<Query<LeagueParams>, QueryRejection>,
) -> ApiResult<Json<Vec<League>>> {
    let Query(params) = params?;
    let filter = LeagueFilter::from(params);
    tracing::debug!(?filter, "listing leagues");

    let leagues = state
        .db
        .with_session(move |session| session.get_leagues(&filter))
        .await?;
    Ok(Json(leagues.into_iter().map(League::from).collect()))
}

/// `GET /v0/teams/`
pub async fn list_teams(
    State(state): State<ApiState>,
    params: Result<Query<TeamParams>, QueryRejection>,
) -> ApiResult<Json<Vec<Team>>> {
    let Query(params) = params?;
    let filter = TeamFilter::from(params);
    tracing::debug!(?filter, "listing teams");

    let teams = state
        .db
        .with_session(move |session| session.get_teams(&filter))
        .await?;
    Ok(Json(teams.into_iter().map(Team::from).collect()))
}

/// `GET /v0/counts/`
pub async fn get_counts(State(state): State<ApiState>) -> ApiResult<Json<Counts>> {
    let counts = state.db.with_session(Counts::load).await?;
    Ok(Json(counts))
}
