//! HTTP API over the fantasy database
//!
//! - `handlers`: one async handler per endpoint
//! - `params`: query string parameters
//! - `schemas`: response bodies
//! - `error`: mapping of failures onto HTTP statuses

pub mod error;
pub mod handlers;
pub mod params;
pub mod schemas;


use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::storage::FantasyDatabase;

pub use error::{ApiError, ApiResult};

/// State shared by all handlers.
///
/// Holds only the database handle; each request opens its own session.
#[derive(Debug, Clone)]
pub struct ApiState {
    pub db: FantasyDatabase,
}

/// Build the complete application router.
pub fn router(db: FantasyDatabase) -> Router {
    let state = ApiState { db };

    Router::new()
        // Analytics
        .route("/", get(handlers::health_check))
        .route("/v0/counts/", get(handlers::get_counts))
        // Player
        .route("/v0/players", get(handlers::list_players))
        .route("/v0/players/{player_id}", get(handlers::get_player))
        // Scoring
        .route("/v0/performances/", get(handlers::list_performances))
        // Membership
        .route("/v0/leagues/", get(handlers::list_leagues))
        .route("/v0/leagues/{league_id}/", get(handlers::get_league))
        .route("/v0/teams/", get(handlers::list_teams))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
