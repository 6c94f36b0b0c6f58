//! HTTP server command

use crate::{api, api::schemas::Counts, config::resolve_bind_addr, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;

use super::open_existing_database;

/// Serve the API until Ctrl-C
pub async fn handle_serve(db_path: Option<PathBuf>, bind: Option<SocketAddr>) -> Result<()> {
    let db = open_existing_database(db_path)?;
    let addr = resolve_bind_addr(bind)?;

    // Fail fast on a file that is not a usable fantasy database
    let counts = db.with_session(Counts::load).await?;
    tracing::info!(
        path = %db.path().display(),
        leagues = counts.league_count,
        teams = counts.team_count,
        players = counts.player_count,
        "opened fantasy database"
    );

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, api::router(db))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
