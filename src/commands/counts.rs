//! Counts command implementation

use crate::{api::schemas::Counts, Result};
use std::path::PathBuf;

use super::open_existing_database;

/// Print the league, team and player counts
pub async fn handle_counts(db_path: Option<PathBuf>, as_json: bool) -> Result<Counts> {
    let db = open_existing_database(db_path)?;
    let counts = db.with_session(Counts::load).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
    } else {
        println!("Leagues: {}", counts.league_count);
        println!("Teams:   {}", counts.team_count);
        println!("Players: {}", counts.player_count);
    }

    Ok(counts)
}
