//! SportsWorldCentral (SWC) Fantasy Football API Library
//!
//! A read-only HTTP API over SWC fantasy football reference data: NFL players,
//! their weekly fantasy performances, and the leagues and teams they are
//! rostered in.
//!
//! ## Features
//!
//! - **Query Layer**: Filterable, paginated reads over players, performances,
//!   leagues and teams, plus table counts
//! - **Incremental Sync**: Every list accepts a minimum last-changed date so
//!   callers can fetch only rows changed since their last pull
//! - **HTTP API**: axum router exposing the query layer under `/v0`
//! - **Scoped Sessions**: Each request opens its own read-only SQLite connection
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use swc_ffl_api::storage::{FantasyDatabase, PlayerFilter};
//!
//! # async fn example() -> swc_ffl_api::Result<()> {
//! let db = FantasyDatabase::new("fantasy_data.db");
//! let filter = PlayerFilter {
//!     first_name: Some("Bryce".to_string()),
//!     last_name: Some("Young".to_string()),
//!     ..Default::default()
//! };
//!
//! let players = db.with_session(move |s| s.get_players(&filter)).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at your database and listen address without flags:
//! ```bash
//! export SWC_FFL_DB_PATH=./fantasy_data.db
//! export SWC_FFL_BIND_ADDR=0.0.0.0:8000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{LeagueId, PerformanceId, PlayerId, TeamId};
pub use error::{Result, SwcError};
