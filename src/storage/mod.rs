//! Storage layer for the SWC fantasy football API
//!
//! This module provides a read-only abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database handle, per-request sessions and schema management
//! - `filters`: Filter and pagination inputs for list queries
//! - `queries`: The query layer itself

pub mod filters;
pub mod models;
pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

// Re-export the main types and database handles for easy access
pub use filters::{LeagueFilter, Page, PerformanceFilter, PlayerFilter, TeamFilter, DEFAULT_LIMIT};
pub use models::*;
pub use schema::{FantasyDatabase, Session};
