//! Type-safe wrappers for SWC fantasy football identifiers.

pub mod ids;

pub use ids::{LeagueId, PerformanceId, PlayerId, TeamId};
