//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Database location shared between commands
#[derive(Debug, Args)]
pub struct DatabaseArgs {
    /// Path to the SQLite database (or set `SWC_FFL_DB_PATH` env var).
    #[clap(long = "db")]
    pub db_path: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the read-only fantasy football HTTP API.
    Serve {
        #[clap(flatten)]
        database: DatabaseArgs,

        /// Address to listen on (or set `SWC_FFL_BIND_ADDR` env var).
        #[clap(long)]
        bind: Option<SocketAddr>,
    },

    /// Create an empty database with the player, performance, league, team
    /// and team_player tables, ready for a data load.
    InitDb {
        #[clap(flatten)]
        database: DatabaseArgs,
    },

    /// Print the number of leagues, teams and players in the database.
    Counts {
        #[clap(flatten)]
        database: DatabaseArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "swc-ffl",
    about = "SportsWorldCentral (SWC) fantasy football reference data API"
)]
pub struct SwcCli {
    #[clap(subcommand)]
    pub command: Commands,
}
