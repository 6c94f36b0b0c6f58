//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use swc_ffl_api::{
    cli::{Commands, SwcCli},
    commands::{counts::handle_counts, init_db::handle_init_db, serve::handle_serve},
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swc_ffl_api=info,tower_http=info".into()),
        )
        .init();

    let app = SwcCli::parse();

    match app.command {
        Commands::Serve { database, bind } => handle_serve(database.db_path, bind).await?,

        Commands::InitDb { database } => {
            handle_init_db(database.db_path)?;
        }

        Commands::Counts { database, json } => {
            handle_counts(database.db_path, json).await?;
        }
    }

    Ok(())
}
