//! webgame CLI - WebGame catalogue server and data tools
//!
//! - `serve`: run the HTTP API
//! - `games`: call the stored procedures directly

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::games::{run_games, GamesArgs};
use commands::serve::{run_serve, ServeArgs};
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "webgame",
    author,
    version,
    about = "HTTP API and data tools for the WebGame catalogue"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Query and modify games through the stored procedures
    Games(GamesArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => run_serve(args).await?,
        Commands::Games(args) => run_games(args).await?,
    }

    Ok(())
}
