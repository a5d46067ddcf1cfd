//! HTTP server command

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use webgame_server::{run_server, GameStore, MemoryGameStore, MySqlGameStore};

use super::{load_config, require_database_url};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Path to a TOML config file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Serve from an empty in-process store instead of MySQL
    #[arg(long)]
    pub in_memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = load_config(args.config.as_deref(), args.database_url)?;

    let mut server_config = config.server_config();
    if let Some(bind) = args.bind {
        server_config.bind_addr = bind;
    }
    server_config.cors_permissive |= args.cors_permissive;

    let store: Arc<dyn GameStore> = if args.in_memory {
        tracing::warn!("Serving from an in-memory store; nothing is persisted");
        Arc::new(MemoryGameStore::new())
    } else {
        let url = require_database_url(&config)?;
        Arc::new(MySqlGameStore::from_url(url).context("Invalid database URL")?)
    };

    tracing::info!("Starting webgame server on {}", server_config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(store, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
