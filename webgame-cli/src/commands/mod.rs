//! CLI command implementations

use std::path::Path;

use anyhow::{Context, Result};
use webgame_server::AppConfig;

pub mod games;
pub mod serve;

/// Load config from file and environment, then apply a `--database-url` flag.
pub fn load_config(config_path: Option<&Path>, database_url: Option<String>) -> Result<AppConfig> {
    let config = AppConfig::load(config_path).context("Failed to load configuration")?;
    Ok(config.with_overrides(database_url, None)?)
}

/// The configured database URL, or an actionable error.
pub fn require_database_url(config: &AppConfig) -> Result<&str> {
    config.database.url.as_deref().context(
        "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, .env, or ~/.webgame/config.toml",
    )
}
