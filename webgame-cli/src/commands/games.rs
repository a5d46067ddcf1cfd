//! Direct access to the game stored procedures
//!
//! Each subcommand maps to one data-access operation and prints its result
//! as JSON, or the affected-row count for writes.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;

use webgame_server::{Game, GameStore, MySqlGameStore};

use super::{load_config, require_database_url};

#[derive(Parser, Debug)]
pub struct GamesArgs {
    /// Database URL (overrides config/environment)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Path to a TOML config file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: GamesCommands,
}

#[derive(Subcommand, Debug)]
pub enum GamesCommands {
    /// List every game
    List,
    /// Show one game
    Get {
        /// Game id
        id: i32,
    },
    /// Look up a user level by key
    UserLevel {
        /// User key
        key: String,
    },
    /// Insert a game
    Insert {
        /// Id passed to the insert procedure
        #[arg(long, default_value_t = 0)]
        id: i32,
        #[command(flatten)]
        fields: GameFields,
    },
    /// Update a game's title, description, rating and price
    Update {
        /// Game id
        id: i32,
        #[command(flatten)]
        fields: GameFields,
    },
    /// Delete a game
    Delete {
        /// Game id
        id: i32,
    },
}

#[derive(Args, Debug)]
pub struct GameFields {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub rating: i32,
    #[arg(long)]
    pub price: f64,
}

impl GameFields {
    fn into_game(self, id: i32) -> Game {
        Game::new(id, self.title, self.description, self.rating, self.price)
    }
}

pub async fn run_games(args: GamesArgs) -> Result<()> {
    let config = load_config(args.config.as_deref(), args.database_url)?;
    let url = require_database_url(&config)?;
    let store = MySqlGameStore::from_url(url).context("Invalid database URL")?;

    execute(&store, args.command).await
}

async fn execute(store: &dyn GameStore, command: GamesCommands) -> Result<()> {
    match command {
        GamesCommands::List => {
            let games = store.games().await?;
            println!("{}", serde_json::to_string_pretty(&games)?);
        }
        GamesCommands::Get { id } => match store.game_by_id(id).await? {
            Some(game) => println!("{}", serde_json::to_string_pretty(&game)?),
            None => bail!("Game {} not found.", id),
        },
        GamesCommands::UserLevel { key } => {
            match store.user_level_by_key(Some(key.as_str())).await? {
                Some(level) => println!("{}", serde_json::to_string_pretty(&level)?),
                None => bail!("No user level for key '{}'", key),
            }
        }
        GamesCommands::Insert { id, fields } => {
            let game = fields.into_game(id);
            match store.insert_game(Some(&game)).await? {
                Some(inserted) => println!("{}", serde_json::to_string_pretty(&inserted)?),
                None => bail!("Insert affected no rows"),
            }
        }
        GamesCommands::Update { id, fields } => {
            let game = fields.into_game(id);
            let affected = store.update_game(id, Some(&game)).await?;
            println!("{}", json!({ "affected": affected }));
        }
        GamesCommands::Delete { id } => {
            let affected = store.delete_game(id).await?;
            println!("{}", json!({ "affected": affected }));
        }
    }

    Ok(())
}
