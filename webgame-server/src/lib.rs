//! webgame-server: HTTP API over the WebGame catalogue
//!
//! Reads go straight through to MySQL stored procedures; the write
//! endpoints are accepted but do not persist anything.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::AppConfig;
pub use db::{DbError, GameStore, MemoryGameStore, MySqlGameStore};
pub use http::{build_router, run_server, ServerConfig};
pub use models::{Game, UserLevel};
