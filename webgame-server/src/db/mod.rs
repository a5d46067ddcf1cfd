//! Data access layer - stored procedure calls and row mapping
//!
//! # Design Principles
//!
//! - One connection per operation, closed when the operation returns
//! - All SQL lives in the database; this layer only binds and maps
//! - Errors are never swallowed or translated

pub mod connection;
pub mod memory;
pub mod mysql;
pub mod store;

pub use connection::{connect_options, open_connection};
pub use memory::MemoryGameStore;
pub use mysql::MySqlGameStore;
pub use store::{DbError, GameStore};
