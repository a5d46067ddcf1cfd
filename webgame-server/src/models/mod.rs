//! Domain models
//!
//! Built per request from a database row or from caller input and
//! discarded once the response is written.

pub mod game;
pub mod user_level;

pub use game::Game;
pub use user_level::UserLevel;
