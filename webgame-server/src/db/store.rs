//! The data access contract shared by every backing store

use async_trait::async_trait;

use crate::models::{Game, UserLevel};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A required argument was missing; raised before any I/O.
    #[error("{what} can not be null")]
    NullArgument { what: &'static str },
}

/// Game data access operations.
///
/// Implementations must check arguments before touching the database and
/// must hand back store errors unchanged.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Every game, in store order. Empty when there are none.
    async fn games(&self) -> Result<Vec<Game>, DbError>;

    /// The first game matching `id`, if any.
    async fn game_by_id(&self, id: i32) -> Result<Option<Game>, DbError>;

    /// Look up a user level by its key. An absent or empty key is a
    /// [`DbError::NullArgument`].
    async fn user_level_by_key(&self, key: Option<&str>) -> Result<Option<UserLevel>, DbError>;

    /// Insert `game`, returning a copy of the input on success or `None`
    /// when no row was affected. The returned `id` is the caller's, not the
    /// generated one.
    async fn insert_game(&self, game: Option<&Game>) -> Result<Option<Game>, DbError>;

    /// Overwrite the mutable fields of game `id`. Returns rows affected.
    async fn update_game(&self, id: i32, game: Option<&Game>) -> Result<u64, DbError>;

    /// Delete game `id`. Returns rows affected.
    async fn delete_game(&self, id: i32) -> Result<u64, DbError>;
}

pub(crate) fn require_game(game: Option<&Game>) -> Result<&Game, DbError> {
    game.ok_or(DbError::NullArgument { what: "game" })
}

pub(crate) fn require_key(key: Option<&str>) -> Result<&str, DbError> {
    match key {
        Some(k) if !k.is_empty() => Ok(k),
        _ => Err(DbError::NullArgument { what: "user key" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_is_null() {
        assert!(matches!(
            require_key(Some("")),
            Err(DbError::NullArgument { what: "user key" })
        ));
        assert!(require_key(None).is_err());
        assert_eq!(require_key(Some("abc")).unwrap(), "abc");
    }

    #[test]
    fn null_argument_message() {
        let err = require_game(None).unwrap_err();
        assert_eq!(err.to_string(), "game can not be null");
    }
}
