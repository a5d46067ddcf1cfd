//! In-process game store
//!
//! Same contract as [`MySqlGameStore`](super::MySqlGameStore), backed by a
//! `Vec` so the HTTP layer can run without a database.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{require_game, require_key, DbError, GameStore};
use crate::models::{Game, UserLevel};

#[derive(Debug, Default)]
pub struct MemoryGameStore {
    games: RwLock<Vec<Game>>,
    user_levels: RwLock<HashMap<String, UserLevel>>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store. Insertion order is the listing order.
    pub fn with_games(games: impl IntoIterator<Item = Game>) -> Self {
        Self {
            games: RwLock::new(games.into_iter().collect()),
            user_levels: RwLock::default(),
        }
    }

    pub async fn add_user_level(&self, key: impl Into<String>, level: UserLevel) {
        self.user_levels.write().await.insert(key.into(), level);
    }
}

#[async_trait]
impl GameStore for MemoryGameStore {
    async fn games(&self) -> Result<Vec<Game>, DbError> {
        Ok(self.games.read().await.clone())
    }

    async fn game_by_id(&self, id: i32) -> Result<Option<Game>, DbError> {
        Ok(self.games.read().await.iter().find(|g| g.id == id).cloned())
    }

    async fn user_level_by_key(&self, key: Option<&str>) -> Result<Option<UserLevel>, DbError> {
        let key = require_key(key)?;
        Ok(self.user_levels.read().await.get(key).cloned())
    }

    async fn insert_game(&self, game: Option<&Game>) -> Result<Option<Game>, DbError> {
        let game = require_game(game)?;
        let mut games = self.games.write().await;

        // No id left to hand out: nothing is inserted.
        let max_id = games.iter().map(|g| g.id).max().unwrap_or(0);
        let Some(generated) = max_id.checked_add(1) else {
            return Ok(None);
        };
        games.push(Game {
            id: generated,
            ..game.clone()
        });

        Ok(Some(game.clone()))
    }

    async fn update_game(&self, id: i32, game: Option<&Game>) -> Result<u64, DbError> {
        let game = require_game(game)?;
        let mut games = self.games.write().await;

        let mut affected = 0;
        for existing in games.iter_mut().filter(|g| g.id == id) {
            existing.title = game.title.clone();
            existing.description = game.description.clone();
            existing.rating = game.rating;
            existing.price = game.price;
            affected += 1;
        }
        Ok(affected)
    }

    async fn delete_game(&self, id: i32) -> Result<u64, DbError> {
        let mut games = self.games.write().await;
        let before = games.len();
        games.retain(|g| g.id != id);
        Ok((before - games.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> MemoryGameStore {
        MemoryGameStore::with_games([
            Game::new(1, "Tetris", "Falling blocks", 8, 4.99),
            Game::new(5, "Doom", "Rip and tear", 9, 19.99),
            Game::new(3, "Myst", "Island puzzles", 7, 9.5),
        ])
    }

    #[tokio::test]
    async fn lists_in_store_order() {
        let ids: Vec<i32> = seeded().games().await.unwrap().iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![1, 5, 3]);
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        assert!(MemoryGameStore::new().games().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn game_by_id_returns_matching_id() {
        let store = seeded();
        let game = store.game_by_id(5).await.unwrap().unwrap();
        assert_eq!(game.id, 5);
        assert_eq!(game.title, "Doom");

        assert!(store.game_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_echoes_caller_fields() {
        let store = seeded();
        let input = Game::new(99, "Quake", "Fast", 9, 14.0);

        let echoed = store.insert_game(Some(&input)).await.unwrap().unwrap();
        assert_eq!(echoed, input);

        // The stored row carries the generated id instead.
        let stored = store.game_by_id(6).await.unwrap().unwrap();
        assert_eq!(stored.title, "Quake");
        assert!(store.game_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_after_max_id_affects_nothing() {
        let store = MemoryGameStore::with_games([Game::new(i32::MAX, "Last", "", 1, 1.0)]);
        let input = Game::new(0, "Overflow", "", 1, 1.0);

        assert!(store.insert_game(Some(&input)).await.unwrap().is_none());
        assert_eq!(store.games().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn insert_null_is_rejected() {
        let err = seeded().insert_game(None).await.unwrap_err();
        assert!(matches!(err, DbError::NullArgument { what: "game" }));
    }

    #[tokio::test]
    async fn update_reports_affected_rows() {
        let store = seeded();
        let patch = Game::new(0, "Doom II", "Hell on Earth", 10, 24.99);

        assert_eq!(store.update_game(5, Some(&patch)).await.unwrap(), 1);
        assert_eq!(store.update_game(42, Some(&patch)).await.unwrap(), 0);

        let updated = store.game_by_id(5).await.unwrap().unwrap();
        assert_eq!(updated.id, 5);
        assert_eq!(updated.title, "Doom II");
        assert_eq!(updated.price, 24.99);
    }

    #[tokio::test]
    async fn delete_reports_affected_rows() {
        let store = seeded();

        assert_eq!(store.delete_game(1).await.unwrap(), 1);
        assert_eq!(store.delete_game(1).await.unwrap(), 0);
        assert_eq!(store.games().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn user_level_lookup() {
        let store = seeded();
        store
            .add_user_level("abc-123", UserLevel { title: "admin".into(), id: 2 })
            .await;

        let level = store.user_level_by_key(Some("abc-123")).await.unwrap();
        assert_eq!(level.map(|l| l.id), Some(2));
        assert!(store.user_level_by_key(Some("nope")).await.unwrap().is_none());
        assert!(store.user_level_by_key(Some("")).await.is_err());
    }
}
