//! Stored-procedure backed game store
//!
//! Every method opens its own connection, runs one procedure and maps the
//! result positionally. Column order is part of the database contract.

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlRow};
use sqlx::Row;
use tracing::debug;

use super::connection::{connect_options, open_connection};
use super::store::{require_game, require_key, DbError, GameStore};
use crate::models::{Game, UserLevel};

/// Procedure calls, in the order the procedures declare their parameters.
mod procs {
    pub const GET_GAMES: &str = "CALL spGetGames()";
    pub const GET_GAME: &str = "CALL spGetAGame(?)";
    pub const GET_USER_LEVEL: &str = "CALL spGetUserLevel(?)";
    pub const INSERT_GAME: &str = "CALL spInsertWidget(?, ?, ?, ?, ?, @aid)";
    pub const INSERTED_ID: &str = "SELECT @aid";
    pub const UPDATE_GAME: &str = "CALL spUpdateGame(?, ?, ?, ?, ?)";
    pub const DELETE_GAME: &str = "CALL spDeleteGame(?)";
}

/// `spGetAGame` returns two leading columns before the game fields.
const GET_GAME_FIRST_COLUMN: usize = 2;

/// Map five consecutive columns starting at `first` into a [`Game`].
fn game_from_row(row: &MySqlRow, first: usize) -> Result<Game, sqlx::Error> {
    Ok(Game {
        id: row.try_get(first)?,
        title: row.try_get(first + 1)?,
        description: row.try_get(first + 2)?,
        rating: row.try_get(first + 3)?,
        price: row.try_get(first + 4)?,
    })
}

/// Game store that talks to MySQL through stored procedures.
#[derive(Debug, Clone)]
pub struct MySqlGameStore {
    options: MySqlConnectOptions,
}

impl MySqlGameStore {
    pub fn new(options: MySqlConnectOptions) -> Self {
        Self { options }
    }

    /// Build a store from a connection URL. Nothing is opened until the
    /// first operation.
    pub fn from_url(database_url: &str) -> Result<Self, DbError> {
        Ok(Self::new(connect_options(database_url)?))
    }

    async fn connect(&self) -> Result<MySqlConnection, DbError> {
        Ok(open_connection(&self.options).await?)
    }
}

#[async_trait]
impl GameStore for MySqlGameStore {
    async fn games(&self) -> Result<Vec<Game>, DbError> {
        let mut conn = self.connect().await?;

        let rows = sqlx::query(procs::GET_GAMES).fetch_all(&mut conn).await?;
        let games = rows
            .iter()
            .map(|row| game_from_row(row, 0))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(rows = games.len(), "spGetGames");
        Ok(games)
    }

    async fn game_by_id(&self, id: i32) -> Result<Option<Game>, DbError> {
        let mut conn = self.connect().await?;

        let row = sqlx::query(procs::GET_GAME)
            .bind(id)
            .fetch_optional(&mut conn)
            .await?;

        debug!(id, found = row.is_some(), "spGetAGame");
        Ok(row
            .map(|r| game_from_row(&r, GET_GAME_FIRST_COLUMN))
            .transpose()?)
    }

    async fn user_level_by_key(&self, key: Option<&str>) -> Result<Option<UserLevel>, DbError> {
        let key = require_key(key)?;
        let mut conn = self.connect().await?;

        let row = sqlx::query(procs::GET_USER_LEVEL)
            .bind(key)
            .fetch_optional(&mut conn)
            .await?;

        debug!(found = row.is_some(), "spGetUserLevel");
        match row {
            Some(r) => Ok(Some(UserLevel {
                title: r.try_get(0)?,
                id: r.try_get(1)?,
            })),
            None => Ok(None),
        }
    }

    async fn insert_game(&self, game: Option<&Game>) -> Result<Option<Game>, DbError> {
        let game = require_game(game)?;
        let mut conn = self.connect().await?;

        // @aid is session scoped, so the read below must reuse `conn`.
        let affected = sqlx::query(procs::INSERT_GAME)
            .bind(game.id)
            .bind(&game.title)
            .bind(&game.description)
            .bind(game.rating)
            .bind(game.price)
            .execute(&mut conn)
            .await?
            .rows_affected();

        if affected == 0 {
            debug!("spInsertWidget affected no rows");
            return Ok(None);
        }

        let generated: Option<i64> = sqlx::query_scalar(procs::INSERTED_ID)
            .fetch_one(&mut conn)
            .await?;
        debug!(affected, ?generated, echoed_id = game.id, "spInsertWidget");

        Ok(Some(game.clone()))
    }

    async fn update_game(&self, id: i32, game: Option<&Game>) -> Result<u64, DbError> {
        let game = require_game(game)?;
        let mut conn = self.connect().await?;

        let affected = sqlx::query(procs::UPDATE_GAME)
            .bind(id)
            .bind(&game.title)
            .bind(&game.description)
            .bind(game.rating)
            .bind(game.price)
            .execute(&mut conn)
            .await?
            .rows_affected();

        debug!(id, affected, "spUpdateGame");
        Ok(affected)
    }

    async fn delete_game(&self, id: i32) -> Result<u64, DbError> {
        let mut conn = self.connect().await?;

        let affected = sqlx::query(procs::DELETE_GAME)
            .bind(id)
            .execute(&mut conn)
            .await?
            .rows_affected();

        debug!(id, affected, "spDeleteGame");
        Ok(affected)
    }
}
