//! Game endpoints under /api/v1/games
//!
//! Reads delegate to the store. POST, PUT and DELETE accept their input
//! and return an empty 200 without persisting anything.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::debug;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Game;

/// GET /api/v1/games - list all games
async fn list_games(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Game>>, ApiError> {
    let games = state.store.games().await?;
    Ok(Json(games))
}

/// GET /api/v1/games/{id} - get a single game
async fn get_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Game>, ApiError> {
    state
        .store
        .game_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::game_not_found(id))
}

/// POST /api/v1/games - accepted, not persisted
async fn create_game(body: String) -> StatusCode {
    debug!(bytes = body.len(), "create game ignored");
    StatusCode::OK
}

/// PUT /api/v1/games/{id} - accepted, not persisted
async fn update_game(Path(id): Path<i32>, body: String) -> StatusCode {
    debug!(id, bytes = body.len(), "update game ignored");
    StatusCode::OK
}

/// DELETE /api/v1/games/{id} - accepted, not persisted
async fn delete_game(Path(id): Path<i32>) -> StatusCode {
    debug!(id, "delete game ignored");
    StatusCode::OK
}

/// Game routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/v1/games", get(list_games).post(create_game))
        .route(
            "/api/v1/games/{id}",
            get(get_game).put(update_game).delete(delete_game),
        )
}
