//! API error types with IntoResponse
//!
//! A missing game is the only error with a client-facing message; every
//! data-access failure becomes a generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

#[derive(Debug)]
pub enum ApiError {
    /// Resource not found (404, plain text)
    NotFound { message: String },

    /// Data access failed (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn game_not_found(id: i32) -> Self {
        Self::NotFound {
            message: format!("Game {} not found.", id),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { message } => (StatusCode::NOT_FOUND, message).into_response(),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "internal_error",
                        "message": "an internal error occurred"
                    })),
                )
                    .into_response()
            }
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
