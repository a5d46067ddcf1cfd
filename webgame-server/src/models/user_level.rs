//! User level lookup result
//!
//! `spGetUserLevel` returns a two-column row: a level title and an id.
//! It shares nothing with [`Game`](super::Game) beyond those column names.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLevel {
    pub title: String,
    pub id: i32,
}
