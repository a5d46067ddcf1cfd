//! Game entity

use serde::{Deserialize, Serialize};

/// A catalogue entry. `id` is assigned by the database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub rating: i32,
    pub price: f64,
}

impl Game {
    pub fn new(
        id: i32,
        title: impl Into<String>,
        description: impl Into<String>,
        rating: i32,
        price: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            rating,
            price,
        }
    }
}
