//! Movie entity model and DTOs.

use reelstore_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A movie row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub release_year: i32,
    pub genre: String,
    pub director: String,
}

/// DTO for inserting a new movie. All fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub release_year: i32,
    pub genre: String,
    pub director: String,
}
