//! Repository for the `movies` table.

use reelstore_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, release_year, genre, director";

/// Provides insert and read operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, release_year, genre, director)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(input.release_year)
            .bind(&input.genre)
            .bind(&input.director)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all movies in insertion order (`ORDER BY id`).
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }
}
