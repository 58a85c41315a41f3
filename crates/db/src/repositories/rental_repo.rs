//! Repository for the `rentals` table.
//!
//! The CLI exposes no rental verb; rentals are written by external
//! processes through this path. Deletion happens only via the customer
//! cascade.

use reelstore_core::types::DbId;
use sqlx::PgPool;

use crate::models::rental::{CreateRental, Rental};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, customer_id, movie_id, rental_date, return_date";

/// Provides insert and lookup operations for rentals.
pub struct RentalRepo;

impl RentalRepo {
    /// Insert a new rental, returning the created row.
    ///
    /// Fails on the foreign-key constraints if the customer or movie does
    /// not exist.
    pub async fn create(pool: &PgPool, input: &CreateRental) -> Result<Rental, sqlx::Error> {
        let query = format!(
            "INSERT INTO rentals (customer_id, movie_id, rental_date, return_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(input.customer_id)
            .bind(input.movie_id)
            .bind(input.rental_date)
            .bind(input.return_date)
            .fetch_one(pool)
            .await
    }

    /// List all rentals belonging to one customer, oldest first.
    pub async fn list_for_customer(
        pool: &PgPool,
        customer_id: DbId,
    ) -> Result<Vec<Rental>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM rentals WHERE customer_id = $1 ORDER BY rental_date, id"
        );
        sqlx::query_as::<_, Rental>(&query)
            .bind(customer_id)
            .fetch_all(pool)
            .await
    }
}
