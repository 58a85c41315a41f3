//! Rental entity model and DTOs.

use chrono::NaiveDate;
use reelstore_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A rental row from the `rentals` table.
///
/// `return_date` is `None` while the movie is still out. Rows are removed
/// automatically when their customer is deleted (`ON DELETE CASCADE`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rental {
    pub id: DbId,
    pub customer_id: DbId,
    pub movie_id: DbId,
    pub rental_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

/// DTO for inserting a new rental.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRental {
    pub customer_id: DbId,
    pub movie_id: DbId,
    pub rental_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}
