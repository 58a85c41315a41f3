//! Customer entity model and DTOs.

use reelstore_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A customer row from the `customers` table.
///
/// `email` is unique across all customers; a duplicate surfaces as a
/// database constraint error, never as an application-level pre-check.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// DTO for inserting a new customer.
///
/// The CLI exposes no customer-insert verb; customers enter the dataset
/// through this repository path (seed scripts, tests, external writers).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}
