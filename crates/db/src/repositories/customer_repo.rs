//! Repository for the `customers` table.

use reelstore_core::types::DbId;
use sqlx::PgPool;

use crate::models::customer::{CreateCustomer, Customer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, email, phone";

/// Provides write and lookup operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer, returning the created row.
    ///
    /// A duplicate email fails on the unique constraint.
    pub async fn create(pool: &PgPool, input: &CreateCustomer) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers (first_name, last_name, email, phone)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// Find a customer by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the email of the customer with the given ID.
    ///
    /// Returns `None` if no row with that ID exists. Duplicate emails fail
    /// on the unique constraint rather than being pre-checked.
    pub async fn update_email(
        pool: &PgPool,
        id: DbId,
        new_email: &str,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!(
            "UPDATE customers SET email = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .bind(new_email)
            .fetch_optional(pool)
            .await
    }

    /// Delete a customer by ID. Cascade deletes all of their rentals.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
