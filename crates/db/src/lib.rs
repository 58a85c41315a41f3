//! Database access layer for reelstore.
//!
//! Provides connection pool construction, a health check, the idempotent
//! schema bootstrap, and the entity models and repositories used by the
//! CLI and by external writers.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default upper bound on pool connections. One CLI invocation issues a
/// short sequence of queries, so a small pool is plenty.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Schema bootstrap batch. `IF NOT EXISTS` makes every statement safe to
/// re-run; the batch is issued unconditionally before each command.
///
/// `rentals.customer_id` carries `ON DELETE CASCADE`: removing a customer
/// removes their rental history at the database level. `movie_id` has no
/// cascade, so movies survive the removal of customers that rented them.
const SCHEMA_SQL: &str = "
    CREATE TABLE IF NOT EXISTS movies (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        release_year INT NOT NULL,
        genre TEXT NOT NULL,
        director TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS customers (
        id BIGSERIAL PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT UNIQUE NOT NULL,
        phone TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS rentals (
        id BIGSERIAL PRIMARY KEY,
        customer_id BIGINT NOT NULL REFERENCES customers(id) ON DELETE CASCADE,
        movie_id BIGINT NOT NULL REFERENCES movies(id),
        rental_date DATE NOT NULL,
        return_date DATE
    );
";

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the movies, customers and rentals tables if they do not exist.
///
/// Idempotent: re-running on an initialized database changes nothing.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    tracing::debug!("schema bootstrap complete");
    Ok(())
}
