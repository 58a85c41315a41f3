//! One function per CLI verb, mapping arguments onto repository calls.
//!
//! User-facing confirmations go to stdout; diagnostics go through
//! `tracing` so stdout stays clean for the data itself.

use reelstore_core::error::CoreError;
use reelstore_core::types::DbId;
use reelstore_db::models::movie::{CreateMovie, Movie};
use reelstore_db::repositories::{CustomerRepo, MovieRepo};
use sqlx::PgPool;

use crate::error::CliError;

/// Insert one movie and confirm with its title.
pub async fn insert_movie(pool: &PgPool, input: CreateMovie) -> Result<(), CliError> {
    let movie = MovieRepo::create(pool, &input).await?;
    println!("Movie '{}' inserted successfully.", movie.title);
    Ok(())
}

/// Print every movie, one line each, after a header. The header prints
/// even when the table is empty.
pub async fn show_movies(pool: &PgPool) -> Result<(), CliError> {
    let movies = MovieRepo::list(pool).await?;
    println!("Movies in the database:");
    for movie in &movies {
        println!("{}", format_movie_line(movie));
    }
    Ok(())
}

/// Overwrite a customer's email. A non-existent ID is a data error, not a
/// silent success.
pub async fn update_customer_email(
    pool: &PgPool,
    customer_id: DbId,
    new_email: &str,
) -> Result<(), CliError> {
    match CustomerRepo::update_email(pool, customer_id, new_email).await? {
        Some(customer) => {
            println!(
                "Customer {}'s email updated to {}.",
                customer.id, customer.email
            );
            Ok(())
        }
        None => Err(CoreError::NotFound {
            entity: "customer",
            id: customer_id,
        }
        .into()),
    }
}

/// Delete a customer; the database cascades to their rentals. A
/// non-existent ID is a data error.
pub async fn remove_customer(pool: &PgPool, customer_id: DbId) -> Result<(), CliError> {
    let deleted = CustomerRepo::delete(pool, customer_id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "customer",
            id: customer_id,
        }
        .into());
    }
    println!("Removed customer with ID {customer_id}");
    Ok(())
}

/// `<title> (<year>) - Genre: <genre>, Director: <director>`
fn format_movie_line(movie: &Movie) -> String {
    format!(
        "{} ({}) - Genre: {}, Director: {}",
        movie.title, movie.release_year, movie.genre, movie.director
    )
}
