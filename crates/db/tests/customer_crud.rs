//! Integration tests for customer email update, removal, and the rental
//! cascade.

use assert_matches::assert_matches;
use chrono::NaiveDate;
use reelstore_db::models::customer::CreateCustomer;
use reelstore_db::models::movie::CreateMovie;
use reelstore_db::models::rental::CreateRental;
use reelstore_db::repositories::{CustomerRepo, MovieRepo, RentalRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_customer(email: &str) -> CreateCustomer {
    CreateCustomer {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        phone: "555-0100".to_string(),
    }
}

fn new_movie(title: &str) -> CreateMovie {
    CreateMovie {
        title: title.to_string(),
        release_year: 1979,
        genre: "Horror".to_string(),
        director: "Ridley Scott".to_string(),
    }
}

fn new_rental(customer_id: i64, movie_id: i64, day: u32) -> CreateRental {
    CreateRental {
        customer_id,
        movie_id,
        rental_date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
        return_date: None,
    }
}

// ---------------------------------------------------------------------------
// Email update
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_update_email_persists(pool: PgPool) {
    reelstore_db::ensure_schema(&pool).await.unwrap();

    let customer = CustomerRepo::create(&pool, &new_customer("ada@example.com"))
        .await
        .unwrap();

    let updated = CustomerRepo::update_email(&pool, customer.id, "countess@example.com")
        .await
        .unwrap()
        .expect("existing customer should match");
    assert_eq!(updated.email, "countess@example.com");

    let reread = CustomerRepo::find_by_id(&pool, customer.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reread.email, "countess@example.com");
}

/// A non-existent ID matches zero rows and reports `None` rather than
/// claiming success.
#[sqlx::test]
async fn test_update_email_missing_customer_is_none(pool: PgPool) {
    reelstore_db::ensure_schema(&pool).await.unwrap();

    let result = CustomerRepo::update_email(&pool, 999_999, "ghost@example.com")
        .await
        .unwrap();
    assert!(result.is_none());
}

/// Email uniqueness is enforced by the database, not pre-checked.
#[sqlx::test]
async fn test_update_email_to_duplicate_is_rejected(pool: PgPool) {
    reelstore_db::ensure_schema(&pool).await.unwrap();

    CustomerRepo::create(&pool, &new_customer("first@example.com"))
        .await
        .unwrap();
    let second = CustomerRepo::create(&pool, &new_customer("second@example.com"))
        .await
        .unwrap();

    let result = CustomerRepo::update_email(&pool, second.id, "first@example.com").await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));
}

#[sqlx::test]
async fn test_create_duplicate_email_is_rejected(pool: PgPool) {
    reelstore_db::ensure_schema(&pool).await.unwrap();

    CustomerRepo::create(&pool, &new_customer("dup@example.com"))
        .await
        .unwrap();
    let result = CustomerRepo::create(&pool, &new_customer("dup@example.com")).await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));
}

// ---------------------------------------------------------------------------
// Removal and rental cascade
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_delete_cascades_to_rentals_and_spares_movies(pool: PgPool) {
    reelstore_db::ensure_schema(&pool).await.unwrap();

    let customer = CustomerRepo::create(&pool, &new_customer("renter@example.com"))
        .await
        .unwrap();
    let other = CustomerRepo::create(&pool, &new_customer("other@example.com"))
        .await
        .unwrap();
    let movie = MovieRepo::create(&pool, &new_movie("Alien")).await.unwrap();

    RentalRepo::create(&pool, &new_rental(customer.id, movie.id, 1))
        .await
        .unwrap();
    RentalRepo::create(&pool, &new_rental(customer.id, movie.id, 2))
        .await
        .unwrap();
    let kept = RentalRepo::create(&pool, &new_rental(other.id, movie.id, 3))
        .await
        .unwrap();

    let deleted = CustomerRepo::delete(&pool, customer.id).await.unwrap();
    assert!(deleted);

    // Customer row and both of their rentals are gone.
    assert!(CustomerRepo::find_by_id(&pool, customer.id)
        .await
        .unwrap()
        .is_none());
    assert!(RentalRepo::list_for_customer(&pool, customer.id)
        .await
        .unwrap()
        .is_empty());

    // The other customer's rental and the movie are untouched.
    let remaining = RentalRepo::list_for_customer(&pool, other.id).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);
    assert!(MovieRepo::find_by_id(&pool, movie.id)
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test]
async fn test_delete_missing_customer_is_false(pool: PgPool) {
    reelstore_db::ensure_schema(&pool).await.unwrap();

    let deleted = CustomerRepo::delete(&pool, 999_999).await.unwrap();
    assert!(!deleted);
}

/// A rental pointing at a non-existent customer or movie is rejected by
/// the foreign-key constraints.
#[sqlx::test]
async fn test_rental_fk_violation_is_rejected(pool: PgPool) {
    reelstore_db::ensure_schema(&pool).await.unwrap();

    let result = RentalRepo::create(&pool, &new_rental(999_999, 999_999, 1)).await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));
}
