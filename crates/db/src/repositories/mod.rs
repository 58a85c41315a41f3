//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod customer_repo;
pub mod movie_repo;
pub mod rental_repo;

pub use customer_repo::CustomerRepo;
pub use movie_repo::MovieRepo;
pub use rental_repo::RentalRepo;
