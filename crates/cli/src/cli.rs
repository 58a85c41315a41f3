//! Argument definitions for the `reelstore` binary.
//!
//! Arity and numeric validation happen here, at parse time; a non-numeric
//! year or customer ID never reaches the database layer.

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use reelstore_core::types::DbId;

#[derive(Debug, Parser)]
#[command(name = "reelstore", about = "Manage the movie-rental database", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Insert a movie
    Insert {
        /// Title of the movie
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        title: String,
        /// Year the movie was released
        year: i32,
        /// Genre of the movie
        genre: String,
        /// Director of the movie
        director: String,
    },
    /// Show all movies
    Show,
    /// Update a customer's email address
    Update {
        /// ID of the customer
        customer_id: DbId,
        /// New email address
        new_email: String,
    },
    /// Remove a customer and their rental history
    Remove {
        /// ID of the customer
        customer_id: DbId,
    },
}

impl Command {
    /// The verb this command was invoked with, for log context.
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Insert { .. } => "insert",
            Command::Show => "show",
            Command::Update { .. } => "update",
            Command::Remove { .. } => "remove",
        }
    }
}
