//! Command-line surface for the reelstore movie-rental database.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
