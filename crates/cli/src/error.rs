//! Error type and exit-code mapping for the binary.
//!
//! Exit codes follow one code per taxonomy class so scripting callers can
//! distinguish outcomes: 0 success, 1 usage error, 2 data error
//! (not found, constraint violation), 3 connectivity or initialization
//! failure.

use reelstore_core::error::CoreError;

/// Process exit codes, one per error class.
pub mod exit {
    pub const SUCCESS: u8 = 0;
    pub const USAGE: u8 = 1;
    pub const DATA: u8 = 2;
    pub const CONNECTIVITY: u8 = 3;
}

/// Top-level error for the binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A domain-level error, e.g. a customer ID that matched no row.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Missing or malformed environment configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map this error to its process exit code.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Core(_) => exit::DATA,
            CliError::Config(_) => exit::CONNECTIVITY,
            CliError::Database(err) => classify_sqlx_error(err),
        }
    }
}

/// Classify a sqlx error into an exit code.
///
/// Transport and setup failures are connectivity errors; everything that
/// comes back from a healthy connection (constraint violations, missing
/// rows, decode problems) is a data error.
fn classify_sqlx_error(err: &sqlx::Error) -> u8 {
    match err {
        sqlx::Error::Configuration(_)
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => exit::CONNECTIVITY,
        _ => exit::DATA,
    }
}
