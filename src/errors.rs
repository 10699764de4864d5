//! Unified error types for the crate.
//!
//! Every fallible operation returns [`Result`]. Store failures carry the
//! underlying `DbErr`; validation and auth failures carry user-presentable
//! context. Nothing here is fatal to the process - callers at the operation
//! boundary convert these into user-visible messages.

use thiserror::Error;

/// All error conditions the lead-tracking core can surface.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field is missing or an input value is malformed.
    /// Rejected before anything reaches the store; no partial write occurs.
    #[error("Validation error: {message}")]
    Validation {
        /// What was wrong with the input
        message: String,
    },

    /// Username collision on user creation. No mutation was performed.
    #[error("User '{username}' already exists")]
    DuplicateUser {
        /// The colliding username
        username: String,
    },

    /// Password reset or lookup target does not exist.
    #[error("User '{username}' not found")]
    UserNotFound {
        /// The missing username
        username: String,
    },

    /// Update target does not exist.
    #[error("Lead {id} not found")]
    LeadNotFound {
        /// The missing lead id
        id: i64,
    },

    /// Credential mismatch or unknown username. Deliberately carries no
    /// detail so the two cases are indistinguishable to the caller.
    #[error("Invalid username or password")]
    AuthFailure,

    /// Stored credential digest could not be parsed or verified.
    #[error("Credential hashing error: {message}")]
    Crypto {
        /// What went wrong inside the hasher
        message: String,
    },

    /// Configuration file missing, unreadable, or malformed.
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },

    /// Underlying store unreachable or query failed.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Bulk import file could not be read as CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error reading configuration or import data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
