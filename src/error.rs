//! Error types and handling.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Request failed boundary validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// Update targeted an id with no stored record.
    ///
    /// Not recovered: surfaces as a server error, unlike the not-found
    /// outcome of a plain lookup.
    #[error("No department present for id {0}")]
    MissingRecord(i64),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;
