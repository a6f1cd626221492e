//! Domain errors

use thiserror::Error;

/// Errors raised by validation and collection operations
#[derive(Debug, Error, PartialEq)]
pub enum MovieError {
    #[error("Movie title must not be empty")]
    EmptyTitle,

    #[error("Rating is not a number: {0:?}")]
    RatingNotNumeric(String),

    #[error("Rating must be between 0 and 10, got {0}")]
    RatingOutOfRange(f64),

    #[error("Invalid release year: {0:?}")]
    InvalidYear(String),

    #[error("Movie already exists: {0}")]
    AlreadyExists(String),

    #[error("Movie doesn't exist: {0}")]
    NotFound(String),

    #[error("No movies in the collection")]
    EmptyCollection,
}
