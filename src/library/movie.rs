//! Movie record and field validation

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::MovieError;

/// Lowest accepted rating
pub const MIN_RATING: f64 = 0.0;

/// Highest accepted rating
pub const MAX_RATING: f64 = 10.0;

/// Year of the earliest surviving motion picture
pub const FIRST_FILM_YEAR: i32 = 1888;

/// How far past the current year a release may be announced
const FUTURE_YEARS: i32 = 5;

/// A rated movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,

    pub rating: f64,

    /// Release year, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl Movie {
    pub fn new(title: impl Into<String>, rating: f64, year: Option<i32>) -> Self {
        Self {
            title: title.into(),
            rating,
            year,
        }
    }

    /// Case-insensitive title comparison
    pub fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.trim().to_lowercase()
    }
}

/// Trim a title and reject empty ones
pub fn validate_title(input: &str) -> Result<String, MovieError> {
    let title = input.trim();
    if title.is_empty() {
        return Err(MovieError::EmptyTitle);
    }
    Ok(title.to_string())
}

/// Parse a rating typed by the user
pub fn parse_rating(input: &str) -> Result<f64, MovieError> {
    let trimmed = input.trim();
    let rating: f64 = trimmed
        .parse()
        .map_err(|_| MovieError::RatingNotNumeric(trimmed.to_string()))?;
    if !rating.is_finite() {
        return Err(MovieError::RatingNotNumeric(trimmed.to_string()));
    }
    // Adding zero turns -0 into 0
    Ok(validate_rating(rating)? + 0.0)
}

/// Check a rating lies in `0..=10`
pub fn validate_rating(rating: f64) -> Result<f64, MovieError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(MovieError::RatingOutOfRange(rating));
    }
    Ok(rating)
}

/// Parse an optional release year; blank input means unknown
pub fn parse_year(input: &str) -> Result<Option<i32>, MovieError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let year: i32 = trimmed
        .parse()
        .map_err(|_| MovieError::InvalidYear(trimmed.to_string()))?;
    validate_year(year).map(Some)
}

/// Check a year is between the first film and a few years from now
pub fn validate_year(year: i32) -> Result<i32, MovieError> {
    let latest = chrono::Local::now().year() + FUTURE_YEARS;
    if !(FIRST_FILM_YEAR..=latest).contains(&year) {
        return Err(MovieError::InvalidYear(year.to_string()));
    }
    Ok(year)
}
