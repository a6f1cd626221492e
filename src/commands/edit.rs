//! Add, delete and update commands
//!
//! Each takes raw user input, validates it and mutates the collection.
//! The caller is responsible for saving afterwards.

use movie_rank::error::MovieError;
use movie_rank::library::movie::{self, Movie};
use movie_rank::library::MovieCollection;

use super::utils;

/// Add a new movie
pub fn add(
    collection: &mut MovieCollection,
    title: &str,
    rating: &str,
    year: Option<&str>,
) -> Result<String, MovieError> {
    let title = movie::validate_title(title)?;
    if collection.contains(&title) {
        return Err(MovieError::AlreadyExists(title));
    }
    let rating = movie::parse_rating(rating)?;
    let year = match year {
        Some(y) => movie::parse_year(y)?,
        None => None,
    };

    let message = format!("Added {} with {}/10", title, utils::format_rating(rating));
    collection.add(Movie::new(title, rating, year))?;
    tracing::info!(%message);
    Ok(message)
}

/// Delete a movie by title
pub fn delete(collection: &mut MovieCollection, title: &str) -> Result<String, MovieError> {
    let title = movie::validate_title(title)?;
    let removed = collection.remove(&title)?;
    tracing::info!(title = %removed.title, "deleted movie");
    Ok(format!("Deleted {}", removed.title))
}

/// Update the rating and/or year of an existing movie
///
/// Blank strings leave the corresponding field unchanged.
pub fn update(
    collection: &mut MovieCollection,
    title: &str,
    rating: Option<&str>,
    year: Option<&str>,
) -> Result<String, MovieError> {
    let title = movie::validate_title(title)?;
    if !collection.contains(&title) {
        return Err(MovieError::NotFound(title));
    }

    let rating = match rating.filter(|r| !r.trim().is_empty()) {
        Some(r) => Some(movie::parse_rating(r)?),
        None => None,
    };
    let year = match year {
        Some(y) => movie::parse_year(y)?,
        None => None,
    };

    let movie = collection.update(&title, rating, year)?;
    tracing::info!(title = %movie.title, rating = movie.rating, "updated movie");
    Ok(format!(
        "Updated {}: {}/10, year {}",
        movie.title,
        utils::format_rating(movie.rating),
        utils::format_year(movie.year)
    ))
}
