//! Search and random-pick commands

use rand::Rng;

use super::utils;
use movie_rank::error::MovieError;
use movie_rank::library::search;
use movie_rank::library::MovieCollection;

/// Execute a search and return one matching title per line
pub fn execute(collection: &MovieCollection, query: &str) -> String {
    let hits = search::search(collection, query);
    tracing::debug!(query, hits = hits.len(), "search finished");

    if hits.is_empty() {
        return format!("No movies matching {:?}", query.trim());
    }

    hits.iter()
        .map(|hit| {
            format!(
                "{} ({}/10, {})",
                hit.movie.title,
                utils::format_rating(hit.movie.rating),
                utils::format_year(hit.movie.year)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pick a random movie and format it as `Title: rating`
pub fn random<R: Rng + ?Sized>(
    collection: &MovieCollection,
    rng: &mut R,
) -> Result<String, MovieError> {
    let movie = collection.random(rng)?;
    Ok(format!(
        "{}: {}",
        movie.title,
        utils::format_rating(movie.rating)
    ))
}
