//! Rating statistics

use super::collection::MovieCollection;
use super::movie::Movie;
use crate::error::MovieError;

/// Number of histogram buckets, one per rating point
pub const HISTOGRAM_BUCKETS: usize = 10;

/// Descriptive statistics over all ratings
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,

    pub average: f64,

    pub median: f64,

    pub best_rating: f64,

    /// Every movie tied at the best rating, in collection order
    pub best: Vec<Movie>,

    pub worst_rating: f64,

    /// Every movie tied at the worst rating, in collection order
    pub worst: Vec<Movie>,
}

/// Compute the summary for a non-empty collection
pub fn summarize(collection: &MovieCollection) -> Result<Summary, MovieError> {
    if collection.is_empty() {
        return Err(MovieError::EmptyCollection);
    }

    let mut ratings: Vec<f64> = collection.iter().map(|m| m.rating).collect();
    let count = ratings.len();
    let average = ratings.iter().sum::<f64>() / count as f64;

    ratings.sort_by(f64::total_cmp);
    let mid = count / 2;
    let median = if count % 2 == 1 {
        ratings[mid]
    } else {
        (ratings[mid - 1] + ratings[mid]) / 2.0
    };

    let worst_rating = ratings[0];
    let best_rating = ratings[count - 1];

    let with_rating = |rating: f64| -> Vec<Movie> {
        collection
            .iter()
            .filter(|m| m.rating == rating)
            .cloned()
            .collect()
    };

    Ok(Summary {
        count,
        average,
        median,
        best_rating,
        best: with_rating(best_rating),
        worst_rating,
        worst: with_rating(worst_rating),
    })
}

/// Count ratings per whole point; a perfect 10 lands in the last bucket
pub fn histogram(collection: &MovieCollection) -> [usize; HISTOGRAM_BUCKETS] {
    let mut buckets = [0; HISTOGRAM_BUCKETS];
    for movie in collection.iter() {
        let index = (movie.rating.floor().max(0.0) as usize).min(HISTOGRAM_BUCKETS - 1);
        buckets[index] += 1;
    }
    buckets
}

/// Round to two decimals for display
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
