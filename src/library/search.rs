//! Title search with fuzzy matching
//!
//! An exact (case-insensitive) title match wins outright. Otherwise titles
//! containing the query, or similar enough by bigram overlap, are returned
//! best first.

use std::collections::HashMap;

use super::collection::MovieCollection;
use super::movie::Movie;

/// Minimum similarity for a fuzzy hit
pub const SIMILARITY_THRESHOLD: f64 = 0.5;

/// A search result with its match score in `0.0..=1.0`
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    pub movie: &'a Movie,
    pub score: f64,
}

/// Sørensen–Dice coefficient over character bigrams
///
/// Case and whitespace are ignored, so `"darkknight"` and
/// `"The Dark Knight"` compare on the same letters.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);

    if a == b {
        return 1.0;
    }
    if a.chars().count() < 2 || b.chars().count() < 2 {
        return 0.0;
    }

    let mut first = bigrams(&a);
    let total = first.values().sum::<usize>() + bigrams(&b).values().sum::<usize>();

    let b_chars: Vec<char> = b.chars().collect();
    let mut shared = 0;
    for pair in b_chars.windows(2) {
        if let Some(count) = first.get_mut(&(pair[0], pair[1])) {
            if *count > 0 {
                *count -= 1;
                shared += 1;
            }
        }
    }

    (2 * shared) as f64 / total as f64
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn bigrams(s: &str) -> HashMap<(char, char), usize> {
    let chars: Vec<char> = s.chars().collect();
    let mut map = HashMap::new();
    for pair in chars.windows(2) {
        *map.entry((pair[0], pair[1])).or_insert(0) += 1;
    }
    map
}

/// Search the collection for `query`
pub fn search<'a>(collection: &'a MovieCollection, query: &str) -> Vec<SearchHit<'a>> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    if let Some(movie) = collection.get(query) {
        return vec![SearchHit { movie, score: 1.0 }];
    }

    let needle = query.to_lowercase();
    let mut hits: Vec<SearchHit<'a>> = collection
        .iter()
        .filter_map(|movie| {
            let mut score = similarity(query, &movie.title);
            if movie.title.to_lowercase().contains(&needle) {
                score = score.max(SIMILARITY_THRESHOLD);
            }
            (score >= SIMILARITY_THRESHOLD).then_some(SearchHit { movie, score })
        })
        .collect();

    // Stable sort keeps collection order among equal scores
    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit_titles(hits: &[SearchHit]) -> Vec<String> {
        hits.iter().map(|h| h.movie.title.clone()).collect()
    }

    #[test]
    fn test_similarity_identical() {
        assert_eq!(similarity("Heat", "heat"), 1.0);
        assert_eq!(similarity("a", "A"), 1.0);
    }

    #[test]
    fn test_similarity_disjoint() {
        assert_eq!(similarity("abc", "xyz"), 0.0);
        assert_eq!(similarity("a", "b"), 0.0);
        assert_eq!(similarity("", "heat"), 0.0);
    }

    #[test]
    fn test_similarity_partial() {
        // night: ni ig gh ht / nacht: na ac ch ht -> one shared of eight
        assert!((similarity("night", "nacht") - 0.25).abs() < 1e-9);
        // Repeated bigrams are only matched once each
        assert!((similarity("aaaa", "aa") - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_exact_match_wins() {
        let collection = MovieCollection::seeded();
        let hits = search(&collection, "the godfather");
        assert_eq!(hit_titles(&hits), vec!["The Godfather"]);
        assert_eq!(hits[0].score, 1.0);
    }

    #[test]
    fn test_substring_matches() {
        let collection = MovieCollection::seeded();
        let hits = search(&collection, "godfather");
        let titles = hit_titles(&hits);
        assert_eq!(titles.len(), 2);
        assert!(titles.contains(&"The Godfather".to_string()));
        assert!(titles.contains(&"The Godfather: Part II".to_string()));
    }

    #[test]
    fn test_typo_still_matches() {
        let collection = MovieCollection::seeded();
        let hits = search(&collection, "Shawshank Redemtion");
        assert_eq!(hits[0].movie.title, "The Shawshank Redemption");
    }

    #[test]
    fn test_fuzzy_hit_at_threshold() {
        let collection = MovieCollection::from_movies(vec![
            Movie::new("abc", 5.0, None),
            Movie::new("xyz", 5.0, None),
        ])
        .unwrap();

        // ab/bc against ab/bd: one shared bigram of four
        assert_eq!(similarity("abd", "abc"), SIMILARITY_THRESHOLD);
        let hits = search(&collection, "abd");
        assert_eq!(hit_titles(&hits), vec!["abc"]);
        assert_eq!(hits[0].score, SIMILARITY_THRESHOLD);
    }

    #[test]
    fn test_substring_hit_raised_to_threshold() {
        let collection = MovieCollection::from_movies(vec![
            Movie::new("The Heat Is On", 6.0, None),
            Movie::new("Alien", 8.5, None),
            Movie::new("Heath", 7.0, None),
        ])
        .unwrap();

        assert!(similarity("heat", "The Heat Is On") < SIMILARITY_THRESHOLD);
        let hits = search(&collection, "heat");
        assert_eq!(hit_titles(&hits), vec!["Heath", "The Heat Is On"]);
        assert!(hits[0].score > SIMILARITY_THRESHOLD);
        assert_eq!(hits[1].score, SIMILARITY_THRESHOLD);
    }

    #[test]
    fn test_no_match() {
        let collection = MovieCollection::seeded();
        assert!(search(&collection, "zzzz").is_empty());
        assert!(search(&collection, "   ").is_empty());
    }
}
