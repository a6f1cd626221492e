//! In-memory movie collection

use rand::seq::IndexedRandom;
use rand::Rng;
use std::cmp::Ordering;

use super::movie::Movie;
use crate::error::MovieError;

/// Field to order listings by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Insertion order
    #[default]
    Added,
    Title,
    Rating,
    Year,
}

impl SortKey {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "added" => Some(Self::Added),
            "title" | "name" => Some(Self::Title),
            "rating" => Some(Self::Rating),
            "year" => Some(Self::Year),
            _ => None,
        }
    }
}

/// Movies in the order they were added; titles are unique ignoring case
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieCollection {
    movies: Vec<Movie>,
}

impl MovieCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starter collection used before anything has been saved
    pub fn seeded() -> Self {
        let movies = [
            ("The Shawshank Redemption", 9.5, 1994),
            ("Pulp Fiction", 8.8, 1994),
            ("The Room", 3.6, 2003),
            ("The Godfather", 9.2, 1972),
            ("The Godfather: Part II", 9.0, 1974),
            ("The Dark Knight", 9.0, 2008),
            ("12 Angry Men", 8.9, 1957),
            ("Everything Everywhere All At Once", 8.9, 2022),
            ("Forrest Gump", 8.8, 1994),
            ("Star Wars: Episode V", 8.7, 1980),
        ]
        .into_iter()
        .map(|(title, rating, year)| Movie::new(title, rating, Some(year)))
        .collect();

        Self { movies }
    }

    /// Build a collection, rejecting duplicate titles
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self, MovieError> {
        let mut collection = Self::new();
        for movie in movies {
            collection.add(movie)?;
        }
        Ok(collection)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn get(&self, title: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.has_title(title))
    }

    pub fn contains(&self, title: &str) -> bool {
        self.get(title).is_some()
    }

    pub fn add(&mut self, movie: Movie) -> Result<(), MovieError> {
        if self.contains(&movie.title) {
            return Err(MovieError::AlreadyExists(movie.title));
        }
        self.movies.push(movie);
        Ok(())
    }

    /// Remove a movie and return it
    pub fn remove(&mut self, title: &str) -> Result<Movie, MovieError> {
        let index = self
            .movies
            .iter()
            .position(|m| m.has_title(title))
            .ok_or_else(|| MovieError::NotFound(title.trim().to_string()))?;
        Ok(self.movies.remove(index))
    }

    /// Change rating and/or year; `None` leaves the field as is
    pub fn update(
        &mut self,
        title: &str,
        rating: Option<f64>,
        year: Option<i32>,
    ) -> Result<&Movie, MovieError> {
        let movie = self
            .movies
            .iter_mut()
            .find(|m| m.has_title(title))
            .ok_or_else(|| MovieError::NotFound(title.trim().to_string()))?;

        if let Some(rating) = rating {
            movie.rating = rating;
        }
        if let Some(year) = year {
            movie.year = Some(year);
        }
        Ok(movie)
    }

    /// Movies ordered by `key`; equal keys keep insertion order
    pub fn sorted(&self, key: SortKey, reverse: bool) -> Vec<&Movie> {
        let mut movies: Vec<&Movie> = self.movies.iter().collect();
        match key {
            SortKey::Added => {}
            SortKey::Title => {
                movies.sort_by_key(|m| m.title.to_lowercase());
            }
            SortKey::Rating => {
                movies.sort_by(|a, b| cmp_rating_desc(a, b));
            }
            SortKey::Year => {
                // Unknown years sort last
                movies.sort_by(|a, b| match (a.year, b.year) {
                    (Some(x), Some(y)) => x.cmp(&y),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                });
            }
        }
        if reverse {
            movies.reverse();
        }
        movies
    }

    /// Movies from best to worst rating
    pub fn ranked(&self) -> Vec<&Movie> {
        self.sorted(SortKey::Rating, false)
    }

    /// Pick one movie uniformly at random
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Movie, MovieError> {
        self.movies.choose(rng).ok_or(MovieError::EmptyCollection)
    }
}

fn cmp_rating_desc(a: &Movie, b: &Movie) -> Ordering {
    b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn titles(movies: &[&Movie]) -> Vec<String> {
        movies.iter().map(|m| m.title.clone()).collect()
    }

    #[test]
    fn test_seeded_has_ten_movies() {
        let collection = MovieCollection::seeded();
        assert_eq!(collection.len(), 10);
        assert_eq!(collection.get("the room").unwrap().rating, 3.6);
    }

    #[test]
    fn test_add_rejects_duplicate_ignoring_case() {
        let mut collection = MovieCollection::seeded();
        let err = collection
            .add(Movie::new("pulp fiction", 5.0, None))
            .unwrap_err();
        assert_eq!(err, MovieError::AlreadyExists("pulp fiction".to_string()));
        assert_eq!(collection.get("Pulp Fiction").unwrap().rating, 8.8);
    }

    #[test]
    fn test_remove() {
        let mut collection = MovieCollection::seeded();
        let removed = collection.remove("THE ROOM").unwrap();
        assert_eq!(removed.title, "The Room");
        assert_eq!(collection.len(), 9);
        assert_eq!(
            collection.remove("The Room"),
            Err(MovieError::NotFound("The Room".to_string()))
        );
    }

    #[test]
    fn test_update_rating_and_year() {
        let mut collection = MovieCollection::new();
        collection.add(Movie::new("Heat", 8.0, None)).unwrap();

        collection.update("heat", Some(8.3), None).unwrap();
        assert_eq!(collection.get("Heat").unwrap().rating, 8.3);
        assert_eq!(collection.get("Heat").unwrap().year, None);

        let movie = collection.update("Heat", None, Some(1995)).unwrap();
        assert_eq!(movie.rating, 8.3);
        assert_eq!(movie.year, Some(1995));
    }

    #[test]
    fn test_update_missing() {
        let mut collection = MovieCollection::new();
        assert_eq!(
            collection.update("Heat", Some(1.0), None).unwrap_err(),
            MovieError::NotFound("Heat".to_string())
        );
    }

    #[test]
    fn test_ranked_keeps_insertion_order_for_ties() {
        let collection = MovieCollection::seeded();
        let ranked = collection.ranked();
        assert_eq!(ranked[0].title, "The Shawshank Redemption");
        assert_eq!(ranked[2].title, "The Godfather: Part II");
        assert_eq!(ranked[3].title, "The Dark Knight");
        assert_eq!(ranked.last().unwrap().title, "The Room");
    }

    #[test]
    fn test_sorted_by_year_unknown_last() {
        let collection = MovieCollection::from_movies(vec![
            Movie::new("Unknown", 5.0, None),
            Movie::new("Newer", 6.0, Some(2010)),
            Movie::new("Older", 7.0, Some(1950)),
        ])
        .unwrap();

        let sorted = collection.sorted(SortKey::Year, false);
        assert_eq!(titles(&sorted), vec!["Older", "Newer", "Unknown"]);

        let reversed = collection.sorted(SortKey::Year, true);
        assert_eq!(titles(&reversed), vec!["Unknown", "Newer", "Older"]);
    }

    #[test]
    fn test_sorted_by_title_ignores_case() {
        let collection = MovieCollection::from_movies(vec![
            Movie::new("b", 1.0, None),
            Movie::new("A", 1.0, None),
            Movie::new("c", 1.0, None),
        ])
        .unwrap();
        let sorted = collection.sorted(SortKey::Title, false);
        assert_eq!(titles(&sorted), vec!["A", "b", "c"]);
    }

    #[test]
    fn test_from_movies_rejects_duplicates() {
        let result = MovieCollection::from_movies(vec![
            Movie::new("Heat", 8.0, None),
            Movie::new("HEAT", 7.0, None),
        ]);
        assert!(matches!(result, Err(MovieError::AlreadyExists(_))));
    }

    #[test]
    fn test_random() {
        let mut rng = StdRng::seed_from_u64(7);
        let collection = MovieCollection::seeded();
        let pick = collection.random(&mut rng).unwrap();
        assert!(collection.contains(&pick.title));

        let empty = MovieCollection::new();
        assert_eq!(
            empty.random(&mut rng).unwrap_err(),
            MovieError::EmptyCollection
        );
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!(SortKey::from_str("Rating"), Some(SortKey::Rating));
        assert_eq!(SortKey::from_str("name"), Some(SortKey::Title));
        assert_eq!(SortKey::from_str("added"), Some(SortKey::Added));
        assert_eq!(SortKey::from_str("genre"), None);
    }
}
