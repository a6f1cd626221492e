//! JSON persistence for the movie collection
//!
//! The data file looks like:
//!
//! ```json
//! {
//!   "movies": [
//!     { "title": "Pulp Fiction", "rating": 8.8, "year": 1994 }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use super::collection::MovieCollection;
use super::movie::{self, Movie};

/// On-disk representation of the data file
#[derive(Debug, Default, Serialize, Deserialize)]
struct DataFile {
    #[serde(default)]
    movies: Vec<Movie>,
}

/// Load the collection from `path`
///
/// A missing file yields the seeded starter collection.
pub fn load<P: AsRef<Path>>(path: P) -> Result<MovieCollection> {
    let path = path.as_ref();

    if !path.exists() {
        tracing::debug!(path = %path.display(), "data file missing, using starter collection");
        return Ok(MovieCollection::seeded());
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read: {}", path.display()))?;

    let mut data: DataFile = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse: {}", path.display()))?;

    for entry in &mut data.movies {
        let context = || format!("Invalid entry {:?} in {}", entry.title, path.display());
        let title = movie::validate_title(&entry.title).with_context(context)?;
        movie::validate_rating(entry.rating).with_context(context)?;
        if let Some(year) = entry.year {
            movie::validate_year(year).with_context(context)?;
        }
        entry.title = title;
    }

    let collection = MovieCollection::from_movies(data.movies)
        .with_context(|| format!("Invalid data in {}", path.display()))?;

    tracing::debug!(path = %path.display(), count = collection.len(), "loaded movies");
    Ok(collection)
}

/// Save the collection to `path`, replacing the file atomically
pub fn save<P: AsRef<Path>>(path: P, collection: &MovieCollection) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let data = DataFile {
        movies: collection.movies().to_vec(),
    };
    let content = serde_json::to_string_pretty(&data)?;

    // Write next to the target so the final rename stays on one filesystem
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in: {}", dir.display()))?;
    tmp.write_all(content.as_bytes())?;
    tmp.write_all(b"\n")?;
    tmp.persist(path)
        .with_context(|| format!("Failed to write: {}", path.display()))?;

    tracing::debug!(path = %path.display(), count = collection.len(), "saved movies");
    Ok(())
}
