//! Data file location

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment variable overriding the data file path
pub const DATA_FILE_ENV: &str = "MOVIE_RANK_FILE";

const APP_DIR: &str = "movie-rank";
const DATA_FILE: &str = "movies.json";

/// Get the default data file
/// - Linux: ~/.local/share/movie-rank/movies.json
/// - macOS: ~/Library/Application Support/movie-rank/movies.json
/// - Windows: %APPDATA%/movie-rank/movies.json
pub fn default_data_file() -> Result<PathBuf> {
    let data = dirs::data_dir().context("Could not determine data directory")?;
    Ok(data.join(APP_DIR).join(DATA_FILE))
}

/// Resolve the data file: explicit path, then `MOVIE_RANK_FILE`, then the default
pub fn resolve_data_file(explicit: Option<PathBuf>) -> Result<PathBuf> {
    resolve_with_env(explicit, std::env::var_os(DATA_FILE_ENV).map(PathBuf::from))
}

fn resolve_with_env(explicit: Option<PathBuf>, env: Option<PathBuf>) -> Result<PathBuf> {
    match explicit.or(env.filter(|p| !p.as_os_str().is_empty())) {
        Some(path) => Ok(path),
        None => default_data_file(),
    }
}
