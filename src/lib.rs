//! movie-rank library
//!
//! Core functionality for tracking personal movie ratings: the movie
//! collection, its JSON persistence, fuzzy search and rating statistics.

pub mod config;
pub mod error;
pub mod library;
