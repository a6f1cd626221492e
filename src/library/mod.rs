//! Core movie library operations

pub mod collection;
pub mod movie;
pub mod search;
pub mod stats;
pub mod storage;

pub use collection::{MovieCollection, SortKey};
pub use movie::Movie;
