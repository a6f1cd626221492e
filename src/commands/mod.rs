//! CLI commands

pub mod edit;
pub mod list;
pub mod search;
pub mod stats;
pub mod utils;
