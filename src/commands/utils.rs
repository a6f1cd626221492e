//! Shared utilities for commands

use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};

use movie_rank::library::stats::round2;

/// Format a rating the way users type it: `9`, `8.8`, `8.44`
pub fn format_rating(rating: f64) -> String {
    format!("{}", round2(rating))
}

/// Format an optional year, `-` when unknown
pub fn format_year(year: Option<i32>) -> String {
    year.map(|y| y.to_string()).unwrap_or_else(|| "-".to_string())
}

/// English plural suffix
pub fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Print a colored prompt and read one trimmed line
///
/// Returns `None` on end of input.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{}", label.cyan().bold())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
