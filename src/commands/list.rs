//! List command - Show the movie collection

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, CellAlignment, ContentArrangement, Table};

use super::utils;
use movie_rank::library::{MovieCollection, SortKey};

/// Options for the list command
#[derive(Debug, Default)]
pub struct ListOptions {
    /// Sort by: added, title, rating, year
    pub sort: String,
    /// Reverse sort order
    pub reverse: bool,
    /// Limit number of results
    pub limit: Option<usize>,
}

/// Render the collection as a table with a total line
pub fn execute(collection: &MovieCollection, options: &ListOptions) -> Result<String> {
    let key = if options.sort.is_empty() {
        SortKey::Added
    } else {
        SortKey::from_str(&options.sort)
            .context("Invalid sort key. Use 'added', 'title', 'rating' or 'year'")?
    };

    let mut movies = collection.sorted(key, options.reverse);

    let total_count = movies.len();
    if let Some(n) = options.limit {
        movies.truncate(n);
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new("Movie"), Cell::new("Rating"), Cell::new("Year")]);

    for movie in &movies {
        table.add_row(vec![
            Cell::new(&movie.title),
            Cell::new(utils::format_rating(movie.rating)).set_alignment(CellAlignment::Right),
            Cell::new(utils::format_year(movie.year)),
        ]);
    }

    let mut output = format!("Movies in total: {}\n", total_count);
    output.push_str(&table.to_string());
    if movies.len() < total_count {
        output.push_str(&format!(
            "\n\nShowing {} of {} movies",
            movies.len(),
            total_count
        ));
    }

    Ok(output)
}

/// Movies from best to worst, one `Title   R/10` line each
pub fn ranked(collection: &MovieCollection) -> String {
    collection
        .ranked()
        .iter()
        .map(|m| format!("{:<35} {}/10", m.title, utils::format_rating(m.rating)))
        .collect::<Vec<_>>()
        .join("\n")
}
