//! Stats and histogram commands

use owo_colors::OwoColorize;

use super::utils;
use movie_rank::error::MovieError;
use movie_rank::library::stats::{self, Summary, HISTOGRAM_BUCKETS};
use movie_rank::library::MovieCollection;

/// Widest bar drawn by the histogram
const BAR_WIDTH: usize = 40;

const RULE_WIDTH: usize = 15;

/// Format a summary for display
pub fn format_stats(summary: &Summary) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut lines = vec![];

    lines.push(format!(
        "Average rating: {}. Median rating: {}.",
        utils::format_rating(summary.average),
        utils::format_rating(summary.median)
    ));
    lines.push(rule.clone());

    lines.push(format!("Best Rating{}", utils::plural(summary.best.len())));
    lines.push(rule.clone());
    for movie in &summary.best {
        lines.push(format!(
            "{} with {}/10",
            movie.title,
            utils::format_rating(summary.best_rating)
        ));
    }

    lines.push(format!("Worst Rating{}", utils::plural(summary.worst.len())));
    lines.push(rule);
    for movie in &summary.worst {
        lines.push(format!(
            "{} with {}/10",
            movie.title,
            utils::format_rating(summary.worst_rating)
        ));
    }

    lines.join("\n")
}

/// Execute the stats command and return formatted output
pub fn execute(collection: &MovieCollection) -> Result<String, MovieError> {
    let summary = stats::summarize(collection)?;
    Ok(format_stats(&summary))
}

/// Render the rating histogram as horizontal bars
pub fn histogram(collection: &MovieCollection) -> Result<String, MovieError> {
    if collection.is_empty() {
        return Err(MovieError::EmptyCollection);
    }

    let buckets = stats::histogram(collection);
    let max = buckets.iter().copied().max().unwrap_or(0).max(1);

    let mut lines = vec!["Rating histogram".to_string(), "-".repeat(RULE_WIDTH)];
    for (i, &count) in buckets.iter().enumerate() {
        let label = if i == HISTOGRAM_BUCKETS - 1 {
            format!("{:>2}-{:<2}]", i, i + 1)
        } else {
            format!("{:>2}-{:<2})", i, i + 1)
        };
        let width = (count * BAR_WIDTH).div_ceil(max);
        let bar = "#".repeat(width);
        lines.push(format!("{} {} {}", label, bar.green(), count));
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use movie_rank::library::Movie;

    #[test]
    fn test_format_seeded_stats() {
        let output = execute(&MovieCollection::seeded()).unwrap();
        assert!(output.starts_with("Average rating: 8.44. Median rating: 8.9."));
        assert!(output.contains("Best Rating\n"));
        assert!(output.contains("The Shawshank Redemption with 9.5/10"));
        assert!(output.contains("Worst Rating\n"));
        assert!(output.contains("The Room with 3.6/10"));
    }

    #[test]
    fn test_plural_headers_for_ties() {
        let collection = MovieCollection::from_movies(vec![
            Movie::new("A", 9.0, None),
            Movie::new("B", 9.0, None),
            Movie::new("C", 2.0, None),
        ])
        .unwrap();
        let output = execute(&collection).unwrap();
        assert!(output.contains("Best Ratings"));
        assert!(output.contains("A with 9/10"));
        assert!(output.contains("B with 9/10"));
        assert!(output.contains("Worst Rating\n"));
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(
            execute(&MovieCollection::new()),
            Err(MovieError::EmptyCollection)
        );
    }

    #[test]
    fn test_histogram() {
        let output = histogram(&MovieCollection::seeded()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        // Title, rule and ten buckets
        assert_eq!(lines.len(), 12);
        assert!(lines[5].starts_with(" 3-4 )"));
        assert!(lines[5].ends_with(" 1"));
        assert!(lines[10].ends_with(" 5"));
        assert!(lines[11].starts_with(" 9-10]"));
        assert!(lines[11].ends_with(" 4"));
    }

    #[test]
    fn test_histogram_empty() {
        assert_eq!(
            histogram(&MovieCollection::new()),
            Err(MovieError::EmptyCollection)
        );
    }
}
