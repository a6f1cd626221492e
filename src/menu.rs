//! Interactive menu, used when no subcommand is given

use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::commands::{self, list::ListOptions, utils::prompt};
use movie_rank::error::MovieError;
use movie_rank::library::{movie, storage, MovieCollection};

const MENU: &str = "
********** My Movies Database **********

Menu:
0. Quit
1. List movies
2. Add movie
3. Delete movie
4. Update movie
5. Stats
6. Random movie
7. Search movie
8. Movies sorted by rating
9. Rating histogram
";

/// Outcome of one menu action
enum Step {
    /// Text to show; nothing changed
    Show(String),
    /// The collection changed and must be saved
    Changed(String),
    /// The user's input was rejected
    Rejected(MovieError),
    /// Input ended while the action was prompting
    EndOfInput,
}

/// Run the menu loop until the user quits or input ends
///
/// Every successful change is saved to `path` straight away.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    collection: &mut MovieCollection,
    path: &Path,
) -> Result<()> {
    loop {
        // Clear from cursor down, then redraw
        writeln!(output, "\x1b[J{}", MENU)?;

        let Some(choice) = prompt(input, output, "Enter choice 0-9: ")? else {
            break;
        };
        if matches!(choice.as_str(), "0" | "q" | "quit") {
            break;
        }

        match dispatch(&choice, input, output, collection)? {
            Step::Show(text) => writeln!(output, "{}", text)?,
            Step::Changed(message) => {
                storage::save(path, collection)?;
                writeln!(output, "{}", message.green())?;
            }
            Step::Rejected(err) => writeln!(output, "{} {}", "Error:".red().bold(), err.red())?,
            Step::EndOfInput => break,
        }

        if prompt(input, output, "Press Enter to continue")?.is_none() {
            break;
        }
    }

    writeln!(output)?;
    Ok(())
}

/// Ask for a value; `None` means input ended
macro_rules! ask {
    ($input:expr, $output:expr, $label:expr) => {
        match prompt($input, $output, $label)? {
            Some(value) => value,
            None => return Ok(Step::EndOfInput),
        }
    };
}

fn dispatch<R: BufRead, W: Write>(
    choice: &str,
    input: &mut R,
    output: &mut W,
    collection: &mut MovieCollection,
) -> Result<Step> {
    let step = match choice {
        "1" => Step::Show(commands::list::execute(collection, &ListOptions::default())?),
        "2" => {
            let title = ask!(input, output, "Movie title: ");
            let rating = ask!(input, output, "Movie rating: ");
            let year = ask!(input, output, "Release year (optional): ");
            changed(commands::edit::add(collection, &title, &rating, Some(&year)))
        }
        "3" => {
            let title = ask!(input, output, "Movie title: ");
            changed(commands::edit::delete(collection, &title))
        }
        "4" => {
            let title = match movie::validate_title(&ask!(input, output, "Movie title: ")) {
                Ok(title) => title,
                Err(err) => return Ok(Step::Rejected(err)),
            };
            if !collection.contains(&title) {
                return Ok(Step::Rejected(MovieError::NotFound(title)));
            }
            let rating = ask!(input, output, "New rating (blank to keep): ");
            let year = ask!(input, output, "New release year (blank to keep): ");
            changed(commands::edit::update(
                collection,
                &title,
                Some(&rating),
                Some(&year),
            ))
        }
        "5" => shown(commands::stats::execute(collection)),
        "6" => shown(commands::search::random(collection, &mut rand::rng())),
        "7" => {
            let query = ask!(input, output, "Search: ");
            Step::Show(commands::search::execute(collection, &query))
        }
        "8" => Step::Show(commands::list::ranked(collection)),
        "9" => shown(commands::stats::histogram(collection)),
        other => {
            tracing::debug!(choice = other, "invalid menu choice");
            Step::Show(format!("{} Invalid input: {:?}", "Error:".red().bold(), other))
        }
    };
    Ok(step)
}

fn shown(result: Result<String, MovieError>) -> Step {
    match result {
        Ok(text) => Step::Show(text),
        Err(err) => Step::Rejected(err),
    }
}

fn changed(result: Result<String, MovieError>) -> Step {
    match result {
        Ok(message) => Step::Changed(message),
        Err(err) => Step::Rejected(err),
    }
}
