//! movie-rank: keep track of the movies you have seen and how you rated them

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;
mod menu;

use movie_rank::config;
use movie_rank::library::{storage, MovieCollection};

#[derive(Parser)]
#[command(name = "movie-rank")]
#[command(about = "Track and rate the movies you have seen", long_about = None)]
#[command(version)]
struct Cli {
    /// Data file (defaults to $MOVIE_RANK_FILE, then the user data directory)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Run a single command; the interactive menu starts when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all movies
    List {
        /// Sort by: added, title, rating, year (default: added)
        #[arg(long, short, default_value = "added")]
        sort: String,

        /// Reverse sort order
        #[arg(long, short)]
        reverse: bool,

        /// Limit number of results
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Add a movie with its rating
    Add {
        /// Movie title
        title: String,

        /// Rating from 0 to 10
        rating: String,

        /// Release year
        #[arg(long, short)]
        year: Option<String>,
    },

    /// Delete a movie
    Delete {
        /// Movie title (case-insensitive)
        title: String,
    },

    /// Change the rating or release year of a movie
    Update {
        /// Movie title (case-insensitive)
        title: String,

        /// New rating from 0 to 10
        #[arg(long, short, required_unless_present = "year")]
        rating: Option<String>,

        /// New release year
        #[arg(long, short)]
        year: Option<String>,
    },

    /// Show average, median, best and worst ratings
    Stats,

    /// Show a random movie
    Random,

    /// Search movies by title, tolerating typos
    Search {
        /// Text to look for
        query: String,
    },

    /// List movies sorted by rating, best first
    Ranked,

    /// Draw a histogram of ratings
    Histogram,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let path = config::resolve_data_file(cli.file)?;
    tracing::debug!(path = %path.display(), "using data file");

    let mut collection = storage::load(&path)?;

    let Some(command) = cli.command else {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        return menu::run(&mut input, &mut output, &mut collection, &path);
    };

    match command {
        Commands::List {
            sort,
            reverse,
            limit,
        } => {
            let options = commands::list::ListOptions {
                sort,
                reverse,
                limit,
            };
            println!("{}", commands::list::execute(&collection, &options)?);
        }

        Commands::Add {
            title,
            rating,
            year,
        } => {
            let message =
                commands::edit::add(&mut collection, &title, &rating, year.as_deref())?;
            save_and_report(&path, &collection, &message)?;
        }

        Commands::Delete { title } => {
            let message = commands::edit::delete(&mut collection, &title)?;
            save_and_report(&path, &collection, &message)?;
        }

        Commands::Update {
            title,
            rating,
            year,
        } => {
            let message = commands::edit::update(
                &mut collection,
                &title,
                rating.as_deref(),
                year.as_deref(),
            )?;
            save_and_report(&path, &collection, &message)?;
        }

        Commands::Stats => {
            println!("{}", commands::stats::execute(&collection)?);
        }

        Commands::Random => {
            println!(
                "{}",
                commands::search::random(&collection, &mut rand::rng())?
            );
        }

        Commands::Search { query } => {
            println!("{}", commands::search::execute(&collection, &query));
        }

        Commands::Ranked => {
            println!("{}", commands::list::ranked(&collection));
        }

        Commands::Histogram => {
            println!("{}", commands::stats::histogram(&collection)?);
        }
    }

    Ok(())
}

fn save_and_report(path: &Path, collection: &MovieCollection, message: &str) -> Result<()> {
    storage::save(path, collection)
        .with_context(|| format!("Failed to save movies to {}", path.display()))?;
    println!("{}", message.green());
    Ok(())
}
