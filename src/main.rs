//! Bookshelf CLI entry point.
//!
//! Subcommands cover scripted use; with no subcommand on a terminal the
//! interactive menu runs instead.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand};

use bookshelf::commands;
use bookshelf::domain::{Book, YearFilter};
use bookshelf::infra::app_config;
use bookshelf::infra::cli::{current_year, menu, render};

#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version)]
#[command(about = "Manage a personal book catalog", long_about = None)]
struct Args {
    /// Library document to operate on (overrides config and environment)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a book to the catalog
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        /// Publication year (1900-2100)
        #[arg(long)]
        year: u16,

        #[arg(long)]
        genre: String,

        /// Mark the book as already read
        #[arg(long)]
        read: bool,
    },

    /// Remove every book with a matching title (case-insensitive)
    Remove {
        /// Title of the book(s) to remove
        title: String,
    },

    /// Search by title/author substring, optionally filtered by year
    Search {
        /// Text to look for in titles and authors
        #[arg(default_value = "")]
        query: String,

        /// Only match books published in this exact year
        #[arg(long)]
        year: Option<u16>,
    },

    /// List all books in the catalog
    List,

    /// Show aggregate statistics
    Stats,

    /// Show or set the default library location
    Config {
        /// Persist this path as the default library document
        #[arg(long)]
        library: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let library_path = app_config::resolve_library_path(args.file);

    match args.command {
        Some(Commands::Add {
            title,
            author,
            year,
            genre,
            read,
        }) => {
            let book = Book {
                title,
                author,
                year,
                genre,
                read,
            };
            if let Err(err) = book.validate() {
                bail!("{}", render::validation_message(&err));
            }
            let title = book.title.clone();
            commands::add_book(&library_path, book)?;
            println!("Book '{title}' added!");
        }

        Some(Commands::Remove { title }) => {
            let removed = commands::remove_books(&library_path, &title)?;
            if removed > 0 {
                println!("Book '{title}' removed.");
            } else {
                println!("Book not found.");
            }
        }

        Some(Commands::Search { query, year }) => {
            let year = match year {
                Some(year) if year > current_year() => {
                    bail!("Year filter cannot be later than {}.", current_year());
                }
                Some(year) => YearFilter::from_form_value(year),
                None => YearFilter::Any,
            };
            if query.is_empty() && !year.is_active() {
                println!("Enter a search query or a year filter.");
                return Ok(());
            }
            let results = commands::search_books(&library_path, &query, year)?;
            println!("{}", render::render_search_results(&results));
        }

        Some(Commands::List) => {
            let library = commands::list_books(&library_path)?;
            if library.is_empty() {
                println!("No books found. Start adding some!");
            } else {
                print!("{}", render::render_book_list(&library));
            }
        }

        Some(Commands::Stats) => {
            let (stats, distribution) = commands::library_report(&library_path)?;
            if stats.total == 0 {
                println!("No books to show statistics.");
                return Ok(());
            }
            println!("{}\n", render::render_stats(&stats));
            print!("{}", render::render_title_breakdown(&distribution, stats.total));
            println!();
            print!("{}", render::render_read_breakdown(&stats));
        }

        Some(Commands::Config { library }) => match library {
            Some(path) => {
                let mut config = app_config::load_config();
                config.library_path = Some(path.clone());
                app_config::save_config(&config)
                    .context("Failed to write config file")?;
                println!("Default library set to {}", path.display());
            }
            None => {
                println!("Library document: {}", library_path.display());
                println!("Config file: {}", app_config::config_path().display());
            }
        },

        None => {
            if std::io::stdin().is_terminal() {
                menu::run(&library_path)?;
            } else {
                Args::command().print_help()?;
            }
        }
    }

    Ok(())
}
