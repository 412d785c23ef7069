//! Interactive menu shell.
//!
//! A numbered menu, one prompt per field, one store cycle per action.
//! Runs until Exit or EOF.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::commands;
use crate::domain::{Book, YearFilter};
use crate::infra::cli::{current_year, render};

const MENU: &str = "\
1) Add Book
2) Remove Book
3) Search Book
4) Display All Books
5) Display Statistics
6) Exit";

pub fn run(library_path: &Path) -> Result<()> {
    println!("Bookshelf — library document: {}", library_path.display());

    loop {
        println!("\n{MENU}");
        let Some(choice) = prompt("Choose an option")? else {
            break;
        };
        match choice.as_str() {
            "1" => add_flow(library_path)?,
            "2" => remove_flow(library_path)?,
            "3" => search_flow(library_path)?,
            "4" => list_flow(library_path)?,
            "5" => stats_flow(library_path)?,
            "6" => {
                println!("Thanks for using Bookshelf!");
                break;
            }
            other => println!("Unknown option: {other}"),
        }
    }
    Ok(())
}

fn add_flow(library_path: &Path) -> Result<()> {
    let Some(title) = prompt("Book title")? else {
        return Ok(());
    };
    let Some(author) = prompt("Author")? else {
        return Ok(());
    };
    let Some(year_input) = prompt("Publication year")? else {
        return Ok(());
    };
    let Some(genre) = prompt("Genre")? else {
        return Ok(());
    };
    let Some(read_input) = prompt("Already read? [y/N]")? else {
        return Ok(());
    };

    let Ok(year) = year_input.parse::<u16>() else {
        println!("Publication year must be a number.");
        return Ok(());
    };
    let read = matches!(read_input.to_lowercase().as_str(), "y" | "yes");

    let book = Book {
        title,
        author,
        year,
        genre,
        read,
    };
    if let Err(err) = book.validate() {
        log::warn!("rejected record: {err}");
        println!("{}", render::validation_message(&err));
        return Ok(());
    }

    let title = book.title.clone();
    commands::add_book(library_path, book)?;
    println!("Book '{title}' added!");
    Ok(())
}

fn remove_flow(library_path: &Path) -> Result<()> {
    let Some(title) = prompt("Title to remove")? else {
        return Ok(());
    };

    let removed = commands::remove_books(library_path, &title)?;
    if removed > 0 {
        println!("Book '{title}' removed.");
    } else {
        println!("Book not found.");
    }
    Ok(())
}

fn search_flow(library_path: &Path) -> Result<()> {
    let Some(query) = prompt("Title or author")? else {
        return Ok(());
    };
    let Some(year_input) = prompt("Filter by publication year (blank for none)")? else {
        return Ok(());
    };

    let year = if year_input.is_empty() {
        YearFilter::Any
    } else {
        let Ok(year) = year_input.parse::<u16>() else {
            println!("Year filter must be a number.");
            return Ok(());
        };
        if year > current_year() {
            println!("Year filter cannot be later than {}.", current_year());
            return Ok(());
        }
        YearFilter::from_form_value(year)
    };

    if query.is_empty() && !year.is_active() {
        println!("Enter a title, an author, or a year filter.");
        return Ok(());
    }

    let results = commands::search_books(library_path, &query, year)?;
    println!("{}", render::render_search_results(&results));
    Ok(())
}

fn list_flow(library_path: &Path) -> Result<()> {
    let library = commands::list_books(library_path)?;
    if library.is_empty() {
        println!("No books found. Start adding some!");
    } else {
        print!("{}", render::render_book_list(&library));
    }
    Ok(())
}

fn stats_flow(library_path: &Path) -> Result<()> {
    let (stats, distribution) = commands::library_report(library_path)?;
    if stats.total == 0 {
        println!("No books to show statistics.");
        return Ok(());
    }
    println!("{}\n", render::render_stats(&stats));
    print!("{}", render::render_title_breakdown(&distribution, stats.total));
    println!();
    print!("{}", render::render_read_breakdown(&stats));
    Ok(())
}

/// One trimmed line from stdin. `None` on EOF.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let bytes = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if bytes == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
