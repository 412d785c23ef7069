//! Text rendering for shell output.
//!
//! Records are shown as the same pretty JSON the store writes, so what
//! the user sees is what the document holds.

use crate::domain::{
    Book, LibraryStats, TitleCount, ValidationError, MAX_YEAR, MIN_YEAR,
};

const BAR_WIDTH: usize = 40;

pub fn render_book(book: &Book) -> String {
    serde_json::to_string_pretty(book).unwrap_or_else(|_| format!("{book:?}"))
}

/// Numbered dump of the whole library, one record per block.
pub fn render_book_list(library: &[Book]) -> String {
    let mut out = String::new();
    for (idx, book) in library.iter().enumerate() {
        out.push_str(&format!("Book {}:\n{}\n", idx + 1, render_book(book)));
    }
    out
}

pub fn render_search_results(results: &[Book]) -> String {
    if results.is_empty() {
        return "No matching books found.".to_string();
    }
    let mut out = format!("Found {} result(s):\n", results.len());
    for book in results {
        out.push_str(&render_book(book));
        out.push('\n');
    }
    out
}

pub fn render_stats(stats: &LibraryStats) -> String {
    format!(
        "Total Books: {}\nBooks Read: {}\nBooks Unread: {}\nRead %: {:.2}%",
        stats.total, stats.read, stats.unread, stats.read_percent
    )
}

/// Proportion-by-title breakdown: one percentage bar per distinct
/// title, most frequent first.
pub fn render_title_breakdown(distribution: &[TitleCount], total: usize) -> String {
    if total == 0 {
        return String::new();
    }
    let label_width = distribution
        .iter()
        .map(|entry| entry.title.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::from("Book Distribution by Title\n");
    for entry in distribution {
        let percent = entry.count as f64 / total as f64 * 100.0;
        out.push_str(&format!(
            "  {:<label_width$}  {} {:.1}%\n",
            entry.title,
            bar(percent / 100.0),
            percent
        ));
    }
    out
}

/// Read-vs-unread count breakdown.
pub fn render_read_breakdown(stats: &LibraryStats) -> String {
    if stats.total == 0 {
        return String::new();
    }
    let mut out = String::from("Read vs Unread\n");
    for (label, count) in [("Read", stats.read), ("Unread", stats.unread)] {
        out.push_str(&format!(
            "  {label:<6}  {} {count}\n",
            bar(count as f64 / stats.total as f64)
        ));
    }
    out
}

/// User-facing message for a rejected record, matching the tone of the
/// per-action outcome messages.
pub fn validation_message(err: &ValidationError) -> String {
    match err {
        ValidationError::MissingField(_) => "Please fill in all the fields.".to_string(),
        ValidationError::YearOutOfRange(year) => format!(
            "Publication year must be between {MIN_YEAR} and {MAX_YEAR} (got {year})."
        ),
    }
}

fn bar(fraction: f64) -> String {
    let len = (fraction * BAR_WIDTH as f64).round() as usize;
    "#".repeat(len.min(BAR_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::catalog;

    fn library() -> Vec<Book> {
        vec![
            Book {
                title: "Dune".to_string(),
                author: "Herbert".to_string(),
                year: 1965,
                genre: "SciFi".to_string(),
                read: true,
            },
            Book {
                title: "Solaris".to_string(),
                author: "Lem".to_string(),
                year: 1961,
                genre: "SciFi".to_string(),
                read: false,
            },
        ]
    }

    #[test]
    fn test_book_list_is_numbered() {
        let out = render_book_list(&library());
        assert!(out.contains("Book 1:"));
        assert!(out.contains("Book 2:"));
        assert!(out.contains("\"Title\": \"Solaris\""));
    }

    #[test]
    fn test_stats_percent_has_two_decimals() {
        let stats = catalog::statistics(&library());
        assert!(render_stats(&stats).contains("Read %: 50.00%"));
    }

    #[test]
    fn test_breakdowns_cover_every_row() {
        let books = library();
        let stats = catalog::statistics(&books);
        let distribution = catalog::title_distribution(&books);

        let titles = render_title_breakdown(&distribution, stats.total);
        assert!(titles.contains("Dune"));
        assert!(titles.contains("50.0%"));

        let read = render_read_breakdown(&stats);
        assert!(read.contains("Read"));
        assert!(read.contains("Unread"));
    }

    #[test]
    fn test_empty_library_renders_no_breakdowns() {
        assert!(render_title_breakdown(&[], 0).is_empty());
        assert!(render_read_breakdown(&LibraryStats::default()).is_empty());
    }
}
