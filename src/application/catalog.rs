//! Catalog operations over an in-memory library.
//!
//! Every operation is a pure function of its inputs: the library value
//! goes in, the updated value comes out. Persistence is the caller's
//! concern (see `infra::store`).

use std::collections::HashMap;

use crate::domain::{Book, Library, LibraryStats, TitleCount, YearFilter};

/// Append a record. No deduplication; duplicate titles are allowed.
/// Boundary validation happens before this call (see `Book::validate`).
pub fn add(mut library: Library, book: Book) -> Library {
    library.push(book);
    library
}

/// Remove every record whose title equals `title_query`
/// case-insensitively. Returns the filtered library and the number of
/// records removed; 0 means nothing matched.
pub fn remove(library: Library, title_query: &str) -> (Library, usize) {
    let before = library.len();
    let kept: Library = library
        .into_iter()
        .filter(|book| !book.title_matches(title_query))
        .collect();
    let removed = before - kept.len();
    (kept, removed)
}

/// Find records whose title or author contains `text_query`
/// (case-insensitive substring) and whose year passes `year`.
///
/// An empty query with no active year filter returns nothing — no
/// query, no search.
pub fn search(library: &[Book], text_query: &str, year: YearFilter) -> Vec<Book> {
    if text_query.is_empty() && !year.is_active() {
        return Vec::new();
    }

    let needle = text_query.to_lowercase();
    library
        .iter()
        .filter(|book| {
            (book.title.to_lowercase().contains(&needle)
                || book.author.to_lowercase().contains(&needle))
                && year.matches(book.year)
        })
        .cloned()
        .collect()
}

/// Aggregate counters over the library. An empty library yields all
/// zeros rather than a division fault.
pub fn statistics(library: &[Book]) -> LibraryStats {
    let total = library.len();
    let read = library.iter().filter(|book| book.read).count();
    let unread = total - read;
    let read_percent = if total == 0 {
        0.0
    } else {
        read as f64 / total as f64 * 100.0
    };

    LibraryStats {
        total,
        read,
        unread,
        read_percent,
    }
}

/// Per-title frequency counts for the distribution breakdown, most
/// frequent first, ties broken by title.
pub fn title_distribution(library: &[Book]) -> Vec<TitleCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for book in library {
        *counts.entry(book.title.as_str()).or_default() += 1;
    }

    let mut distribution: Vec<TitleCount> = counts
        .into_iter()
        .map(|(title, count)| TitleCount {
            title: title.to_string(),
            count,
        })
        .collect();
    distribution.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.title.cmp(&b.title)));
    distribution
}
