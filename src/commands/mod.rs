//! Shell-facing actions.
//!
//! Each action runs one full load → operate → persist cycle against the
//! library document and hands plain values back for rendering. The
//! in-memory library never outlives an action.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::catalog;
use crate::domain::{Book, Library, LibraryStats, TitleCount, YearFilter};
use crate::infra::store;

fn load(path: &Path) -> Result<Library> {
    store::load(path)
        .with_context(|| format!("Failed to load library from {}", path.display()))
}

fn save(path: &Path, library: &Library) -> Result<()> {
    store::save(path, library)
        .with_context(|| format!("Failed to save library to {}", path.display()))
}

/// Append a validated record and persist.
pub fn add_book(path: &Path, book: Book) -> Result<()> {
    let library = load(path)?;
    let library = catalog::add(library, book);
    save(path, &library)
}

/// Remove all case-insensitive title matches and persist. Returns how
/// many records were removed; 0 means the title was not found.
pub fn remove_books(path: &Path, title: &str) -> Result<usize> {
    let library = load(path)?;
    let (library, removed) = catalog::remove(library, title);
    save(path, &library)?;
    if removed == 0 {
        log::warn!("no record titled '{title}' in {}", path.display());
    }
    Ok(removed)
}

/// Query the catalog. Read-only; nothing is persisted.
pub fn search_books(path: &Path, query: &str, year: YearFilter) -> Result<Vec<Book>> {
    let library = load(path)?;
    Ok(catalog::search(&library, query, year))
}

/// The full ordered library. Read-only.
pub fn list_books(path: &Path) -> Result<Library> {
    load(path)
}

/// Aggregate counters plus the per-title distribution. Read-only.
pub fn library_report(path: &Path) -> Result<(LibraryStats, Vec<TitleCount>)> {
    let library = load(path)?;
    Ok((
        catalog::statistics(&library),
        catalog::title_distribution(&library),
    ))
}
