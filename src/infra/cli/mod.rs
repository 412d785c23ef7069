//! CLI infrastructure for Bookshelf.
//!
//! The interactive menu loop and the text renderers the shell shares
//! with the one-shot subcommands.

use chrono::Datelike;

pub mod menu;
pub mod render;

/// Current calendar year, the upper bound the search form accepts for
/// its year filter.
pub fn current_year() -> u16 {
    u16::try_from(chrono::Local::now().year()).unwrap_or(crate::domain::MAX_YEAR)
}
