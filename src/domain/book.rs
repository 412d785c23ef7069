use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Earliest accepted publication year. Doubles as the "no filter"
/// sentinel on the search form: a year filter at or below this value
/// means no year constraint.
pub const MIN_YEAR: u16 = 1900;

/// Latest accepted publication year.
pub const MAX_YEAR: u16 = 2100;

/// The full ordered collection of book records. Insertion order is
/// preserved and duplicate titles are allowed.
pub type Library = Vec<Book>;

/// One catalog entry.
///
/// Serialized field names are PascalCase to stay drop-in compatible
/// with documents produced by earlier versions of the tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Publication year, within `MIN_YEAR..=MAX_YEAR`.
    pub year: u16,
    pub genre: String,
    /// Whether the book has been read. Absent in older documents.
    #[serde(default)]
    pub read: bool,
}

impl Book {
    /// Check the boundary rules for a user-supplied record: all text
    /// fields non-empty, year in range. Callers run this before handing
    /// the record to the catalog; the catalog appends what it is given.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("Title"));
        }
        if self.author.trim().is_empty() {
            return Err(ValidationError::MissingField("Author"));
        }
        if self.genre.trim().is_empty() {
            return Err(ValidationError::MissingField("Genre"));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(ValidationError::YearOutOfRange(self.year));
        }
        Ok(())
    }

    /// Case-insensitive whole-title match, used by removal.
    pub fn title_matches(&self, query: &str) -> bool {
        self.title.to_lowercase() == query.to_lowercase()
    }
}

/// Year constraint for catalog searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearFilter {
    /// No year constraint.
    #[default]
    Any,
    /// Publication year must equal this value exactly.
    Exact(u16),
}

impl YearFilter {
    /// Interpret a raw form value: anything at or below `MIN_YEAR` is
    /// the "no filter" sentinel.
    pub fn from_form_value(year: u16) -> Self {
        if year > MIN_YEAR {
            Self::Exact(year)
        } else {
            Self::Any
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Exact(_))
    }

    pub fn matches(&self, year: u16) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(wanted) => year == *wanted,
        }
    }
}
