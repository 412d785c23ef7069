use serde::Serialize;

/// Aggregate counters over a library.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LibraryStats {
    /// Number of records in the library.
    pub total: usize,
    /// Records marked as read.
    pub read: usize,
    /// Records not marked as read.
    pub unread: usize,
    /// `read / total * 100`, `0.0` for an empty library.
    pub read_percent: f64,
}

/// Frequency of one title, for the distribution breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleCount {
    pub title: String,
    pub count: usize,
}
