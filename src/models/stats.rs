//! Derived dashboard views

use serde::Serialize;

use super::{activity::Activity, book::Book, borrow::BorrowRecord, member::Member};

/// Dashboard summary, always recomputed from the collections
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryStats {
    /// Sum of total copies over all books
    pub total_books: u64,
    pub total_members: usize,
    /// Records currently borrowed and not past due
    pub books_issued: usize,
    pub overdue_books: usize,
    /// Sum of available copies over all books
    pub available_books: u64,
    /// Newest first
    pub recent_activities: Vec<Activity>,
}

/// Full copy of the store's state for the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct LibrarySnapshot {
    pub books: Vec<Book>,
    pub members: Vec<Member>,
    pub borrow_records: Vec<BorrowRecord>,
    pub stats: LibraryStats,
}
