//! Read-side lookups used by the catalog, roster and transaction screens

use serde::Deserialize;

use super::LibraryStore;
use crate::models::{Book, BookId, BorrowRecord, Member, MemberId};

/// Catalog search filters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookQuery {
    /// Matches title or author (case-insensitive) or ISBN
    pub text: Option<String>,
    /// Exact category
    pub category: Option<String>,
}

/// Transaction history filters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordQuery {
    /// Matches the book's title or author or the member's name
    pub text: Option<String>,
    /// Only records that are not yet returned
    #[serde(default)]
    pub active_only: bool,
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Lowercased search text, or None when there is nothing to match on
fn normalize(text: &Option<String>) -> Option<String> {
    text.as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

impl LibraryStore {
    pub fn search_books(&self, query: &BookQuery) -> Vec<&Book> {
        let text = normalize(&query.text);
        self.books
            .values()
            .filter(|book| match &text {
                Some(t) => {
                    contains_ci(&book.title, t)
                        || contains_ci(&book.author, t)
                        || book.isbn.contains(t.as_str())
                }
                None => true,
            })
            .filter(|book| match &query.category {
                Some(category) if !category.is_empty() => &book.category == category,
                _ => true,
            })
            .collect()
    }

    /// Distinct categories in catalog order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for book in self.books.values() {
            if !seen.contains(&book.category.as_str()) {
                seen.push(&book.category);
            }
        }
        seen
    }

    pub fn search_members(&self, text: &str) -> Vec<&Member> {
        let Some(t) = normalize(&Some(text.to_string())) else {
            return self.members.values().collect();
        };
        self.members
            .values()
            .filter(|m| {
                contains_ci(&m.name, &t)
                    || contains_ci(&m.email, &t)
                    || m.phone.contains(t.as_str())
            })
            .collect()
    }

    /// Records whose book or member matches. Records pointing at a deleted
    /// book or member can only match through the side that still exists.
    pub fn search_records(&self, query: &RecordQuery) -> Vec<&BorrowRecord> {
        let text = normalize(&query.text);
        self.records
            .values()
            .filter(|r| !query.active_only || r.is_active())
            .filter(|r| match &text {
                Some(t) => {
                    let book_matches = self
                        .books
                        .get(&r.book_id)
                        .is_some_and(|b| contains_ci(&b.title, t) || contains_ci(&b.author, t));
                    let member_matches = self
                        .members
                        .get(&r.member_id)
                        .is_some_and(|m| contains_ci(&m.name, t));
                    book_matches || member_matches
                }
                None => true,
            })
            .collect()
    }

    /// Records not yet returned
    pub fn active_borrows(&self) -> Vec<&BorrowRecord> {
        self.records.values().filter(|r| r.is_active()).collect()
    }

    /// Books with at least one copy on the shelf
    pub fn borrowable_books(&self) -> Vec<&Book> {
        self.books.values().filter(|b| b.is_available()).collect()
    }

    /// Members allowed to borrow
    pub fn active_members(&self) -> Vec<&Member> {
        self.members.values().filter(|m| m.is_active()).collect()
    }

    pub fn member_records(&self, member_id: &MemberId) -> Vec<&BorrowRecord> {
        self.records
            .values()
            .filter(|r| &r.member_id == member_id)
            .collect()
    }

    /// Every borrow of a book, returned ones included
    pub fn book_history(&self, book_id: &BookId) -> Vec<&BorrowRecord> {
        self.records
            .values()
            .filter(|r| &r.book_id == book_id)
            .collect()
    }
}
