//! Book model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::ids::BookId;
use crate::error::{AppError, AppResult};

/// Catalog entry with its inventory counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    pub published_year: i32,
    pub description: String,
    pub cover_url: Option<String>,
    /// Copies owned by the library
    pub total_copies: u32,
    /// Copies currently on the shelf
    pub available_copies: u32,
    pub added_date: NaiveDate,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    /// Copies currently out on loan
    pub fn copies_on_loan(&self) -> u32 {
        self.total_copies.saturating_sub(self.available_copies)
    }

    /// Check `available_copies <= total_copies`
    pub fn check_copies(&self) -> AppResult<()> {
        check_copies(self.available_copies, self.total_copies)
    }

    fn apply(&mut self, data: UpdateBook) {
        macro_rules! merge {
            ($($field:ident),*) => {
                $(
                    if let Some(value) = data.$field {
                        self.$field = value;
                    }
                )*
            };
        }

        merge!(
            title,
            author,
            isbn,
            category,
            published_year,
            description,
            total_copies,
            available_copies
        );
        if let Some(cover_url) = data.cover_url {
            self.cover_url = (!cover_url.is_empty()).then_some(cover_url);
        }
    }

    /// Return a copy of this book with `data` merged in, rejecting the result
    /// if it breaks the copy counters
    pub fn merged(&self, data: UpdateBook) -> AppResult<Book> {
        let mut updated = self.clone();
        updated.apply(data);
        updated.check_copies()?;
        Ok(updated)
    }
}

pub(crate) fn check_copies(available: u32, total: u32) -> AppResult<()> {
    if available > total {
        return Err(AppError::InvariantViolation(format!(
            "available copies ({}) exceed total copies ({})",
            available, total
        )));
    }
    Ok(())
}

/// Add book request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewBook {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    pub isbn: String,
    pub category: String,
    pub published_year: i32,
    #[serde(default)]
    pub description: String,
    pub cover_url: Option<String>,
    pub total_copies: u32,
    /// Callers normally pass `total_copies` here
    pub available_copies: u32,
}

impl NewBook {
    /// Minimal request with every copy on the shelf
    pub fn new(title: impl Into<String>, author: impl Into<String>, copies: u32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            total_copies: copies,
            available_copies: copies,
            ..Default::default()
        }
    }
}

/// Update book request. An empty `cover_url` clears the cover.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBook {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Author cannot be empty"))]
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub category: Option<String>,
    pub published_year: Option<i32>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub total_copies: Option<u32>,
    pub available_copies: Option<u32>,
}
