//! Book inventory operations on LibraryStore

use validator::Validate;

use super::LibraryStore;
use crate::{
    error::{AppError, AppResult, Entity},
    models::{book::check_copies, ActivityType, Book, BookId, NewBook, UpdateBook},
};

impl LibraryStore {
    /// Add a book to the catalog. The store assigns the id and added date.
    pub fn add_book(&mut self, data: NewBook) -> AppResult<Book> {
        data.validate()?;
        check_copies(data.available_copies, data.total_copies)?;

        let book = Book {
            id: BookId::generate(),
            title: data.title,
            author: data.author,
            isbn: data.isbn,
            category: data.category,
            published_year: data.published_year,
            description: data.description,
            cover_url: data.cover_url.filter(|url| !url.is_empty()),
            total_copies: data.total_copies,
            available_copies: data.available_copies,
            added_date: self.today(),
        };
        self.books.insert(book.id.clone(), book.clone());

        let actor = self.settings.librarian_name.clone();
        self.record_activity(
            ActivityType::AddBook,
            format!("Added new book \"{}\"", book.title),
            actor,
        );
        tracing::info!("Added book {} \"{}\" ({} copies)", book.id, book.title, book.total_copies);

        Ok(book)
    }

    /// Merge `data` into an existing book
    pub fn update_book(&mut self, id: &BookId, data: UpdateBook) -> AppResult<Book> {
        data.validate()?;
        let updated = self.get_book(id)?.merged(data)?;

        // Copies on loan cannot vanish from the shelf count
        let on_loan = self.active_borrow_count_for_book(id);
        if (updated.copies_on_loan() as usize) < on_loan {
            return Err(AppError::InvariantViolation(format!(
                "book {} has {} copies on loan but only {} unaccounted for",
                id,
                on_loan,
                updated.copies_on_loan()
            )));
        }

        self.books.insert(id.clone(), updated.clone());
        tracing::info!("Updated book {}", id);
        Ok(updated)
    }

    /// Remove a book. Books with copies still on loan are kept.
    pub fn delete_book(&mut self, id: &BookId) -> AppResult<Book> {
        self.get_book(id)?;

        let active = self.active_borrow_count_for_book(id);
        if active > 0 {
            tracing::warn!("Refusing to delete book {}: {} active borrow(s)", id, active);
            return Err(AppError::HasActiveBorrows {
                entity: Entity::Book,
                id: id.to_string(),
                count: active,
            });
        }

        let book = self
            .books
            .shift_remove(id)
            .ok_or_else(|| AppError::not_found(Entity::Book, id))?;
        tracing::info!("Deleted book {} \"{}\"", book.id, book.title);
        Ok(book)
    }

    pub(crate) fn active_borrow_count_for_book(&self, id: &BookId) -> usize {
        self.records
            .values()
            .filter(|r| r.is_active() && &r.book_id == id)
            .count()
    }
}
