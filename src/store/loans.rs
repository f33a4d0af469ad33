//! Borrow and return operations on LibraryStore

use super::LibraryStore;
use crate::{
    error::{AppError, AppResult, Entity},
    models::{ActivityType, BookId, BorrowRecord, BorrowStatus, MemberId, RecordId},
};

impl LibraryStore {
    /// Lend one copy of a book to a member.
    ///
    /// The book must have a copy on the shelf and the member must be active.
    /// The due date is today plus the configured loan period.
    pub fn borrow_book(
        &mut self,
        book_id: &BookId,
        member_id: &MemberId,
    ) -> AppResult<BorrowRecord> {
        let book = self.get_book(book_id)?;
        if !book.is_available() {
            tracing::warn!("Borrow refused: book {} has no available copies", book_id);
            return Err(AppError::BookUnavailable(book_id.clone()));
        }

        let member = self.get_member(member_id)?;
        if !member.is_active() {
            tracing::warn!("Borrow refused: member {} is {}", member_id, member.status);
            return Err(AppError::MemberNotActive {
                id: member_id.to_string(),
                status: member.status,
            });
        }

        let title = book.title.clone();
        let member_name = member.name.clone();

        let borrow_date = self.today();
        let due_date = borrow_date
            .checked_add_days(self.settings.loan_period())
            .ok_or_else(|| {
                AppError::InvariantViolation(format!(
                    "due date out of range for loan starting {}",
                    borrow_date
                ))
            })?;

        let record = BorrowRecord::new(book_id.clone(), member_id.clone(), borrow_date, due_date);

        if let Some(book) = self.books.get_mut(book_id) {
            book.available_copies -= 1;
        }
        if let Some(member) = self.members.get_mut(member_id) {
            member.borrowed_books += 1;
        }
        self.records.insert(record.id.clone(), record.clone());

        self.record_activity(
            ActivityType::Borrow,
            format!("{} borrowed \"{}\"", member_name, title),
            member_name.clone(),
        );
        tracing::info!(
            "Book {} lent to member {} (record {}, due {})",
            book_id,
            member_id,
            record.id,
            record.due_date
        );

        Ok(record)
    }

    /// Close an active borrow: the copy goes back on the shelf.
    ///
    /// Both the book and the member of the record must still exist, and the
    /// record must not have been returned already.
    pub fn return_book(&mut self, record_id: &RecordId) -> AppResult<BorrowRecord> {
        let record = self.get_record(record_id)?;
        if !record.is_active() {
            tracing::warn!("Return refused: record {} already returned", record_id);
            return Err(AppError::AlreadyReturned(record_id.clone()));
        }

        let book = self.get_book(&record.book_id)?;
        let member = self.get_member(&record.member_id)?;
        if book.available_copies >= book.total_copies {
            return Err(AppError::InvariantViolation(format!(
                "book {} already has all {} copies on the shelf",
                book.id, book.total_copies
            )));
        }

        let book_id = book.id.clone();
        let member_id = member.id.clone();
        let title = book.title.clone();
        let member_name = member.name.clone();
        let today = self.today();

        if let Some(book) = self.books.get_mut(&book_id) {
            book.available_copies += 1;
        }
        if let Some(member) = self.members.get_mut(&member_id) {
            member.borrowed_books = member.borrowed_books.saturating_sub(1);
        }
        let record = match self.records.get_mut(record_id) {
            Some(record) => {
                record.status = BorrowStatus::Returned;
                record.return_date = Some(today);
                record.clone()
            }
            None => return Err(AppError::not_found(Entity::BorrowRecord, record_id)),
        };

        self.record_activity(
            ActivityType::Return,
            format!("{} returned \"{}\"", member_name, title),
            member_name.clone(),
        );
        tracing::info!(
            "Record {} returned: book {} back from member {}",
            record_id,
            book_id,
            member_id
        );

        Ok(record)
    }
}
