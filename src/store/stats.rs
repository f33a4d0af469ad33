//! Dashboard statistics

use chrono::NaiveDate;

use super::LibraryStore;
use crate::models::{BorrowStatus, LibraryStats};

impl LibraryStore {
    /// Statistics as of today
    pub fn stats(&self) -> LibraryStats {
        self.stats_on(self.today())
    }

    /// Statistics as of `today`. Borrowed records past their due date count
    /// as overdue rather than issued.
    pub fn stats_on(&self, today: NaiveDate) -> LibraryStats {
        let total_books = self.books.values().map(|b| u64::from(b.total_copies)).sum();
        let available_books = self
            .books
            .values()
            .map(|b| u64::from(b.available_copies))
            .sum();

        let (mut books_issued, mut overdue_books) = (0, 0);
        for record in self.records.values() {
            match record.effective_status(today) {
                BorrowStatus::Borrowed => books_issued += 1,
                BorrowStatus::Overdue => overdue_books += 1,
                BorrowStatus::Returned => {}
            }
        }

        tracing::debug!(
            "Computed stats on {}: {} issued, {} overdue",
            today,
            books_issued,
            overdue_books
        );

        LibraryStats {
            total_books,
            total_members: self.members.len(),
            books_issued,
            overdue_books,
            available_books,
            recent_activities: self.recent_activities(),
        }
    }
}
