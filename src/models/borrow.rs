//! Borrow record (loan) model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::{BookId, MemberId, RecordId};

/// Stored state of a borrow record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorrowStatus {
    Borrowed,
    Returned,
    Overdue,
}

impl BorrowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorrowStatus::Borrowed => "borrowed",
            BorrowStatus::Returned => "returned",
            BorrowStatus::Overdue => "overdue",
        }
    }
}

impl std::fmt::Display for BorrowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One borrow of one book by one member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowRecord {
    pub id: RecordId,
    pub book_id: BookId,
    pub member_id: MemberId,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub status: BorrowStatus,
    pub fine: Option<Decimal>,
}

impl BorrowRecord {
    pub fn new(
        book_id: BookId,
        member_id: MemberId,
        borrow_date: NaiveDate,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: RecordId::generate(),
            book_id,
            member_id,
            borrow_date,
            due_date,
            return_date: None,
            status: BorrowStatus::Borrowed,
            fine: None,
        }
    }

    /// Not yet returned
    pub fn is_active(&self) -> bool {
        self.status != BorrowStatus::Returned
    }

    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        self.effective_status(today) == BorrowStatus::Overdue
    }

    /// Status as seen on `today`: a borrowed record past its due date reads as
    /// overdue without anything rewriting the stored status.
    pub fn effective_status(&self, today: NaiveDate) -> BorrowStatus {
        match self.status {
            BorrowStatus::Borrowed if self.due_date < today => BorrowStatus::Overdue,
            status => status,
        }
    }
}
