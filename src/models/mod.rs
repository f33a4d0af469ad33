//! Data models for Library Desk

pub mod activity;
pub mod book;
pub mod borrow;
pub mod ids;
pub mod member;
pub mod stats;

// Re-export commonly used types
pub use activity::{Activity, ActivityType};
pub use book::{Book, NewBook, UpdateBook};
pub use borrow::{BorrowRecord, BorrowStatus};
pub use ids::{ActivityId, BookId, MemberId, RecordId};
pub use member::{Member, MemberStatus, NewMember, UpdateMember};
pub use stats::{LibrarySnapshot, LibraryStats};
