//! Error types for Library Desk

use serde::Serialize;
use thiserror::Error;

use crate::models::{BookId, MemberStatus, RecordId};

/// Stable numeric codes handed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u32)]
pub enum ErrorCode {
    NoSuchBook = 2,
    NoSuchMember = 3,
    NoSuchRecord = 4,
    BookNotAvailable = 5,
    MemberNotActive = 6,
    AlreadyReturned = 7,
    HasActiveBorrows = 8,
    InvariantViolation = 9,
    BadValue = 10,
    ConfigFailure = 11,
}

/// Kind of entity an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Book,
    Member,
    BorrowRecord,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Entity::Book => "Book",
            Entity::Member => "Member",
            Entity::BorrowRecord => "Borrow record",
        };
        write!(f, "{}", label)
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{entity} {id} not found")]
    NotFound { entity: Entity, id: String },

    #[error("Book {0} has no available copies")]
    BookUnavailable(BookId),

    #[error("Member {id} is {status} and cannot borrow")]
    MemberNotActive { id: String, status: MemberStatus },

    #[error("Borrow record {0} has already been returned")]
    AlreadyReturned(RecordId),

    #[error("{entity} {id} has {count} active borrow(s)")]
    HasActiveBorrows {
        entity: Entity,
        id: String,
        count: usize,
    },

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Error body for the presentation layer
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl AppError {
    pub fn not_found(entity: Entity, id: impl std::fmt::Display) -> Self {
        AppError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound { entity, .. } => match entity {
                Entity::Book => ErrorCode::NoSuchBook,
                Entity::Member => ErrorCode::NoSuchMember,
                Entity::BorrowRecord => ErrorCode::NoSuchRecord,
            },
            AppError::BookUnavailable(_) => ErrorCode::BookNotAvailable,
            AppError::MemberNotActive { .. } => ErrorCode::MemberNotActive,
            AppError::AlreadyReturned(_) => ErrorCode::AlreadyReturned,
            AppError::HasActiveBorrows { .. } => ErrorCode::HasActiveBorrows,
            AppError::InvariantViolation(_) => ErrorCode::InvariantViolation,
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::Config(_) => ErrorCode::ConfigFailure,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        let code = self.code();
        match self {
            AppError::InvariantViolation(msg) => {
                tracing::error!("Invariant violation: {}", msg);
            }
            AppError::Config(e) => {
                tracing::error!("Configuration error: {:?}", e);
            }
            _ => {}
        }

        ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message: self.to_string(),
        }
    }
}

/// Result type alias for library operations
pub type AppResult<T> = Result<T, AppError>;
