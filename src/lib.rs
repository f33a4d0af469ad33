//! Library Desk
//!
//! The in-memory core of a library administration dashboard: book inventory,
//! member roster and borrow/return transactions, with summary statistics
//! derived from them on demand.

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod store;

pub use config::{AppConfig, LibraryConfig};
pub use error::{AppError, AppResult};
pub use store::LibraryStore;
