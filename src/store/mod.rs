//! In-memory library store
//!
//! [`LibraryStore`] is the single owner of the book, member and borrow record
//! collections and of the activity log. All writes go through its methods,
//! which run every precondition check before touching any collection: a call
//! that returns `Err` leaves the store exactly as it found it.
//!
//! Statistics are never cached; [`LibraryStore::stats`] derives them from the
//! collections on each call.

mod activity;
mod books;
mod loans;
mod members;
mod query;
mod stats;

pub use query::{BookQuery, RecordQuery};

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;

use crate::{
    clock::{Clock, SystemClock},
    config::LibraryConfig,
    error::{AppError, AppResult, Entity},
    models::{
        Activity, Book, BookId, BorrowRecord, LibrarySnapshot, Member, MemberId, RecordId,
    },
    seed,
};

pub struct LibraryStore {
    settings: LibraryConfig,
    clock: Arc<dyn Clock>,
    books: IndexMap<BookId, Book>,
    members: IndexMap<MemberId, Member>,
    records: IndexMap<RecordId, BorrowRecord>,
    /// Oldest first
    activities: Vec<Activity>,
}

impl LibraryStore {
    /// Create an empty store on the system clock
    pub fn new(settings: LibraryConfig) -> Self {
        Self::with_clock(settings, Arc::new(SystemClock))
    }

    pub fn with_clock(settings: LibraryConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            settings,
            clock,
            books: IndexMap::new(),
            members: IndexMap::new(),
            records: IndexMap::new(),
            activities: Vec::new(),
        }
    }

    /// Create a store holding the sample catalog
    pub fn seeded(settings: LibraryConfig) -> Self {
        Self::seeded_with_clock(settings, Arc::new(SystemClock))
    }

    pub fn seeded_with_clock(settings: LibraryConfig, clock: Arc<dyn Clock>) -> Self {
        let mut store = Self::with_clock(settings, clock);
        store.books = seed::books()
            .into_iter()
            .map(|b| (b.id.clone(), b))
            .collect();
        store.members = seed::members()
            .into_iter()
            .map(|m| (m.id.clone(), m))
            .collect();
        store.records = seed::borrow_records()
            .into_iter()
            .map(|r| (r.id.clone(), r))
            .collect();
        store.activities = seed::activities();

        tracing::info!(
            "Seeded library with {} books, {} members and {} borrow records",
            store.books.len(),
            store.members.len(),
            store.records.len()
        );
        store
    }

    /// Seeded or empty, as the settings ask
    pub fn from_settings(settings: LibraryConfig) -> Self {
        if settings.seed_sample_data {
            Self::seeded(settings)
        } else {
            Self::new(settings)
        }
    }

    pub fn settings(&self) -> &LibraryConfig {
        &self.settings
    }

    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    pub fn records(&self) -> impl Iterator<Item = &BorrowRecord> {
        self.records.values()
    }

    /// Activity log, oldest first
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn book(&self, id: &BookId) -> Option<&Book> {
        self.books.get(id)
    }

    pub fn member(&self, id: &MemberId) -> Option<&Member> {
        self.members.get(id)
    }

    pub fn record(&self, id: &RecordId) -> Option<&BorrowRecord> {
        self.records.get(id)
    }

    /// Copy of every collection plus current stats
    pub fn snapshot(&self) -> LibrarySnapshot {
        LibrarySnapshot {
            books: self.books.values().cloned().collect(),
            members: self.members.values().cloned().collect(),
            borrow_records: self.records.values().cloned().collect(),
            stats: self.stats(),
        }
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub(crate) fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    fn get_book(&self, id: &BookId) -> AppResult<&Book> {
        self.books
            .get(id)
            .ok_or_else(|| AppError::not_found(Entity::Book, id))
    }

    fn get_member(&self, id: &MemberId) -> AppResult<&Member> {
        self.members
            .get(id)
            .ok_or_else(|| AppError::not_found(Entity::Member, id))
    }

    fn get_record(&self, id: &RecordId) -> AppResult<&BorrowRecord> {
        self.records
            .get(id)
            .ok_or_else(|| AppError::not_found(Entity::BorrowRecord, id))
    }
}
