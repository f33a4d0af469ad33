//! End-to-end scenarios on a fresh or seeded library

use library_desk::{
    error::{AppError, ErrorCode},
    models::{ActivityType, BookId, MemberId, NewBook, NewMember, RecordId},
    LibraryConfig, LibraryStore,
};

fn empty() -> LibraryStore {
    LibraryStore::new(LibraryConfig::default())
}

#[test]
fn last_copy_goes_to_first_borrower() {
    let mut store = empty();
    let book = store.add_book(NewBook::new("Emma", "Jane Austen", 1)).unwrap();
    let first = store
        .add_member(NewMember::new("Alice Johnson", "alice@example.com"))
        .unwrap();
    let second = store
        .add_member(NewMember::new("Bob Smith", "bob@example.com"))
        .unwrap();

    assert!(store.borrow_book(&book.id, &first.id).is_ok());
    assert_eq!(store.book(&book.id).unwrap().available_copies, 0);

    let err = store.borrow_book(&book.id, &second.id).unwrap_err();
    assert!(matches!(err, AppError::BookUnavailable(_)));
    assert_eq!(store.book(&book.id).unwrap().available_copies, 0);
    assert_eq!(store.member(&second.id).unwrap().borrowed_books, 0);
}

#[test]
fn borrow_then_return_restores_counters() {
    let mut store = LibraryStore::seeded(LibraryConfig::default());
    let book_id = BookId::from("6");
    let member_id = MemberId::from("5");
    let book_before = store.book(&book_id).cloned().unwrap();
    let member_before = store.member(&member_id).cloned().unwrap();

    let record = store.borrow_book(&book_id, &member_id).unwrap();
    store.return_book(&record.id).unwrap();

    assert_eq!(store.book(&book_id), Some(&book_before));
    assert_eq!(store.member(&member_id), Some(&member_before));
}

#[test]
fn added_book_gets_fresh_id_and_full_shelf() {
    let mut store = LibraryStore::seeded(LibraryConfig::default());
    let existing: Vec<BookId> = store.books().map(|b| b.id.clone()).collect();

    let book = store
        .add_book(NewBook {
            isbn: "978-0-441-17271-9".to_string(),
            category: "Science Fiction".to_string(),
            published_year: 1965,
            ..NewBook::new("Dune", "Frank Herbert", 3)
        })
        .unwrap();

    assert_eq!(book.total_copies, 3);
    assert_eq!(book.available_copies, 3);
    assert!(!existing.contains(&book.id));
    assert_eq!(store.categories().last(), Some(&"Science Fiction"));
}

#[test]
fn member_with_outstanding_loan_cannot_be_deleted() {
    let mut store = LibraryStore::seeded(LibraryConfig::default());
    let bob = MemberId::from("2");

    let err = store.delete_member(&bob).unwrap_err();
    assert_eq!(err.code(), ErrorCode::HasActiveBorrows);
    assert!(store.member(&bob).is_some());

    store.return_book(&RecordId::from("2")).unwrap();
    store.delete_member(&bob).unwrap();

    // The closed record keeps pointing at the removed member
    let record = store.record(&RecordId::from("2")).unwrap();
    assert_eq!(record.member_id, bob);
    assert!(store.member(&record.member_id).is_none());
}

#[test]
fn returned_record_stays_closed_after_book_removal() {
    let mut store = LibraryStore::seeded(LibraryConfig::default());

    // Book 3 only has a returned record, so it may go
    store.delete_book(&BookId::from("3")).unwrap();
    let err = store.return_book(&RecordId::from("4")).unwrap_err();
    assert!(matches!(err, AppError::AlreadyReturned(_)));
}

#[test]
fn activity_feed_tracks_every_change() {
    let mut store = empty();
    let book = store.add_book(NewBook::new("Emma", "Jane Austen", 2)).unwrap();
    let member = store
        .add_member(NewMember::new("Alice Johnson", "alice@example.com"))
        .unwrap();
    let record = store.borrow_book(&book.id, &member.id).unwrap();
    store.return_book(&record.id).unwrap();

    let kinds: Vec<ActivityType> = store.stats().recent_activities.iter().map(|a| a.kind).collect();
    assert_eq!(
        kinds,
        [
            ActivityType::Return,
            ActivityType::Borrow,
            ActivityType::AddMember,
            ActivityType::AddBook
        ]
    );
    let latest = &store.stats().recent_activities[0];
    assert_eq!(latest.description, "Alice Johnson returned \"Emma\"");
    assert_eq!(latest.user, "Alice Johnson");
}

#[test]
fn error_bodies_for_the_dashboard() {
    let mut store = LibraryStore::seeded(LibraryConfig::default());
    let err = store
        .borrow_book(&BookId::from("1"), &MemberId::from("4"))
        .unwrap_err();
    let body = serde_json::to_value(err.to_response()).unwrap();
    assert_eq!(body["code"], 6);
    assert_eq!(body["error"], "MemberNotActive");
    assert_eq!(body["message"], "Member 4 is suspended and cannot borrow");
}
