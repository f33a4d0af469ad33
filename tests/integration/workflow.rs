//! Borrow/return workflow properties

use std::sync::Arc;

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use library_desk::{
    clock::ManualClock,
    error::{AppError, ErrorCode},
    models::{Book, BorrowStatus, Member, NewBook, NewMember, RecordId, UpdateBook},
    LibraryConfig, LibraryStore,
};

fn clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 5, 6, 9, 30, 0).unwrap(),
    ))
}

fn library() -> (LibraryStore, Arc<ManualClock>) {
    let clock = clock();
    let store = LibraryStore::with_clock(LibraryConfig::default(), clock.clone());
    (store, clock)
}

fn add_copies(store: &mut LibraryStore, title: &str, copies: u32) -> Book {
    store.add_book(NewBook::new(title, "Test Author", copies)).unwrap()
}

fn add_reader(store: &mut LibraryStore, name: &str) -> Member {
    let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    store.add_member(NewMember::new(name, email)).unwrap()
}

fn assert_counters_hold(store: &LibraryStore) {
    for book in store.books() {
        assert!(
            book.available_copies <= book.total_copies,
            "book {} has {} of {} copies available",
            book.id,
            book.available_copies,
            book.total_copies
        );
    }
    for member in store.members() {
        let active = store
            .member_records(&member.id)
            .into_iter()
            .filter(|r| r.is_active())
            .count();
        assert_eq!(member.borrowed_books as usize, active, "member {}", member.id);
    }
}

#[test]
fn borrow_creates_one_record_due_in_fourteen_days() {
    let (mut store, _) = library();
    let book = add_copies(&mut store, "Dune", 2);
    let member = add_reader(&mut store, "Carol Davis");

    let record = store.borrow_book(&book.id, &member.id).unwrap();

    assert_eq!(store.records().count(), 1);
    assert_eq!(record.status, BorrowStatus::Borrowed);
    assert_eq!(record.borrow_date, NaiveDate::from_ymd_opt(2024, 5, 6).unwrap());
    assert_eq!(record.due_date, record.borrow_date + Duration::days(14));
    assert_eq!(record.return_date, None);
    assert_eq!(store.book(&book.id).unwrap().available_copies, 1);
    assert_eq!(store.member(&member.id).unwrap().borrowed_books, 1);
}

#[test]
fn borrow_of_unavailable_book_changes_nothing() {
    let (mut store, _) = library();
    let book = add_copies(&mut store, "Dune", 0);
    let member = add_reader(&mut store, "Carol Davis");
    let activities_before = store.activities().len();

    let err = store.borrow_book(&book.id, &member.id).unwrap_err();

    assert!(matches!(err, AppError::BookUnavailable(_)));
    assert_eq!(err.code(), ErrorCode::BookNotAvailable);
    assert_eq!(store.records().count(), 0);
    assert_eq!(store.member(&member.id).unwrap().borrowed_books, 0);
    assert_eq!(store.activities().len(), activities_before);
}

#[test]
fn return_sets_return_date_to_call_time() {
    let (mut store, clock) = library();
    let book = add_copies(&mut store, "Dune", 1);
    let member = add_reader(&mut store, "Carol Davis");
    let record = store.borrow_book(&book.id, &member.id).unwrap();

    clock.advance(Duration::days(9));
    let returned = store.return_book(&record.id).unwrap();

    assert_eq!(returned.status, BorrowStatus::Returned);
    assert_eq!(returned.return_date, NaiveDate::from_ymd_opt(2024, 5, 15));
    assert_eq!(store.record(&record.id), Some(&returned));
    assert_eq!(store.book(&book.id).unwrap().available_copies, 1);
    assert_eq!(store.member(&member.id).unwrap().borrowed_books, 0);
}

#[test]
fn return_of_unknown_record_changes_nothing() {
    let (mut store, _) = library();
    let book = add_copies(&mut store, "Dune", 1);
    let member = add_reader(&mut store, "Carol Davis");
    store.borrow_book(&book.id, &member.id).unwrap();
    let before = store.snapshot();

    let err = store.return_book(&RecordId::from("no-such-record")).unwrap_err();

    assert_eq!(err.code(), ErrorCode::NoSuchRecord);
    let after = store.snapshot();
    assert_eq!(after.books, before.books);
    assert_eq!(after.members, before.members);
    assert_eq!(after.borrow_records, before.borrow_records);
}

#[test]
fn loan_falls_overdue_after_due_date() {
    let (mut store, clock) = library();
    let book = add_copies(&mut store, "Dune", 1);
    let member = add_reader(&mut store, "Carol Davis");
    let record = store.borrow_book(&book.id, &member.id).unwrap();

    clock.advance(Duration::days(14));
    assert_eq!(store.stats().books_issued, 1);
    assert_eq!(store.stats().overdue_books, 0);

    clock.advance(Duration::days(1));
    let stats = store.stats();
    assert_eq!(stats.books_issued, 0);
    assert_eq!(stats.overdue_books, 1);
    // Stored status is untouched; overdue is a read-time view
    assert_eq!(store.record(&record.id).unwrap().status, BorrowStatus::Borrowed);

    store.return_book(&record.id).unwrap();
    assert_eq!(store.stats().overdue_books, 0);
}

#[test]
fn counters_hold_across_mixed_operations() {
    let (mut store, clock) = library();
    let books: Vec<Book> = (1..=3)
        .map(|n| add_copies(&mut store, &format!("Volume {}", n), n))
        .collect();
    let members: Vec<Member> = ["Ann Lee", "Ben Ode", "Cy Park"]
        .iter()
        .map(|name| add_reader(&mut store, name))
        .collect();

    let mut open: Vec<RecordId> = Vec::new();
    for step in 0..40usize {
        clock.advance(Duration::hours(7));
        let book = &books[step % books.len()];
        let member = &members[(step / 2) % members.len()];

        if step % 3 == 2 && !open.is_empty() {
            let record_id = open.remove(step % open.len());
            store.return_book(&record_id).unwrap();
            assert!(store.return_book(&record_id).is_err());
        } else {
            match store.borrow_book(&book.id, &member.id) {
                Ok(record) => open.push(record.id),
                Err(e) => assert_eq!(e.code(), ErrorCode::BookNotAvailable),
            }
        }

        let stats = store.stats();
        let total: u64 = store.books().map(|b| u64::from(b.total_copies)).sum();
        let available: u64 = store.books().map(|b| u64::from(b.available_copies)).sum();
        assert_eq!(stats.total_books, total);
        assert_eq!(stats.available_books, available);
        assert_eq!(stats.books_issued + stats.overdue_books, open.len());
        assert_counters_hold(&store);
    }
}

#[test]
fn manual_counter_edits_are_checked() {
    let (mut store, _) = library();
    let book = add_copies(&mut store, "Dune", 2);

    let err = store
        .update_book(
            &book.id,
            UpdateBook {
                available_copies: Some(5),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvariantViolation);

    let grown = store
        .update_book(
            &book.id,
            UpdateBook {
                total_copies: Some(5),
                available_copies: Some(5),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(grown.total_copies, 5);
    assert_eq!(store.stats().available_books, 5);
}
