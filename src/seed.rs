//! Sample catalog used to pre-populate a demo library

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::models::{
    Activity, ActivityId, ActivityType, Book, BookId, BorrowRecord, BorrowStatus, Member,
    MemberId, MemberStatus, RecordId,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn timestamp(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

const COVER_BASE: &str = "https://images.pexels.com/photos";

fn cover(path: &str) -> Option<String> {
    Some(format!(
        "{}/{}?auto=compress&cs=tinysrgb&w=300",
        COVER_BASE, path
    ))
}

#[allow(clippy::too_many_arguments)]
fn book(
    id: &str,
    title: &str,
    author: &str,
    isbn: &str,
    category: &str,
    copies: (u32, u32),
    published_year: i32,
    description: &str,
    cover_url: Option<String>,
    added_date: NaiveDate,
) -> Book {
    Book {
        id: BookId::from(id),
        title: title.to_string(),
        author: author.to_string(),
        isbn: isbn.to_string(),
        category: category.to_string(),
        published_year,
        description: description.to_string(),
        cover_url,
        total_copies: copies.0,
        available_copies: copies.1,
        added_date,
    }
}

pub fn books() -> Vec<Book> {
    vec![
        book(
            "1",
            "To Kill a Mockingbird",
            "Harper Lee",
            "978-0-06-112008-4",
            "Fiction",
            (5, 3),
            1960,
            "A gripping, heart-wrenching, and wholly remarkable tale of coming-of-age in a South poisoned by virulent prejudice.",
            cover("159866/books-book-pages-read-literature-159866.jpeg"),
            date(2024, 1, 15),
        ),
        book(
            "2",
            "1984",
            "George Orwell",
            "978-0-452-28423-4",
            "Dystopian Fiction",
            (4, 2),
            1949,
            "A dystopian social science fiction novel that follows the life of Winston Smith, a low-ranking member of the Party.",
            cover("46274/pexels-photo-46274.jpeg"),
            date(2024, 1, 10),
        ),
        book(
            "3",
            "Pride and Prejudice",
            "Jane Austen",
            "978-0-14-143951-8",
            "Romance",
            (6, 4),
            1813,
            "A romantic novel that follows Elizabeth Bennet as she deals with issues of manners, upbringing, morality, education, and marriage.",
            cover("1907785/pexels-photo-1907785.jpeg"),
            date(2024, 1, 20),
        ),
        book(
            "4",
            "The Great Gatsby",
            "F. Scott Fitzgerald",
            "978-0-7432-7356-5",
            "Classic Literature",
            (3, 1),
            1925,
            "A classic American novel set in the Jazz Age that tells the story of Jay Gatsby and his pursuit of the American Dream.",
            cover("694740/pexels-photo-694740.jpeg"),
            date(2024, 1, 12),
        ),
        book(
            "5",
            "The Catcher in the Rye",
            "J.D. Salinger",
            "978-0-316-76948-0",
            "Coming-of-age",
            (4, 4),
            1951,
            "A controversial novel that has become a touchstone for generations of readers, following Holden Caulfield.",
            cover("1301585/pexels-photo-1301585.jpeg"),
            date(2024, 1, 18),
        ),
        book(
            "6",
            "Harry Potter and the Philosopher's Stone",
            "J.K. Rowling",
            "978-0-7475-3269-9",
            "Fantasy",
            (8, 6),
            1997,
            "The first novel in the Harry Potter series, following the young wizard as he discovers the magical world.",
            cover("1029141/pexels-photo-1029141.jpeg"),
            date(2024, 1, 22),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn member(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    address: &str,
    membership_date: NaiveDate,
    status: MemberStatus,
    borrowed_books: u32,
) -> Member {
    Member {
        id: MemberId::from(id),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
        membership_date,
        status,
        borrowed_books,
    }
}

pub fn members() -> Vec<Member> {
    use MemberStatus::{Active, Suspended};

    vec![
        member(
            "1",
            "Alice Johnson",
            "alice.johnson@email.com",
            "+1-555-0101",
            "123 Oak Street, Springfield, IL",
            date(2023, 6, 15),
            Active,
            2,
        ),
        member(
            "2",
            "Bob Smith",
            "bob.smith@email.com",
            "+1-555-0102",
            "456 Pine Avenue, Springfield, IL",
            date(2023, 8, 20),
            Active,
            1,
        ),
        member(
            "3",
            "Carol Davis",
            "carol.davis@email.com",
            "+1-555-0103",
            "789 Elm Drive, Springfield, IL",
            date(2023, 12, 10),
            Active,
            0,
        ),
        member(
            "4",
            "David Wilson",
            "david.wilson@email.com",
            "+1-555-0104",
            "321 Maple Lane, Springfield, IL",
            date(2023, 5, 3),
            Suspended,
            3,
        ),
        member(
            "5",
            "Emma Brown",
            "emma.brown@email.com",
            "+1-555-0105",
            "654 Cedar Court, Springfield, IL",
            date(2024, 1, 8),
            Active,
            1,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    book_id: &str,
    member_id: &str,
    borrow_date: NaiveDate,
    due_date: NaiveDate,
    return_date: Option<NaiveDate>,
    status: BorrowStatus,
    fine: Option<Decimal>,
) -> BorrowRecord {
    BorrowRecord {
        id: RecordId::from(id),
        book_id: BookId::from(book_id),
        member_id: MemberId::from(member_id),
        borrow_date,
        due_date,
        return_date,
        status,
        fine,
    }
}

pub fn borrow_records() -> Vec<BorrowRecord> {
    use BorrowStatus::{Borrowed, Overdue, Returned};

    vec![
        record("1", "1", "1", date(2024, 1, 20), date(2024, 2, 3), None, Borrowed, None),
        record("2", "2", "2", date(2024, 1, 18), date(2024, 2, 1), None, Borrowed, None),
        record(
            "3",
            "4",
            "4",
            date(2024, 1, 10),
            date(2024, 1, 24),
            None,
            Overdue,
            Some(Decimal::new(500, 2)),
        ),
        record(
            "4",
            "3",
            "1",
            date(2024, 1, 15),
            date(2024, 1, 29),
            Some(date(2024, 1, 28)),
            Returned,
            None,
        ),
    ]
}

/// Sample feed, oldest first
pub fn activities() -> Vec<Activity> {
    let entry = |id: &str, kind, description: &str, at, user: &str| Activity {
        id: ActivityId::from(id),
        kind,
        description: description.to_string(),
        timestamp: at,
        user: user.to_string(),
    };

    vec![
        entry(
            "5",
            ActivityType::Borrow,
            "David Wilson borrowed \"The Great Gatsby\"",
            timestamp(2024, 1, 23, 16, 0),
            "David Wilson",
        ),
        entry(
            "4",
            ActivityType::AddMember,
            "New member Emma Brown registered",
            timestamp(2024, 1, 24, 11, 45),
            "Librarian",
        ),
        entry(
            "3",
            ActivityType::AddBook,
            "Added new book \"Harry Potter and the Philosopher's Stone\"",
            timestamp(2024, 1, 24, 14, 20),
            "Librarian",
        ),
        entry(
            "2",
            ActivityType::Return,
            "Bob Smith returned \"Pride and Prejudice\"",
            timestamp(2024, 1, 25, 9, 15),
            "Bob Smith",
        ),
        entry(
            "1",
            ActivityType::Borrow,
            "Alice Johnson borrowed \"To Kill a Mockingbird\"",
            timestamp(2024, 1, 25, 10, 30),
            "Alice Johnson",
        ),
    ]
}
