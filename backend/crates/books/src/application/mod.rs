//! Application Layer - Use Cases
//!
//! Each use case wraps exactly one repository call and turns
//! "nothing matched" into the matching `BookError`.

pub mod config;
pub mod create_book;
pub mod delete_book;
pub mod find_books;
pub mod update_book;

pub use create_book::CreateBookUseCase;
pub use delete_book::DeleteBookUseCase;
pub use find_books::FindBooksUseCase;
pub use update_book::UpdateBookUseCase;

use kernel::id::BookId;

use crate::error::{BookError, BookResult};

/// Cast a path segment to a book ID
pub(crate) fn parse_book_id(raw: &str) -> BookResult<BookId> {
    raw.parse()
        .map_err(|_| BookError::InvalidBookId(raw.to_string()))
}
