//! Delete Book Use Case

use std::sync::Arc;

use crate::application::parse_book_id;
use crate::domain::entities::Book;
use crate::domain::repository::BookRepository;
use crate::error::{BookError, BookResult};

/// Delete Book Use Case
pub struct DeleteBookUseCase<R>
where
    R: BookRepository,
{
    book_repo: Arc<R>,
}

impl<R> DeleteBookUseCase<R>
where
    R: BookRepository,
{
    pub fn new(book_repo: Arc<R>) -> Self {
        Self { book_repo }
    }

    /// Returns the deleted document
    pub async fn by_id(&self, raw_id: &str) -> BookResult<Book> {
        let book_id = parse_book_id(raw_id)?;

        let book = self
            .book_repo
            .delete_by_id(book_id)
            .await?
            .ok_or(BookError::BookNotFound)?;

        tracing::info!(book_id = %book.id, "Book deleted");
        Ok(book)
    }
}
