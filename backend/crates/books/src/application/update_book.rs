//! Update Book Use Case

use std::sync::Arc;

use crate::application::parse_book_id;
use crate::domain::entities::{Book, BookDraft, BookPatch};
use crate::domain::repository::BookRepository;
use crate::error::{BookError, BookResult};

/// Update Book Use Case
pub struct UpdateBookUseCase<R>
where
    R: BookRepository,
{
    book_repo: Arc<R>,
}

impl<R> UpdateBookUseCase<R>
where
    R: BookRepository,
{
    pub fn new(book_repo: Arc<R>) -> Self {
        Self { book_repo }
    }

    pub async fn by_id(&self, raw_id: &str, draft: BookDraft) -> BookResult<Book> {
        let book_id = parse_book_id(raw_id)?;
        let patch = BookPatch::from_draft(draft)?;

        let book = self
            .book_repo
            .update_by_id(book_id, &patch)
            .await?
            .ok_or(BookError::BookNotFound)?;

        tracing::info!(book_id = %book.id, "Book updated");
        Ok(book)
    }

    /// Only the first book carrying `title` is updated
    pub async fn by_title(&self, title: &str, draft: BookDraft) -> BookResult<Book> {
        let patch = BookPatch::from_draft(draft)?;

        let book = self
            .book_repo
            .update_by_title(title, &patch)
            .await?
            .ok_or(BookError::BookNotFound)?;

        tracing::info!(book_id = %book.id, matched_title = %title, "Book updated");
        Ok(book)
    }
}
