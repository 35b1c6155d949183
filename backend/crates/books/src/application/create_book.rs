//! Create Book Use Case

use std::sync::Arc;

use crate::application::config::BooksConfig;
use crate::domain::entities::{Book, BookDraft, NewBook};
use crate::domain::repository::BookRepository;
use crate::error::BookResult;

/// Create Book Use Case
pub struct CreateBookUseCase<R>
where
    R: BookRepository,
{
    book_repo: Arc<R>,
    config: Arc<BooksConfig>,
}

impl<R> CreateBookUseCase<R>
where
    R: BookRepository,
{
    pub fn new(book_repo: Arc<R>, config: Arc<BooksConfig>) -> Self {
        Self { book_repo, config }
    }

    pub async fn execute(&self, draft: BookDraft) -> BookResult<Book> {
        let new_book = NewBook::from_draft(draft, &self.config.defaults)?;

        let book = self.book_repo.create(&new_book).await?;

        tracing::info!(book_id = %book.id, title = %book.title, "Book created");

        Ok(book)
    }
}
