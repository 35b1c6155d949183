//! In-Memory Repository Implementation
//!
//! Keeps documents in insertion order behind a `tokio` lock. Used by the
//! router tests and for running the API without PostgreSQL.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::BookId;
use tokio::sync::RwLock;

use crate::domain::entities::{Book, BookPatch, NewBook};
use crate::domain::repository::BookRepository;
use crate::domain::value_objects::PublishedYear;
use crate::error::BookResult;

/// In-memory repository; clones share the same storage
#[derive(Clone, Default)]
pub struct InMemoryBookRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn find_where<F>(&self, predicate: F) -> BookResult<Vec<Book>>
    where
        F: Fn(&Book) -> bool,
    {
        let books = self.books.read().await;
        Ok(books.iter().filter(|book| predicate(book)).cloned().collect())
    }

    async fn update_first<F>(&self, predicate: F, patch: &BookPatch) -> BookResult<Option<Book>>
    where
        F: Fn(&Book) -> bool,
    {
        let mut books = self.books.write().await;
        Ok(books.iter_mut().find(|book| predicate(book)).map(|book| {
            patch.apply_to(book, Utc::now());
            book.clone()
        }))
    }
}

impl BookRepository for InMemoryBookRepository {
    async fn create(&self, book: &NewBook) -> BookResult<Book> {
        let stored = book.clone().into_book(BookId::new(), Utc::now());
        self.books.write().await.push(stored.clone());

        tracing::debug!(book_id = %stored.id, "Book stored in memory");
        Ok(stored)
    }

    async fn find_all(&self) -> BookResult<Vec<Book>> {
        Ok(self.books.read().await.clone())
    }

    async fn find_by_title(&self, title: &str) -> BookResult<Vec<Book>> {
        self.find_where(|book| book.title == title).await
    }

    async fn find_by_genre(&self, genre: &str) -> BookResult<Vec<Book>> {
        self.find_where(|book| book.genre.as_deref() == Some(genre))
            .await
    }

    async fn find_by_published_year(&self, year: PublishedYear) -> BookResult<Vec<Book>> {
        self.find_where(|book| book.published_year == year).await
    }

    async fn update_by_id(&self, id: BookId, patch: &BookPatch) -> BookResult<Option<Book>> {
        self.update_first(|book| book.id == id, patch).await
    }

    async fn update_by_title(&self, title: &str, patch: &BookPatch) -> BookResult<Option<Book>> {
        self.update_first(|book| book.title == title, patch).await
    }

    async fn delete_by_id(&self, id: BookId) -> BookResult<Option<Book>> {
        let mut books = self.books.write().await;
        let removed = books
            .iter()
            .position(|book| book.id == id)
            .map(|index| books.remove(index));
        Ok(removed)
    }

    async fn ping(&self) -> BookResult<()> {
        Ok(())
    }
}
