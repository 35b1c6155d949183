//! Repository Traits
//!
//! Interface for Book persistence. Implementations are in the infra layer.

use kernel::id::BookId;

use crate::domain::entities::{Book, BookPatch, NewBook};
use crate::domain::value_objects::PublishedYear;
use crate::error::BookResult;

/// Book repository trait
///
/// Lookups return documents in insertion order. Title and genre matches are exact.
#[trait_variant::make(BookRepository: Send)]
pub trait LocalBookRepository {
    /// Insert a new book and return the stored document
    async fn create(&self, book: &NewBook) -> BookResult<Book>;

    async fn find_all(&self) -> BookResult<Vec<Book>>;

    async fn find_by_title(&self, title: &str) -> BookResult<Vec<Book>>;

    async fn find_by_genre(&self, genre: &str) -> BookResult<Vec<Book>>;

    async fn find_by_published_year(&self, year: PublishedYear) -> BookResult<Vec<Book>>;

    /// Apply a patch and return the updated document, `None` if the ID is unknown
    async fn update_by_id(&self, id: BookId, patch: &BookPatch) -> BookResult<Option<Book>>;

    /// Apply a patch to the first book with this title
    async fn update_by_title(&self, title: &str, patch: &BookPatch) -> BookResult<Option<Book>>;

    /// Delete and return the removed document
    async fn delete_by_id(&self, id: BookId) -> BookResult<Option<Book>>;

    /// Cheap round trip used by the health check
    async fn ping(&self) -> BookResult<()>;
}
