//! Find Books Use Case
//!
//! All read routes share one rule: an empty result is `NoBooksFound`.

use std::sync::Arc;

use crate::domain::entities::Book;
use crate::domain::repository::BookRepository;
use crate::domain::value_objects::{PublishedYear, parse_number};
use crate::error::{BookError, BookResult};

/// Find Books Use Case
pub struct FindBooksUseCase<R>
where
    R: BookRepository,
{
    book_repo: Arc<R>,
}

impl<R> FindBooksUseCase<R>
where
    R: BookRepository,
{
    pub fn new(book_repo: Arc<R>) -> Self {
        Self { book_repo }
    }

    pub async fn all(&self) -> BookResult<Vec<Book>> {
        non_empty(self.book_repo.find_all().await?)
    }

    pub async fn by_title(&self, title: &str) -> BookResult<Vec<Book>> {
        non_empty(self.book_repo.find_by_title(title).await?)
    }

    pub async fn by_genre(&self, genre: &str) -> BookResult<Vec<Book>> {
        non_empty(self.book_repo.find_by_genre(genre).await?)
    }

    /// `raw_year` comes straight from the path and is cast here.
    ///
    /// Text that is not a number fails the cast. A number no stored year can
    /// equal, such as `10000` or `-5`, simply matches nothing.
    pub async fn by_year(&self, raw_year: &str) -> BookResult<Vec<Book>> {
        let number = parse_number(raw_year)
            .ok_or_else(|| BookError::InvalidPublishedYear(raw_year.to_string()))?;

        match PublishedYear::from_number(number) {
            Some(year) => non_empty(self.book_repo.find_by_published_year(year).await?),
            None => Err(BookError::NoBooksFound),
        }
    }
}

fn non_empty(books: Vec<Book>) -> BookResult<Vec<Book>> {
    if books.is_empty() {
        Err(BookError::NoBooksFound)
    } else {
        Ok(books)
    }
}
