//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::BookId;
use sqlx::PgPool;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use uuid::Uuid;

use crate::domain::entities::{Book, BookPatch, NewBook};
use crate::domain::repository::BookRepository;
use crate::domain::value_objects::{PublishedYear, Rating};
use crate::error::{BookError, BookResult};

const BOOK_COLUMNS: &str = r#"
    book_id,
    title,
    author,
    published_year,
    genre,
    language,
    country,
    rating,
    summary,
    cover_image_url,
    created_at,
    updated_at
"#;

const INSERTION_ORDER: &str = "ORDER BY created_at, book_id";

// $1 is reserved for the row selector. Nullable columns take a flag and a
// value so a patch can clear them.
const PATCH_ASSIGNMENTS: &str = r#"
    title = COALESCE($2, title),
    author = COALESCE($3, author),
    published_year = COALESCE($4, published_year),
    rating = COALESCE($5, rating),
    genre = CASE WHEN $6 THEN $7 ELSE genre END,
    language = CASE WHEN $8 THEN $9 ELSE language END,
    country = CASE WHEN $10 THEN $11 ELSE country END,
    summary = CASE WHEN $12 THEN $13 ELSE summary END,
    cover_image_url = CASE WHEN $14 THEN $15 ELSE cover_image_url END,
    updated_at = NOW()
"#;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgBookRepository {
    pool: PgPool,
}

impl PgBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_books<'q>(
        &self,
        sql: &'q str,
        filter: Option<BookFilter<'q>>,
    ) -> BookResult<Vec<Book>> {
        let query = sqlx::query_as::<_, BookRow>(sql);
        let query = match filter {
            Some(BookFilter::Text(value)) => query.bind(value),
            Some(BookFilter::Year(year)) => query.bind(year.value()),
            None => query,
        };

        query
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(BookRow::into_book)
            .collect()
    }
}

enum BookFilter<'a> {
    Text(&'a str),
    Year(PublishedYear),
}

impl BookRepository for PgBookRepository {
    async fn create(&self, book: &NewBook) -> BookResult<Book> {
        let sql = format!(
            r#"
            INSERT INTO books (
                book_id,
                title,
                author,
                published_year,
                genre,
                language,
                country,
                rating,
                summary,
                cover_image_url
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {BOOK_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, BookRow>(&sql)
            .bind(BookId::new().into_uuid())
            .bind(&book.title)
            .bind(&book.author)
            .bind(book.published_year.value())
            .bind(&book.genre)
            .bind(&book.language)
            .bind(&book.country)
            .bind(book.rating.value())
            .bind(&book.summary)
            .bind(&book.cover_image_url)
            .fetch_one(&self.pool)
            .await?;

        row.into_book()
    }

    async fn find_all(&self) -> BookResult<Vec<Book>> {
        let sql = format!("SELECT {BOOK_COLUMNS} FROM books {INSERTION_ORDER}");
        self.fetch_books(&sql, None).await
    }

    async fn find_by_title(&self, title: &str) -> BookResult<Vec<Book>> {
        let sql = format!("SELECT {BOOK_COLUMNS} FROM books WHERE title = $1 {INSERTION_ORDER}");
        self.fetch_books(&sql, Some(BookFilter::Text(title))).await
    }

    async fn find_by_genre(&self, genre: &str) -> BookResult<Vec<Book>> {
        let sql = format!("SELECT {BOOK_COLUMNS} FROM books WHERE genre = $1 {INSERTION_ORDER}");
        self.fetch_books(&sql, Some(BookFilter::Text(genre))).await
    }

    async fn find_by_published_year(&self, year: PublishedYear) -> BookResult<Vec<Book>> {
        let sql = format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE published_year = $1 {INSERTION_ORDER}"
        );
        self.fetch_books(&sql, Some(BookFilter::Year(year))).await
    }

    async fn update_by_id(&self, id: BookId, patch: &BookPatch) -> BookResult<Option<Book>> {
        let sql = format!(
            r#"
            UPDATE books SET {PATCH_ASSIGNMENTS}
            WHERE book_id = $1
            RETURNING {BOOK_COLUMNS}
            "#
        );

        let row = bind_patch(sqlx::query_as::<_, BookRow>(&sql).bind(id.into_uuid()), patch)
            .fetch_optional(&self.pool)
            .await?;

        row.map(BookRow::into_book).transpose()
    }

    async fn update_by_title(&self, title: &str, patch: &BookPatch) -> BookResult<Option<Book>> {
        let sql = format!(
            r#"
            UPDATE books SET {PATCH_ASSIGNMENTS}
            WHERE book_id = (
                SELECT book_id FROM books
                WHERE title = $1
                {INSERTION_ORDER}
                LIMIT 1
            )
            RETURNING {BOOK_COLUMNS}
            "#
        );

        let row = bind_patch(sqlx::query_as::<_, BookRow>(&sql).bind(title), patch)
            .fetch_optional(&self.pool)
            .await?;

        row.map(BookRow::into_book).transpose()
    }

    async fn delete_by_id(&self, id: BookId) -> BookResult<Option<Book>> {
        let sql = format!("DELETE FROM books WHERE book_id = $1 RETURNING {BOOK_COLUMNS}");

        let row = sqlx::query_as::<_, BookRow>(&sql)
            .bind(id.into_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(BookRow::into_book).transpose()
    }

    async fn ping(&self) -> BookResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Bind patch values to `$2..=$15` in `PATCH_ASSIGNMENTS` order
fn bind_patch<'q>(
    query: QueryAs<'q, sqlx::Postgres, BookRow, PgArguments>,
    patch: &BookPatch,
) -> QueryAs<'q, sqlx::Postgres, BookRow, PgArguments> {
    let query = query
        .bind(patch.title.clone())
        .bind(patch.author.clone())
        .bind(patch.published_year.map(|year| year.value()))
        .bind(patch.rating.map(|rating| rating.value()));

    [
        &patch.genre,
        &patch.language,
        &patch.country,
        &patch.summary,
        &patch.cover_image_url,
    ]
    .into_iter()
    .fold(query, |query, field| {
        query.bind(field.is_some()).bind(field.clone().flatten())
    })
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct BookRow {
    book_id: Uuid,
    title: String,
    author: String,
    published_year: i32,
    genre: Option<String>,
    language: Option<String>,
    country: Option<String>,
    rating: f64,
    summary: Option<String>,
    cover_image_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BookRow {
    fn into_book(self) -> BookResult<Book> {
        let published_year = PublishedYear::new(self.published_year).ok_or_else(|| {
            BookError::Internal(format!(
                "stored published_year {} is out of range",
                self.published_year
            ))
        })?;
        let rating = Rating::new(self.rating).ok_or_else(|| {
            BookError::Internal(format!("stored rating {} is out of range", self.rating))
        })?;

        Ok(Book {
            id: BookId::from_uuid(self.book_id),
            title: self.title,
            author: self.author,
            published_year,
            genre: self.genre,
            language: self.language,
            country: self.country,
            rating,
            summary: self.summary,
            cover_image_url: self.cover_image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
