//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::BookId;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::{Book, BookDraft, Field};
use crate::domain::value_objects::parse_number;
use crate::error::{BookError, BookResult};

/// Body for POST /books, PUT /books/id/{bookId} and POST /books/title/{bookTitle}
///
/// Every field is optional here; the schema decides what is required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    #[serde(default)]
    pub title: Field<String>,
    #[serde(default)]
    pub author: Field<String>,
    #[serde(default)]
    pub published_year: Field<NumberInput>,
    #[serde(default)]
    pub genre: Field<String>,
    #[serde(default)]
    pub language: Field<String>,
    #[serde(default)]
    pub country: Field<String>,
    #[serde(default)]
    pub rating: Field<NumberInput>,
    #[serde(default)]
    pub summary: Field<String>,
    #[serde(default)]
    pub cover_image_url: Field<String>,
}

/// Numeric body field; `"1954"` is cast like `1954`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
}

// A present key is `Null` or `Value`; absent keys come from `Default`
impl<'de, T> Deserialize<'de> for Field<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Field::Value(value),
            None => Field::Null,
        })
    }
}

impl TryFrom<BookRequest> for BookDraft {
    type Error = BookError;

    /// Casts the numeric fields; a value that is not a number fails the schema
    fn try_from(req: BookRequest) -> BookResult<Self> {
        Ok(Self {
            title: req.title,
            author: req.author,
            published_year: cast_number("publishedYear", req.published_year)?,
            genre: req.genre,
            language: req.language,
            country: req.country,
            rating: cast_number("rating", req.rating)?,
            summary: req.summary,
            cover_image_url: req.cover_image_url,
        })
    }
}

fn cast_number(path: &str, field: Field<NumberInput>) -> BookResult<Field<f64>> {
    match field {
        Field::Missing => Ok(Field::Missing),
        Field::Null => Ok(Field::Null),
        Field::Value(NumberInput::Number(value)) => Ok(Field::Value(value)),
        Field::Value(NumberInput::Text(raw)) if raw.trim().is_empty() => Ok(Field::Null),
        Field::Value(NumberInput::Text(raw)) => match parse_number(&raw) {
            Some(value) => Ok(Field::Value(value)),
            None => Err(BookError::Validation(format!(
                "Cast to Number failed for value \"{raw}\" at path \"{path}\""
            ))),
        },
    }
}

/// Serialized Book document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    #[serde(rename = "_id")]
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub published_year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            published_year: book.published_year.value(),
            genre: book.genre,
            language: book.language,
            country: book.country,
            rating: book.rating.value(),
            summary: book.summary,
            cover_image_url: book.cover_image_url,
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}

/// `{ message, book }` returned by the write routes
#[derive(Debug, Clone, Serialize)]
pub struct BookEnvelope {
    pub message: String,
    pub book: BookResponse,
}

impl BookEnvelope {
    pub fn new(message: impl Into<String>, book: Book) -> Self {
        Self {
            message: message.into(),
            book: book.into(),
        }
    }
}

/// `{ error }` body for 404s and most 500s
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// `{ message, error }` body for 500s that carry the underlying error text
#[derive(Debug, Clone, Serialize)]
pub struct FailureResponse {
    pub message: String,
    pub error: String,
}

/// Response for GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
