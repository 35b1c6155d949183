//! Book Error Types
//!
//! [`BookError`] is what the use cases return. Handlers attach the route via
//! [`BookError::during`], and the resulting [`BookFailure`] renders the
//! route-specific JSON body. `BookError` also converts into the shared
//! `kernel::error::AppError` for routes that use the common problem document.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::presentation::dto::{ErrorResponse, FailureResponse};

/// Book-specific result type alias
pub type BookResult<T> = Result<T, BookError>;

/// Book-specific error variants
#[derive(Debug, Error)]
pub enum BookError {
    /// Query matched zero documents
    #[error("No books found")]
    NoBooksFound,

    /// Update/delete target does not exist
    #[error("Book not found")]
    BookNotFound,

    /// Path segment is not a valid book ID
    #[error("Cast to BookId failed for value \"{0}\"")]
    InvalidBookId(String),

    /// Path segment is not a valid published year
    #[error("Cast to PublishedYear failed for value \"{0}\"")]
    InvalidPublishedYear(String),

    /// Schema rule violated on write
    #[error("Book validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BookError {
    /// Only "nothing matched" is a 404; every other failure is a 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookError::NoBooksFound | BookError::BookNotFound => StatusCode::NOT_FOUND,
            BookError::InvalidBookId(_)
            | BookError::InvalidPublishedYear(_)
            | BookError::Validation(_)
            | BookError::Database(_)
            | BookError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BookError::NoBooksFound | BookError::BookNotFound => ErrorKind::NotFound,
            _ => ErrorKind::InternalServerError,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, BookError::NoBooksFound | BookError::BookNotFound)
    }

    /// Tag the error with the operation that produced it
    pub fn during(self, operation: BookOperation) -> BookFailure {
        BookFailure {
            operation,
            error: self,
        }
    }

    fn log(&self, operation: BookOperation) {
        match self {
            BookError::Database(e) => {
                tracing::error!(error = %e, operation = ?operation, "Book database error");
            }
            BookError::Internal(msg) => {
                tracing::error!(message = %msg, operation = ?operation, "Book internal error");
            }
            BookError::Validation(msg) => {
                tracing::warn!(message = %msg, operation = ?operation, "Book rejected by schema");
            }
            BookError::InvalidBookId(raw) | BookError::InvalidPublishedYear(raw) => {
                tracing::warn!(value = %raw, operation = ?operation, "Book path cast failed");
            }
            BookError::NoBooksFound | BookError::BookNotFound => {
                tracing::debug!(operation = ?operation, "No matching book");
            }
        }
    }
}

impl From<BookError> for AppError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

/// Route family a failure belongs to; selects the response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookOperation {
    Create,
    ListAll,
    Search,
    UpdateById,
    UpdateByTitle,
    Delete,
}

impl BookOperation {
    pub fn not_found_message(&self) -> &'static str {
        match self {
            BookOperation::Create | BookOperation::ListAll | BookOperation::Search => {
                "No books found"
            }
            BookOperation::UpdateById | BookOperation::Delete => "Book not found",
            BookOperation::UpdateByTitle => "Book does not exist",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            BookOperation::Create => "Error adding book",
            BookOperation::ListAll => "Error fetching books",
            BookOperation::Search => "Failed to fetch books.",
            BookOperation::UpdateById => "Failed to update book.",
            BookOperation::UpdateByTitle => "Failed to update book",
            BookOperation::Delete => "Failed to delete book.",
        }
    }

    /// Create and list-all echo the underlying error text
    fn exposes_detail(&self) -> bool {
        matches!(self, BookOperation::Create | BookOperation::ListAll)
    }
}

/// A [`BookError`] bound to the route that raised it
#[derive(Debug)]
pub struct BookFailure {
    pub operation: BookOperation,
    pub error: BookError,
}

impl IntoResponse for BookFailure {
    fn into_response(self) -> Response {
        self.error.log(self.operation);
        let status = self.error.status_code();

        if self.error.is_not_found() {
            let body = ErrorResponse::new(self.operation.not_found_message());
            return (status, Json(body)).into_response();
        }

        if self.operation.exposes_detail() {
            let body = FailureResponse {
                message: self.operation.failure_message().to_string(),
                error: self.error.to_string(),
            };
            (status, Json(body)).into_response()
        } else {
            let body = ErrorResponse::new(self.operation.failure_message());
            (status, Json(body)).into_response()
        }
    }
}
