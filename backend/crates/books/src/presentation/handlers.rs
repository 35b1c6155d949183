//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::error::app_error::{AppError, AppResult};
use std::sync::Arc;

use crate::application::config::BooksConfig;
use crate::application::{
    CreateBookUseCase, DeleteBookUseCase, FindBooksUseCase, UpdateBookUseCase,
};
use crate::domain::entities::{Book, BookDraft};
use crate::domain::repository::BookRepository;
use crate::error::{BookError, BookFailure, BookOperation, BookResult};
use crate::presentation::dto::{BookEnvelope, BookRequest, BookResponse, HealthResponse};

/// Shared state for book handlers
#[derive(Clone)]
pub struct BooksAppState<R>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<BooksConfig>,
}

type HandlerResult<T> = Result<T, BookFailure>;

type BookBody = Result<Json<BookRequest>, JsonRejection>;

/// Turn a write body into a draft.
///
/// A request without a JSON content type is read as an empty body. Any other
/// rejection fails the schema like a bad field would.
fn read_draft(body: BookBody) -> BookResult<BookDraft> {
    match body {
        Ok(Json(req)) => BookDraft::try_from(req),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(BookDraft::default()),
        Err(rejection) => Err(BookError::Validation(rejection.body_text())),
    }
}

// ============================================================================
// Create
// ============================================================================

/// POST /books
pub async fn create_book<R>(
    State(state): State<BooksAppState<R>>,
    body: BookBody,
) -> HandlerResult<impl IntoResponse>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let draft = read_draft(body).map_err(|e| e.during(BookOperation::Create))?;
    let use_case = CreateBookUseCase::new(state.repo.clone(), state.config.clone());

    let book = use_case
        .execute(draft)
        .await
        .map_err(|e| e.during(BookOperation::Create))?;

    Ok((
        StatusCode::CREATED,
        Json(BookEnvelope::new("Book added successfully", book)),
    ))
}

// ============================================================================
// Read
// ============================================================================

/// GET /booksData
pub async fn list_books<R>(
    State(state): State<BooksAppState<R>>,
) -> HandlerResult<Json<Vec<BookResponse>>>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let use_case = FindBooksUseCase::new(state.repo.clone());

    let books = use_case
        .all()
        .await
        .map_err(|e| e.during(BookOperation::ListAll))?;

    Ok(to_json(books))
}

/// GET /books/title/{bookTitle}
pub async fn books_by_title<R>(
    State(state): State<BooksAppState<R>>,
    Path(book_title): Path<String>,
) -> HandlerResult<Json<Vec<BookResponse>>>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let use_case = FindBooksUseCase::new(state.repo.clone());

    let books = use_case
        .by_title(&book_title)
        .await
        .map_err(|e| e.during(BookOperation::Search))?;

    Ok(to_json(books))
}

/// GET /books/genre/{bookGenre}
pub async fn books_by_genre<R>(
    State(state): State<BooksAppState<R>>,
    Path(book_genre): Path<String>,
) -> HandlerResult<Json<Vec<BookResponse>>>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let use_case = FindBooksUseCase::new(state.repo.clone());

    let books = use_case
        .by_genre(&book_genre)
        .await
        .map_err(|e| e.during(BookOperation::Search))?;

    Ok(to_json(books))
}

/// GET /books/year/{bookYear}
pub async fn books_by_year<R>(
    State(state): State<BooksAppState<R>>,
    Path(book_year): Path<String>,
) -> HandlerResult<Json<Vec<BookResponse>>>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let use_case = FindBooksUseCase::new(state.repo.clone());

    let books = use_case
        .by_year(&book_year)
        .await
        .map_err(|e| e.during(BookOperation::Search))?;

    Ok(to_json(books))
}

// ============================================================================
// Update
// ============================================================================

/// PUT /books/id/{bookId}
pub async fn update_book_by_id<R>(
    State(state): State<BooksAppState<R>>,
    Path(book_id): Path<String>,
    body: BookBody,
) -> HandlerResult<Json<BookEnvelope>>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let draft = read_draft(body).map_err(|e| e.during(BookOperation::UpdateById))?;
    let use_case = UpdateBookUseCase::new(state.repo.clone());

    let book = use_case
        .by_id(&book_id, draft)
        .await
        .map_err(|e| e.during(BookOperation::UpdateById))?;

    Ok(Json(BookEnvelope::new("Book updated successfully", book)))
}

/// POST /books/title/{bookTitle}
pub async fn update_book_by_title<R>(
    State(state): State<BooksAppState<R>>,
    Path(book_title): Path<String>,
    body: BookBody,
) -> HandlerResult<Json<BookEnvelope>>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let draft = read_draft(body).map_err(|e| e.during(BookOperation::UpdateByTitle))?;
    let use_case = UpdateBookUseCase::new(state.repo.clone());

    let book = use_case
        .by_title(&book_title, draft)
        .await
        .map_err(|e| e.during(BookOperation::UpdateByTitle))?;

    Ok(Json(BookEnvelope::new("Book updated successfully", book)))
}

// ============================================================================
// Delete
// ============================================================================

/// DELETE /books/{bookId}
pub async fn delete_book<R>(
    State(state): State<BooksAppState<R>>,
    Path(book_id): Path<String>,
) -> HandlerResult<Json<BookEnvelope>>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteBookUseCase::new(state.repo.clone());

    let book = use_case
        .by_id(&book_id)
        .await
        .map_err(|e| e.during(BookOperation::Delete))?;

    Ok(Json(BookEnvelope::new("Book deleted successfully", book)))
}

// ============================================================================
// Health
// ============================================================================

/// GET /health
pub async fn health<R>(State(state): State<BooksAppState<R>>) -> AppResult<Json<HealthResponse>>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    state.repo.ping().await.map_err(|e| {
        tracing::error!(error = %e, "Health check failed");
        AppError::from(e)
    })?;

    Ok(Json(HealthResponse { status: "ok" }))
}

fn to_json(books: Vec<Book>) -> Json<Vec<BookResponse>> {
    Json(books.into_iter().map(BookResponse::from).collect())
}
