//! Books Router

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::application::config::BooksConfig;
use crate::domain::repository::BookRepository;
use crate::infra::postgres::PgBookRepository;
use crate::presentation::handlers::{self, BooksAppState};

/// Create the Books router with PostgreSQL repository
pub fn books_router(repo: PgBookRepository, config: BooksConfig) -> Router {
    books_router_generic(repo, config)
}

/// Create a Books router for any repository implementation
pub fn books_router_generic<R>(repo: R, config: BooksConfig) -> Router
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let state = BooksAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/books", post(handlers::create_book::<R>))
        .route("/booksData", get(handlers::list_books::<R>))
        .route(
            "/books/title/{book_title}",
            get(handlers::books_by_title::<R>).post(handlers::update_book_by_title::<R>),
        )
        .route("/books/genre/{book_genre}", get(handlers::books_by_genre::<R>))
        .route("/books/year/{book_year}", get(handlers::books_by_year::<R>))
        .route("/books/id/{book_id}", put(handlers::update_book_by_id::<R>))
        .route("/books/{book_id}", delete(handlers::delete_book::<R>))
        .route("/health", get(handlers::health::<R>))
        .with_state(state)
}
