//! Books Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Book document, value objects, repository trait
//! - `application/` - Use cases (create, find, update, delete)
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Request Model
//! - Every route issues exactly one repository call
//! - An empty result set or a missing document answers 404
//! - Any store failure (including schema violations) answers 500

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::BooksConfig;
pub use error::{BookError, BookFailure, BookOperation, BookResult};
pub use infra::memory::InMemoryBookRepository;
pub use infra::postgres::PgBookRepository;
pub use presentation::router::{books_router, books_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
pub use kernel::id::BookId;

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}
