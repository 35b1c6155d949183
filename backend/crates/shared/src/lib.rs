//! Shared Kernel - Vocabulary shared by every backend crate
//!
//! This crate holds the pieces whose meaning must not drift between crates:
//! - The unified [`error::app_error::AppError`] and its [`error::kind::ErrorKind`]
//! - Typed document identifiers ([`id::BookId`])
//!
//! Framework and driver integrations (axum, sqlx) are behind features so the
//! core stays dependency-light.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
