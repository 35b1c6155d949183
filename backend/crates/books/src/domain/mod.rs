//! Domain Layer - Book document and its schema rules
//!
//! This layer contains:
//! - Domain entities (Book, NewBook, BookPatch, BookDraft)
//! - Domain value objects (PublishedYear, Rating)
//! - Repository trait (interface)

pub mod entities;
pub mod repository;
pub mod value_objects;
