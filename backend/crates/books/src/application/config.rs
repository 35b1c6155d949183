//! Application Configuration
//!
//! Configuration for the Books application layer.

use crate::domain::entities::BookDefaults;

/// Books application configuration
#[derive(Debug, Clone, Default)]
pub struct BooksConfig {
    /// Values filled in when a create request leaves them out
    pub defaults: BookDefaults,
}

impl BooksConfig {
    /// Override the country stored when a new book does not name one
    pub fn with_default_country(mut self, country: impl Into<String>) -> Self {
        self.defaults.country = Some(country.into());
        self
    }
}
