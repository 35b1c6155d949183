//! Domain Entities
//!
//! The Book document plus the two validated write shapes: [`NewBook`] for
//! inserts and [`BookPatch`] for partial updates. Both are built from an
//! unvalidated [`BookDraft`]; the schema rules live here so every repository
//! enforces the same ones.

use chrono::{DateTime, Utc};
use kernel::id::BookId;

use crate::domain::value_objects::{PublishedYear, Rating};
use crate::error::{BookError, BookResult};

/// Book document as stored
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub published_year: PublishedYear,
    pub genre: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub rating: Rating,
    pub summary: Option<String>,
    pub cover_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A body field as sent: left out, sent as `null`, or sent with a value
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    Missing,
    Null,
    Value(T),
}

impl<T> Field<T> {
    /// `Missing` and `Null` both collapse to `None`
    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Value(value) => Some(value),
            Field::Missing | Field::Null => None,
        }
    }

    /// `None` keeps the stored value, `Some(None)` clears it
    pub fn into_patch(self) -> Option<Option<T>> {
        match self {
            Field::Missing => None,
            Field::Null => Some(None),
            Field::Value(value) => Some(Some(value)),
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Missing
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Value(value)
    }
}

/// Unvalidated field set taken from a request body
///
/// Numeric fields are already cast to numbers but not range-checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookDraft {
    pub title: Field<String>,
    pub author: Field<String>,
    pub published_year: Field<f64>,
    pub genre: Field<String>,
    pub language: Field<String>,
    pub country: Field<String>,
    pub rating: Field<f64>,
    pub summary: Field<String>,
    pub cover_image_url: Field<String>,
}

/// Values applied on insert when the draft leaves a field out
#[derive(Debug, Clone, PartialEq)]
pub struct BookDefaults {
    pub country: Option<String>,
    pub rating: Rating,
}

impl Default for BookDefaults {
    fn default() -> Self {
        Self {
            country: Some("United States".to_string()),
            rating: Rating::ZERO,
        }
    }
}

/// Validated insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub published_year: PublishedYear,
    pub genre: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub rating: Rating,
    pub summary: Option<String>,
    pub cover_image_url: Option<String>,
}

impl NewBook {
    /// Apply the schema to a draft: required fields, ranges, defaults.
    ///
    /// Every violation is reported in one message, in field order.
    pub fn from_draft(draft: BookDraft, defaults: &BookDefaults) -> BookResult<Self> {
        let mut violations = Vec::new();

        let title = required_text("title", draft.title.into_option(), &mut violations);
        let author = required_text("author", draft.author.into_option(), &mut violations);

        let published_year = match draft.published_year.into_option() {
            Some(year) => check_year(year, &mut violations),
            None => {
                violations.push("publishedYear is required".to_string());
                None
            }
        };

        // null falls back to the default like an omitted rating
        let rating = match draft.rating.into_option() {
            Some(value) => check_rating(value, &mut violations),
            None => Some(defaults.rating),
        };

        // only an omitted country takes the default; null is stored as given
        let country = match draft.country {
            Field::Missing => defaults.country.clone(),
            other => other.into_option(),
        };

        match (title, author, published_year, rating) {
            (Some(title), Some(author), Some(published_year), Some(rating))
                if violations.is_empty() =>
            {
                Ok(Self {
                    title,
                    author,
                    published_year,
                    genre: draft.genre.into_option(),
                    language: draft.language.into_option(),
                    country,
                    rating,
                    summary: draft.summary.into_option(),
                    cover_image_url: draft.cover_image_url.into_option(),
                })
            }
            _ => Err(BookError::Validation(violations.join(", "))),
        }
    }

    /// Materialize the stored document
    pub fn into_book(self, id: BookId, now: DateTime<Utc>) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            published_year: self.published_year,
            genre: self.genre,
            language: self.language,
            country: self.country,
            rating: self.rating,
            summary: self.summary,
            cover_image_url: self.cover_image_url,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Validated partial update
///
/// `None` keeps the stored value. For the optional text fields `Some(None)`
/// clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub published_year: Option<PublishedYear>,
    pub genre: Option<Option<String>>,
    pub language: Option<Option<String>>,
    pub country: Option<Option<String>>,
    pub rating: Option<Rating>,
    pub summary: Option<Option<String>>,
    pub cover_image_url: Option<Option<String>>,
}

impl BookPatch {
    /// Validate only the fields present in the draft.
    ///
    /// Sending `null` for a required field is a violation; a `null` rating
    /// resets it to zero.
    pub fn from_draft(draft: BookDraft) -> BookResult<Self> {
        let mut violations = Vec::new();

        let title = patch_text("title", draft.title, &mut violations);
        let author = patch_text("author", draft.author, &mut violations);

        let published_year = match draft.published_year {
            Field::Missing => None,
            Field::Null => {
                violations.push("publishedYear is required".to_string());
                None
            }
            Field::Value(year) => check_year(year, &mut violations),
        };

        let rating = match draft.rating {
            Field::Missing => None,
            Field::Null => Some(Rating::ZERO),
            Field::Value(value) => check_rating(value, &mut violations),
        };

        if !violations.is_empty() {
            return Err(BookError::Validation(violations.join(", ")));
        }

        Ok(Self {
            title,
            author,
            published_year,
            genre: draft.genre.into_patch(),
            language: draft.language.into_patch(),
            country: draft.country.into_patch(),
            rating,
            summary: draft.summary.into_patch(),
            cover_image_url: draft.cover_image_url.into_patch(),
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrite the fields present in the patch and bump `updated_at`
    pub fn apply_to(&self, book: &mut Book, now: DateTime<Utc>) {
        if let Some(title) = &self.title {
            book.title = title.clone();
        }
        if let Some(author) = &self.author {
            book.author = author.clone();
        }
        if let Some(year) = self.published_year {
            book.published_year = year;
        }
        if let Some(genre) = &self.genre {
            book.genre = genre.clone();
        }
        if let Some(language) = &self.language {
            book.language = language.clone();
        }
        if let Some(country) = &self.country {
            book.country = country.clone();
        }
        if let Some(rating) = self.rating {
            book.rating = rating;
        }
        if let Some(summary) = &self.summary {
            book.summary = summary.clone();
        }
        if let Some(url) = &self.cover_image_url {
            book.cover_image_url = url.clone();
        }
        book.updated_at = now;
    }
}

fn required_text(
    field: &str,
    value: Option<String>,
    violations: &mut Vec<String>,
) -> Option<String> {
    match value {
        Some(value) => non_blank(field, value, violations),
        None => {
            violations.push(format!("{field} is required"));
            None
        }
    }
}

fn patch_text(field: &str, value: Field<String>, violations: &mut Vec<String>) -> Option<String> {
    match value {
        Field::Missing => None,
        Field::Null => required_text(field, None, violations),
        Field::Value(value) => non_blank(field, value, violations),
    }
}

fn non_blank(field: &str, value: String, violations: &mut Vec<String>) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        violations.push(format!("{field} must not be blank"));
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn check_year(year: f64, violations: &mut Vec<String>) -> Option<PublishedYear> {
    let checked = PublishedYear::from_number(year);
    if checked.is_none() {
        let in_range =
            (f64::from(PublishedYear::MIN)..=f64::from(PublishedYear::MAX)).contains(&year);
        if in_range {
            violations.push("publishedYear must be a whole number".to_string());
        } else {
            violations.push(format!(
                "publishedYear must be between {} and {}",
                PublishedYear::MIN,
                PublishedYear::MAX
            ));
        }
    }
    checked
}

fn check_rating(value: f64, violations: &mut Vec<String>) -> Option<Rating> {
    let checked = Rating::new(value);
    if checked.is_none() {
        violations.push(format!(
            "rating must be between {} and {}",
            Rating::MIN,
            Rating::MAX
        ));
    }
    checked
}
