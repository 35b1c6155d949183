//! Domain Value Objects
//!
//! Immutable value types for the Book schema.

use serde::Serialize;
use std::fmt;

/// Cast text to a number the way the store casts numeric fields.
///
/// Surrounding whitespace is ignored; `inf` and `NaN` are not numbers here.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Year a book was first published
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PublishedYear(i32);

impl PublishedYear {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 9999;

    pub fn new(year: i32) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&year) {
            Some(Self(year))
        } else {
            None
        }
    }

    /// Whole numbers in range only; `1815.0` is accepted, `1815.5` is not
    pub fn from_number(value: f64) -> Option<Self> {
        let in_range = (f64::from(Self::MIN)..=f64::from(Self::MAX)).contains(&value);
        if in_range && value.fract() == 0.0 {
            Some(Self(value as i32))
        } else {
            None
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for PublishedYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PublishedYear> for i32 {
    fn from(year: PublishedYear) -> Self {
        year.0
    }
}

/// Reader rating on a 0 to 10 scale
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Rating(f64);

impl Rating {
    pub const ZERO: Rating = Rating(0.0);
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 10.0;

    /// NaN and values outside 0..=10 are rejected
    pub fn new(value: f64) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}
