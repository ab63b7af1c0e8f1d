//! # Domain Model: Books
//!
//! A [`Book`] is one entry in the reading log. The grouping core only reads
//! books; the store owns their lifecycle.
//!
//! ## Optional Fields
//!
//! `series_name`, `series_number` and `cover_url` are genuinely optional.
//! On disk an absent value is written as an explicit `null`, never as `""`
//! or `0`, so "no series" and "a series with an empty name" stay distinct.
//!
//! ## Legacy Records
//!
//! Records missing `title`, `author` or `isbn` load with an empty string for
//! that field instead of failing the whole catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type BookId = Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub series_name: Option<String>,
    #[serde(default)]
    pub series_number: Option<f64>,
    pub date_read: DateTime<Utc>,
    #[serde(default)]
    pub cover_url: Option<String>,
}

impl Book {
    pub fn new(input: BookInput) -> Self {
        Self::with_id(Uuid::new_v4(), input)
    }

    pub fn with_id(id: BookId, input: BookInput) -> Self {
        Self {
            id,
            title: input.title,
            author: input.author,
            isbn: input.isbn,
            series_name: input.series_name,
            series_number: input.series_number,
            date_read: input.date_read,
            cover_url: input.cover_url,
        }
    }

    /// The series this book belongs to, if any.
    ///
    /// An empty name counts as no series.
    pub fn series(&self) -> Option<&str> {
        self.series_name.as_deref().filter(|name| !name.is_empty())
    }

    /// The first 8 characters of the id, as shown in listings.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string().chars().take(8).collect()
    }

    pub fn to_input(&self) -> BookInput {
        BookInput {
            title: self.title.clone(),
            author: self.author.clone(),
            isbn: self.isbn.clone(),
            series_name: self.series_name.clone(),
            series_number: self.series_number,
            date_read: self.date_read,
            cover_url: self.cover_url.clone(),
        }
    }
}

/// Every [`Book`] field except the id: what callers supply on create and
/// re-supply in full on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub series_name: Option<String>,
    pub series_number: Option<f64>,
    pub date_read: DateTime<Utc>,
    pub cover_url: Option<String>,
}

impl BookInput {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: String::new(),
            series_name: None,
            series_number: None,
            date_read: Utc::now(),
            cover_url: None,
        }
    }

    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = isbn.into();
        self
    }

    pub fn with_series(mut self, name: impl Into<String>, number: Option<f64>) -> Self {
        self.series_name = Some(name.into());
        self.series_number = number;
        self
    }

    pub fn with_date_read(mut self, date_read: DateTime<Utc>) -> Self {
        self.date_read = date_read;
        self
    }

    pub fn with_cover_url(mut self, url: impl Into<String>) -> Self {
        self.cover_url = Some(url.into());
        self
    }
}
