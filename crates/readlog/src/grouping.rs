//! # Grouping Engine
//!
//! Turns the flat book list into the tree the catalog is browsed by:
//!
//! ```text
//! Austen, Jane
//!   Emma
//!   Persuasion
//! Cornwell, Bernard
//!   Sharpe
//!     1  Sharpe's Tiger
//!     3  Sharpe's Fortress
//!   Stonehenge
//! ```
//!
//! ## Keys
//!
//! - **Author**: [`normalize_author`] of the raw name. Exact equality of the
//!   normalized form merges groups; the comparator never does.
//! - **Series**: the raw `series_name`, exact and case-sensitive, scoped to one author.
//!
//! ## Ordering
//!
//! - Books in a series: by `series_number`, absent counting as `0`. Stable, so
//!   equal numbers keep input order.
//! - Series: by name ([`collate`]).
//! - Standalones: by title ([`collate`]).
//! - Authors: [`compare_authors`] over each group's first-seen raw name.
//!
//! [`group_books`] is pure: it reads a slice, clones the books it places and
//! keeps nothing between calls.

use crate::model::Book;
use crate::names::{collate, compare_authors, normalize_author};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesGroup {
    pub series_name: String,
    pub books: Vec<Book>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorGroup {
    /// Normalized name, e.g. "Cornwell, Bernard"
    pub display_name: String,
    /// Raw name of the first book seen for this author
    pub raw_name: String,
    pub series: Vec<SeriesGroup>,
    pub standalones: Vec<Book>,
}

impl AuthorGroup {
    fn new(display_name: String, raw_name: String) -> Self {
        Self {
            display_name,
            raw_name,
            series: Vec::new(),
            standalones: Vec::new(),
        }
    }

    fn place(&mut self, book: &Book) {
        match book.series() {
            Some(name) => {
                match self.series.iter_mut().find(|s| s.series_name == name) {
                    Some(group) => group.books.push(book.clone()),
                    None => self.series.push(SeriesGroup {
                        series_name: name.to_string(),
                        books: vec![book.clone()],
                    }),
                }
            }
            None => self.standalones.push(book.clone()),
        }
    }

    fn sort(&mut self) {
        for series in &mut self.series {
            series.books.sort_by(compare_series_position);
        }
        self.series
            .sort_by(|a, b| collate(&a.series_name, &b.series_name));
        self.standalones.sort_by(|a, b| collate(&a.title, &b.title));
    }

    /// Total number of books under this author.
    pub fn book_count(&self) -> usize {
        self.standalones.len() + self.series.iter().map(|s| s.books.len()).sum::<usize>()
    }

    /// Every book under this author, series first, in display order.
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.series
            .iter()
            .flat_map(|s| s.books.iter())
            .chain(self.standalones.iter())
    }
}

/// Absent counts as `0`. Adding `0.0` folds `-0.0` into `0.0` so the two tie.
fn series_position(book: &Book) -> f64 {
    book.series_number.unwrap_or(0.0) + 0.0
}

fn compare_series_position(a: &Book, b: &Book) -> Ordering {
    series_position(a).total_cmp(&series_position(b))
}

/// Groups books by author, then by series, fully ordered.
pub fn group_books(books: &[Book]) -> Vec<AuthorGroup> {
    let mut groups: Vec<AuthorGroup> = Vec::new();
    let mut by_display: HashMap<String, usize> = HashMap::new();

    for book in books {
        let display = normalize_author(&book.author);
        let slot = match by_display.get(&display) {
            Some(&slot) => slot,
            None => {
                groups.push(AuthorGroup::new(display.clone(), book.author.clone()));
                by_display.insert(display, groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[slot].place(book);
    }

    for group in &mut groups {
        group.sort();
    }
    groups.sort_by(|a, b| compare_authors(&a.raw_name, &b.raw_name));
    groups
}
