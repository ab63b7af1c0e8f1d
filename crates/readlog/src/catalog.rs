//! # Catalog Snapshot
//!
//! The catalog holds the current book list and the grouping derived from it.
//! There is no global state: whoever owns the [`Catalog`] (normally
//! [`crate::api::ReadlogApi`]) calls [`Catalog::replace`] after every change to
//! the underlying collection.
//!
//! ## Recompute, Don't Patch
//!
//! Every `replace` regroups the whole list. Grouping is cheap and total, so
//! there is no delta tracking; the latest snapshot simply wins.
//!
//! ## Listeners
//!
//! Interested parties register with [`Catalog::subscribe`] and receive the new
//! groups after each `replace`. Status changes (loading, failure) do not notify.

use crate::grouping::{group_books, AuthorGroup};
use crate::model::Book;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(&[AuthorGroup])>;

#[derive(Default)]
pub struct Catalog {
    books: Vec<Book>,
    groups: Vec<AuthorGroup>,
    status: CatalogStatus,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the snapshot, regroups it and notifies listeners.
    pub fn replace(&mut self, books: Vec<Book>) {
        self.groups = group_books(&books);
        self.books = books;
        self.status = CatalogStatus::Idle;
        debug!(
            books = self.books.len(),
            authors = self.groups.len(),
            "catalog regrouped"
        );

        for (_, listener) in &self.listeners {
            listener(&self.groups);
        }
    }

    pub fn set_loading(&mut self) {
        self.status = CatalogStatus::Loading;
    }

    pub fn set_failed(&mut self, message: impl Into<String>) {
        self.status = CatalogStatus::Failed(message.into());
    }

    pub fn subscribe(&mut self, listener: impl Fn(&[AuthorGroup]) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the listener was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn groups(&self) -> &[AuthorGroup] {
        &self.groups
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("books", &self.books.len())
            .field("groups", &self.groups.len())
            .field("status", &self.status)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
