//! # Storage Layer
//!
//! This module defines the storage abstraction for the reading log. The
//! [`DataStore`] trait is what the rest of the library talks to; it knows
//! nothing about files.
//!
//! ## Two Layers
//!
//! - [`backend::StorageBackend`]: raw I/O. Load and save the whole record index.
//! - [`book_store::BookStore`]: the "what". CRUD by id and fetch ordering, on
//!   top of any backend.
//!
//! ## Record Format
//!
//! The index is a JSON object keyed by book id. Optional fields are always
//! present, with `null` meaning "no value":
//!
//! ```json
//! {
//!   "6f1c…": {
//!     "id": "6f1c…",
//!     "title": "Sharpe's Tiger",
//!     "author": "Bernard Cornwell",
//!     "isbn": "9780006510321",
//!     "series_name": "Sharpe",
//!     "series_number": 1.0,
//!     "date_read": "2024-03-01T00:00:00Z",
//!     "cover_url": null
//!   }
//! }
//! ```
//!
//! ## Fetch Ordering
//!
//! [`DataStore::list_books`] returns books most recently read first, ties
//! broken by id. Grouping does not depend on this order except for stable
//! tie-breaks between books with the same series position.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: `books.json` in the data directory.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── books.json      # Record index
//! └── readlog.toml    # Optional configuration
//! ```

use crate::error::Result;
use crate::model::{Book, BookId};

pub mod backend;
pub mod book_store;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

/// Abstract interface for book storage.
pub trait DataStore {
    /// Save a book (create or replace by id)
    fn save_book(&mut self, book: &Book) -> Result<()>;

    /// Get a book by ID
    fn get_book(&self, id: &BookId) -> Result<Book>;

    /// List all books, most recently read first
    fn list_books(&self) -> Result<Vec<Book>>;

    /// Delete a book permanently
    fn delete_book(&mut self, id: &BookId) -> Result<()>;
}
