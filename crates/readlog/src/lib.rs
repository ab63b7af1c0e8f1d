//! # Readlog
//!
//! A personal reading log. Books are recorded with author, optional series
//! and the date they were finished, and presented grouped by author and
//! series the way a bookshelf would be.
//!
//! ## Layers
//!
//! ```text
//! UI (readlog-cli)
//!   └── api        ReadlogApi: dispatch, id resolution, catalog refresh
//!        └── commands   one module per operation, returning CmdResult
//!             ├── catalog / grouping / names   the pure ordering engine
//!             ├── lookup / scan                metadata and barcode input
//!             └── store                        DataStore over a StorageBackend
//! ```
//!
//! The grouping engine ([`grouping::group_books`]) and the author comparator
//! ([`names::compare_authors`]) are pure functions with no I/O; everything
//! that touches disk or network sits behind a trait so it can be swapped for
//! an in-memory fake.
//!
//! ## Entry Points
//!
//! - [`init::initialize`] resolves the data directory, loads config and opens
//!   the file store.
//! - [`api::ReadlogApi`] is the facade every UI talks to.

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod grouping;
pub mod init;
pub mod lookup;
pub mod model;
pub mod names;
pub mod scan;
pub mod store;
