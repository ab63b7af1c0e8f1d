//! # Command Layer
//!
//! This module contains the **core business logic** of readlog. Each command lives in its
//! own submodule and implements pure Rust functions that operate on data types.
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Implement the actual logic for each operation
//! - Operate on `Book`, `AuthorGroup`, and other domain types
//! - Return structured `CmdResult` with affected books and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! Commands explicitly avoid:
//! - **Any I/O** beyond their collaborators: no stdout, stderr, or terminal concerns
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings:
//! - `affected_books`: Books that were created, changed, or removed
//! - `listed_books`: Books to display as a flat list
//! - `groups`: The grouped catalog view
//! - `candidate`: A metadata lookup hit
//! - `scanned`: A decoded barcode
//! - `messages`: Structured messages with levels (info, success, warning, error)
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore` and in-process fakes for lookup and
//! capture, so nothing here touches the filesystem or the network.
//!
//! ## Command Modules
//!
//! - [`add`]: Record a new book
//! - [`update`]: Replace a book's fields
//! - [`delete`]: Remove a book
//! - [`list`]: Flat list, most recently read first
//! - [`grouped`]: Author → series → books view
//! - [`lookup`]: Metadata lookup by ISBN or text
//! - [`scan`]: Barcode capture followed by lookup
//! - [`helpers`]: Id prefix resolution

use crate::grouping::AuthorGroup;
use crate::lookup::LookupResult;
use crate::model::Book;
use crate::scan::ScanResult;
use serde::Serialize;

pub mod add;
pub mod delete;
pub mod grouped;
pub mod helpers;
pub mod list;
pub mod lookup;
pub mod scan;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affected_books: Vec<Book>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed_books: Vec<Book>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<AuthorGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<LookupResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scanned: Option<ScanResult>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_groups(mut self, groups: Vec<AuthorGroup>) -> Self {
        self.groups = groups;
        self
    }
}
