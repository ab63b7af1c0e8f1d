use crate::model::BookId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadlogError {
    #[error("Book not found: {0}")]
    BookNotFound(BookId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),

    #[error("Lookup error: {0}")]
    Lookup(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Scan error: {0}")]
    Scan(String),
}

pub type Result<T> = std::result::Result<T, ReadlogError>;
