use super::backend::StorageBackend;
use crate::error::{ReadlogError, Result};
use crate::model::{Book, BookId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since readlog is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    index: RefCell<HashMap<BookId, Book>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn load_index(&self) -> Result<HashMap<BookId, Book>> {
        Ok(self.index.borrow().clone())
    }

    fn save_index(&self, new_index: &HashMap<BookId, Book>) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ReadlogError::Store("Simulated write error".to_string()));
        }
        *self.index.borrow_mut() = new_index.clone();
        Ok(())
    }

    fn index_path(&self) -> PathBuf {
        PathBuf::from("memory://books.json")
    }
}
