use super::backend::StorageBackend;
use super::DataStore;
use crate::error::{ReadlogError, Result};
use crate::model::{Book, BookId};
use std::path::PathBuf;
use tracing::debug;

pub struct BookStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> BookStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn index_path(&self) -> PathBuf {
        self.backend.index_path()
    }
}

impl<B: StorageBackend> DataStore for BookStore<B> {
    fn save_book(&mut self, book: &Book) -> Result<()> {
        // JSON has no encoding for NaN or infinity; they would reload as null
        if let Some(number) = book.series_number.filter(|n| !n.is_finite()) {
            return Err(ReadlogError::Api(format!(
                "Series number must be finite, got {}",
                number
            )));
        }

        let mut index = self.backend.load_index()?;
        index.insert(book.id, book.clone());
        self.backend.save_index(&index)?;
        debug!(id = %book.id, title = %book.title, "book saved");
        Ok(())
    }

    fn get_book(&self, id: &BookId) -> Result<Book> {
        let index = self.backend.load_index()?;
        index
            .get(id)
            .cloned()
            .ok_or(ReadlogError::BookNotFound(*id))
    }

    fn list_books(&self) -> Result<Vec<Book>> {
        let index = self.backend.load_index()?;
        let mut books: Vec<Book> = index.into_values().collect();
        books.sort_by(|a, b| b.date_read.cmp(&a.date_read).then(a.id.cmp(&b.id)));
        Ok(books)
    }

    fn delete_book(&mut self, id: &BookId) -> Result<()> {
        let mut index = self.backend.load_index()?;
        if index.remove(id).is_none() {
            return Err(ReadlogError::BookNotFound(*id));
        }
        self.backend.save_index(&index)?;
        debug!(id = %id, "book deleted");
        Ok(())
    }
}
