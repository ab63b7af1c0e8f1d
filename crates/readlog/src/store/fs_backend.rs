use super::backend::StorageBackend;
use crate::error::{ReadlogError, Result};
use crate::model::{Book, BookId};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

pub const INDEX_FILE: &str = "books.json";

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ReadlogError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_index(&self) -> Result<HashMap<BookId, Book>> {
        let data_file = self.index_path();
        if !data_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(data_file).map_err(ReadlogError::Io)?;
        let index: HashMap<BookId, Book> =
            serde_json::from_str(&content).map_err(ReadlogError::Serialization)?;
        Ok(index)
    }

    fn save_index(&self, index: &HashMap<BookId, Book>) -> Result<()> {
        self.ensure_dir()?;

        let data_file = self.index_path();
        let content = serde_json::to_string_pretty(index).map_err(ReadlogError::Serialization)?;

        let tmp_file = self.root.join(format!(".books-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(ReadlogError::Io)?;
        fs::rename(&tmp_file, &data_file).map_err(ReadlogError::Io)?;
        debug!(path = %data_file.display(), books = index.len(), "index written");

        Ok(())
    }

    fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }
}
