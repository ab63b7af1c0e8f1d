use super::book_store::BookStore;
use super::fs_backend::FsBackend;
use std::path::PathBuf;

pub type FileStore = BookStore<FsBackend>;

impl FileStore {
    pub fn new_fs(data_dir: PathBuf) -> Self {
        BookStore::with_backend(FsBackend::new(data_dir))
    }
}
