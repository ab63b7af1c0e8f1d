use crate::error::Result;
use crate::model::{Book, BookId};
use std::collections::HashMap;
use std::path::PathBuf;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while BookStore handles the "what" (lookups, ordering, not-found rules).
pub trait StorageBackend {
    /// Load the record index. A store that was never written is empty, not an error.
    fn load_index(&self) -> Result<HashMap<BookId, Book>>;

    /// Save the record index.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_index(&self, index: &HashMap<BookId, Book>) -> Result<()>;

    /// Location of the index. For FsBackend, the real path; for MemBackend, a virtual one.
    fn index_path(&self) -> PathBuf;
}
