use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Book, BookId, BookInput};
use crate::store::DataStore;

/// Replaces every field of an existing book. The id is kept.
pub fn run<S: DataStore>(store: &mut S, id: BookId, input: BookInput) -> Result<CmdResult> {
    // Fails with BookNotFound before anything is written
    store.get_book(&id)?;

    let book = Book::with_id(id, input);
    store.save_book(&book)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book updated ({}): {}",
        book.short_id(),
        book.title
    )));
    Ok(result.with_affected_books(vec![book]))
}
