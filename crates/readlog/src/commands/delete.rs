use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookId;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: BookId) -> Result<CmdResult> {
    let book = store.get_book(&id)?;
    store.delete_book(&id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book deleted ({}): {}",
        book.short_id(),
        book.title
    )));
    Ok(result.with_affected_books(vec![book]))
}
