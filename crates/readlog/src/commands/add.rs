use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Book, BookInput};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, input: BookInput) -> Result<CmdResult> {
    let book = Book::new(input);
    store.save_book(&book)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added ({}): {}",
        book.short_id(),
        book.title
    )));
    Ok(result.with_affected_books(vec![book]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn saves_with_fresh_id() {
        let mut store = InMemoryStore::new();
        let input = BookInput::new("Emma", "Jane Austen").with_isbn("9780141439587");

        let result = run(&mut store, input.clone()).unwrap();

        assert_eq!(result.affected_books.len(), 1);
        let added = &result.affected_books[0];
        assert_eq!(added.to_input(), input);
        assert_eq!(store.get_book(&added.id).unwrap(), *added);
        assert_eq!(result.messages[0].level, crate::commands::MessageLevel::Success);
    }

    #[test]
    fn same_input_twice_makes_two_books() {
        let mut store = InMemoryStore::new();
        let input = BookInput::new("Emma", "Jane Austen");
        run(&mut store, input.clone()).unwrap();
        run(&mut store, input).unwrap();

        assert_eq!(store.list_books().unwrap().len(), 2);
    }
}
