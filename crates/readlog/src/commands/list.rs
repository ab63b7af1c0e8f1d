use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// All books as a flat list, most recently read first.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let books = store.list_books()?;
    let mut result = CmdResult::default();
    if books.is_empty() {
        result.add_message(CmdMessage::info("No books recorded yet."));
    }
    Ok(result.with_listed_books(books))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_newest_first() {
        let store = StoreFixture::new()
            .with_book("Read First", "Jane Austen")
            .with_book("Read Second", "Charles Dickens")
            .build();

        let result = run(&store).unwrap();
        let titles: Vec<&str> = result
            .listed_books
            .iter()
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Read Second", "Read First"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_store_says_so() {
        let store = StoreFixture::new().build();
        let result = run(&store).unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
