use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::lookup::{as_isbn, BookLookup};

/// Looks a term up by ISBN if it looks like one, otherwise as free text.
/// Finding nothing is a warning, not an error.
pub fn run<L: BookLookup + ?Sized>(lookup: &L, term: &str) -> Result<CmdResult> {
    let term = term.trim();
    let found = match as_isbn(term) {
        Some(isbn) => lookup.by_isbn(&isbn)?,
        None => lookup.by_query(term)?,
    };

    let mut result = CmdResult::default();
    match &found {
        Some(candidate) => result.add_message(CmdMessage::success(format!(
            "Found: {} by {}",
            candidate.title, candidate.author
        ))),
        None => result.add_message(CmdMessage::warning(format!(
            "No book found for \"{}\"",
            term
        ))),
    }
    result.candidate = found;
    Ok(result)
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::error::{ReadlogError, Result};
    use crate::lookup::{BookLookup, LookupResult};
    use std::cell::RefCell;

    /// Records calls and answers from a fixed table.
    #[derive(Default)]
    pub struct FakeLookup {
        pub by_isbn: Vec<(String, LookupResult)>,
        pub fail: bool,
        pub calls: RefCell<Vec<String>>,
    }

    impl BookLookup for FakeLookup {
        fn by_isbn(&self, isbn: &str) -> Result<Option<LookupResult>> {
            self.calls.borrow_mut().push(format!("isbn:{}", isbn));
            if self.fail {
                return Err(ReadlogError::Lookup("Google Books API error: 503".into()));
            }
            Ok(self
                .by_isbn
                .iter()
                .find(|(key, _)| key == isbn)
                .map(|(_, found)| found.clone()))
        }

        fn by_query(&self, query: &str) -> Result<Option<LookupResult>> {
            self.calls.borrow_mut().push(format!("query:{}", query));
            if self.fail {
                return Err(ReadlogError::Lookup("Google Books API error: 503".into()));
            }
            Ok(None)
        }
    }

    pub fn tiger() -> LookupResult {
        LookupResult {
            title: "Sharpe's Tiger".into(),
            author: "Bernard Cornwell".into(),
            isbn: "9780006510321".into(),
            cover_url: None,
        }
    }
}
