use super::book_store::BookStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = BookStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        BookStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Book, BookInput};
    use crate::store::DataStore;
    use chrono::{TimeZone, Utc};

    pub struct StoreFixture {
        pub store: InMemoryStore,
        day: u32,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                day: 1,
            }
        }

        /// Each added book is read one day after the previous one.
        fn next_date(&mut self) -> chrono::DateTime<Utc> {
            let date = Utc
                .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
                .single()
                .unwrap_or_else(Utc::now)
                + chrono::Duration::days(i64::from(self.day));
            self.day += 1;
            date
        }

        pub fn with_book(mut self, title: &str, author: &str) -> Self {
            let date = self.next_date();
            let book = Book::new(BookInput::new(title, author).with_date_read(date));
            self.store.save_book(&book).unwrap();
            self
        }

        pub fn with_series_book(
            mut self,
            title: &str,
            author: &str,
            series: &str,
            number: Option<f64>,
        ) -> Self {
            let date = self.next_date();
            let book = Book::new(
                BookInput::new(title, author)
                    .with_series(series, number)
                    .with_date_read(date),
            );
            self.store.save_book(&book).unwrap();
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}
