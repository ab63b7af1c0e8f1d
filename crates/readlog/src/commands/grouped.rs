use crate::catalog::{Catalog, CatalogStatus};
use crate::commands::{CmdMessage, CmdResult};

/// The catalog's current author → series → books view.
///
/// A failed last load is reported alongside whatever snapshot is still held.
pub fn run(catalog: &Catalog) -> CmdResult {
    let mut result = CmdResult::default();
    if let CatalogStatus::Failed(reason) = catalog.status() {
        result.add_message(CmdMessage::error(format!(
            "Catalog could not be loaded: {}",
            reason
        )));
    } else if catalog.groups().is_empty() {
        result.add_message(CmdMessage::info("No books recorded yet."));
    }
    result.with_groups(catalog.groups().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::DataStore;

    #[test]
    fn returns_catalog_groups() {
        let store = StoreFixture::new()
            .with_series_book("Sharpe's Fortress", "Bernard Cornwell", "Sharpe", Some(3.0))
            .with_series_book("Sharpe's Tiger", "Cornwell, Bernard", "Sharpe", Some(1.0))
            .with_book("Emma", "Jane Austen")
            .build();
        let mut catalog = Catalog::new();
        catalog.replace(store.list_books().unwrap());

        let result = run(&catalog);
        let authors: Vec<&str> = result
            .groups
            .iter()
            .map(|g| g.display_name.as_str())
            .collect();
        assert_eq!(authors, vec!["Austen, Jane", "Cornwell, Bernard"]);
        assert_eq!(result.groups[1].series[0].books[0].title, "Sharpe's Tiger");
    }

    #[test]
    fn failed_catalog_reports_error() {
        let store = StoreFixture::new().with_book("Emma", "Jane Austen").build();
        let mut catalog = Catalog::new();
        catalog.replace(store.list_books().unwrap());
        catalog.set_failed("disk unreadable");

        let result = run(&catalog);
        assert_eq!(result.groups.len(), 1, "keeps the last good snapshot");
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(result.messages[0].content.contains("disk unreadable"));
    }

    #[test]
    fn empty_catalog_says_so() {
        let result = run(&Catalog::new());
        assert!(result.groups.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
