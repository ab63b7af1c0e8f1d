//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all readlog operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (id prefixes → full ids)
//! - **Owns the catalog** and refreshes it after every mutation
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## The Catalog Refresh
//!
//! `ReadlogApi` keeps a [`Catalog`] alongside the store. Adding, updating or
//! deleting a book reloads the full list from the store and hands it to
//! [`Catalog::replace`], so [`ReadlogApi::grouped`] and catalog listeners
//! always see the state after the last mutation. If the reload fails the
//! catalog is marked failed and the error is returned; the mutation itself
//! has already been persisted.
//!
//! ## Generic Over DataStore
//!
//! `ReadlogApi<S: DataStore>` is generic over the storage backend:
//! - Production: `ReadlogApi<FileStore>`
//! - Testing: `ReadlogApi<InMemoryStore>`

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;
use crate::lookup::BookLookup;
use crate::model::{Book, BookInput};
use crate::scan::{CaptureDevice, FrameDecoder};
use crate::store::DataStore;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

/// The main API facade for readlog operations.
///
/// Generic over `DataStore` to allow different storage backends.
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct ReadlogApi<S: DataStore> {
    store: S,
    catalog: Catalog,
}

impl<S: DataStore> ReadlogApi<S> {
    /// Wraps a store and loads its current contents into the catalog.
    pub fn new(store: S) -> Result<Self> {
        let mut api = Self {
            store,
            catalog: Catalog::new(),
        };
        api.refresh()?;
        Ok(api)
    }

    /// Reloads the catalog from the store.
    pub fn refresh(&mut self) -> Result<()> {
        self.catalog.set_loading();
        match self.store.list_books() {
            Ok(books) => {
                self.catalog.replace(books);
                Ok(())
            }
            Err(e) => {
                self.catalog.set_failed(e.to_string());
                Err(e)
            }
        }
    }

    pub fn add_book(&mut self, input: BookInput) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.store, input)?;
        self.refresh()?;
        Ok(result)
    }

    pub fn update_book(&mut self, id: &str, input: BookInput) -> Result<CmdResult> {
        let id = commands::helpers::resolve_id(&self.store, id)?;
        let result = commands::update::run(&mut self.store, id, input)?;
        self.refresh()?;
        Ok(result)
    }

    pub fn delete_book(&mut self, id: &str) -> Result<CmdResult> {
        let id = commands::helpers::resolve_id(&self.store, id)?;
        let result = commands::delete::run(&mut self.store, id)?;
        self.refresh()?;
        Ok(result)
    }

    pub fn get_book(&self, id: &str) -> Result<Book> {
        let id = commands::helpers::resolve_id(&self.store, id)?;
        self.store.get_book(&id)
    }

    pub fn list_books(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn grouped(&self) -> CmdResult {
        commands::grouped::run(&self.catalog)
    }

    pub fn lookup<L: BookLookup + ?Sized>(&self, lookup: &L, term: &str) -> Result<CmdResult> {
        commands::lookup::run(lookup, term)
    }

    pub fn scan<D, R, L>(&self, device: &mut D, decoder: &mut R, lookup: &L) -> Result<CmdResult>
    where
        D: CaptureDevice,
        R: FrameDecoder<D::Frame>,
        L: BookLookup + ?Sized,
    {
        commands::scan::run(device, decoder, lookup)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Mutable access for registering catalog listeners.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStatus;
    use crate::error::ReadlogError;
    use crate::store::memory::InMemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn api() -> ReadlogApi<InMemoryStore> {
        ReadlogApi::new(InMemoryStore::new()).unwrap()
    }

    #[test]
    fn add_refreshes_catalog() {
        let mut api = api();
        api.add_book(BookInput::new("Emma", "Jane Austen")).unwrap();

        assert_eq!(api.catalog().books().len(), 1);
        assert_eq!(api.grouped().groups[0].display_name, "Austen, Jane");
    }

    #[test]
    fn update_by_prefix_refreshes_catalog() {
        let mut api = api();
        let added = api
            .add_book(BookInput::new("Emma", "Jane Austen"))
            .unwrap()
            .affected_books
            .remove(0);

        api.update_book(&added.short_id(), BookInput::new("Emma", "Austen, Jane"))
            .unwrap();

        let groups = api.grouped().groups;
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].raw_name, "Austen, Jane");
    }

    #[test]
    fn delete_refreshes_catalog() {
        let mut api = api();
        let added = api
            .add_book(BookInput::new("Emma", "Jane Austen"))
            .unwrap()
            .affected_books
            .remove(0);

        api.delete_book(&added.id.to_string()).unwrap();
        assert!(api.grouped().groups.is_empty());
        assert!(api.catalog().books().is_empty());
    }

    #[test]
    fn listeners_see_each_mutation() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut api = api();
        api.catalog_mut()
            .subscribe(move |groups| sink.borrow_mut().push(groups.len()));

        api.add_book(BookInput::new("Emma", "Jane Austen")).unwrap();
        api.add_book(BookInput::new("Bleak House", "Charles Dickens"))
            .unwrap();

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn failed_mutation_leaves_catalog_alone() {
        let mut api = api();
        let result = api.delete_book("ffffffff");
        assert!(matches!(result, Err(ReadlogError::Api(_))));
        assert_eq!(api.catalog().status(), &CatalogStatus::Idle);
    }

    #[test]
    fn get_book_by_prefix() {
        let mut api = api();
        let added = api
            .add_book(BookInput::new("Emma", "Jane Austen"))
            .unwrap()
            .affected_books
            .remove(0);
        assert_eq!(api.get_book(&added.short_id()).unwrap(), added);
    }
}
