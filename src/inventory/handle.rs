use std::path::PathBuf;

use crate::{
    book::Book,
    core::store::{Catalog, StoreError},
    persist::{
        CatalogSink, PersistError,
        flatfile::{DEFAULT_PATH, FlatFileSink},
    },
};

/// Errors returned by inventory operations.
///
/// [`InventoryError::Store`] is an ordinary domain outcome (unknown ISBN,
/// duplicate, invalid transition) and nothing was changed.
/// [`InventoryError::Persist`] from a mutating call means the change *was*
/// applied in memory but the backing file may not reflect it.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

impl InventoryError {
    pub fn is_persist(&self) -> bool {
        matches!(self, Self::Persist(_))
    }
}

pub type InventoryResult<T> = Result<T, InventoryError>;

/// Settings for [`Inventory::open`].
#[derive(Debug, Clone)]
pub struct InventoryConfig {
    pub path: PathBuf,
    /// Start empty instead of failing when the file exists but cannot be read.
    ///
    /// Off by default: an unreadable file would otherwise be overwritten by
    /// the first save.
    pub lenient_load: bool,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            lenient_load: false,
        }
    }
}

/// Single owner of the catalog and sole writer of its backing store.
///
/// Every successful mutation rewrites the whole store before returning.
pub struct Inventory {
    catalog: Catalog,
    sink: Box<dyn CatalogSink>,
    lenient_load: bool,
}

impl Inventory {
    /// Opens the flat file named by `config` and loads it.
    ///
    /// A missing file yields an empty inventory.
    pub fn open(config: InventoryConfig) -> InventoryResult<Self> {
        let sink = FlatFileSink::new(config.path);
        Self::with_sink(Box::new(sink), config.lenient_load)
    }

    pub fn with_sink(sink: Box<dyn CatalogSink>, lenient_load: bool) -> InventoryResult<Self> {
        let mut inventory = Self {
            catalog: Catalog::new(),
            sink,
            lenient_load,
        };
        inventory.reload()?;
        Ok(inventory)
    }

    /// Replaces the in-memory records with what the sink holds.
    ///
    /// Returns the number of records loaded.
    pub fn reload(&mut self) -> InventoryResult<usize> {
        let books = match self.sink.load() {
            Ok(books) => books,
            Err(err) if self.lenient_load => {
                tracing::warn!(error = %err, "catalog unreadable, continuing with an empty inventory");
                Vec::new()
            }
            Err(err) => return Err(err.into()),
        };
        self.catalog.replace_all(books);
        Ok(self.catalog.len())
    }

    pub fn save(&mut self) -> InventoryResult<()> {
        self.sink.save(self.catalog.list_all())?;
        Ok(())
    }

    /// Appends `book` and saves. Duplicate ISBNs are not checked here.
    pub fn add(&mut self, book: Book) -> InventoryResult<()> {
        self.catalog.push(book);
        self.save()
    }

    /// Catalogs a new available book unless its ISBN is already present.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> InventoryResult<Book> {
        let book = Book::new(title, author, isbn);
        self.catalog.insert_unique(book.clone())?;
        tracing::debug!(isbn = %book.isbn, "book added");
        self.save()?;
        Ok(book)
    }

    pub fn issue(&mut self, isbn: &str) -> InventoryResult<Book> {
        let issued = self.catalog.issue(isbn)?.clone();
        tracing::debug!(isbn, "book issued");
        self.save()?;
        Ok(issued)
    }

    pub fn return_book(&mut self, isbn: &str) -> InventoryResult<Book> {
        let returned = self.catalog.return_book(isbn)?.clone();
        tracing::debug!(isbn, "book returned");
        self.save()?;
        Ok(returned)
    }

    pub fn find_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.catalog.find_by_isbn(isbn)
    }

    pub fn search_by_title(&self, query: &str) -> Vec<&Book> {
        self.catalog.search_by_title(query)
    }

    pub fn list_all(&self) -> &[Book] {
        self.catalog.list_all()
    }
}
