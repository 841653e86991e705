use crate::{
    book::Book,
    core::indices::{self, IsbnIndex},
    types::{BookStatus, Isbn, Slot},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("no book with ISBN {0}")]
    NotFound(Isbn),
    #[error("a book with ISBN {0} already exists")]
    AlreadyExists(Isbn),
    #[error("book with ISBN {0} is already issued")]
    AlreadyIssued(Isbn),
    #[error("book with ISBN {0} is not issued")]
    NotIssued(Isbn),
}

/// Ordered, in-memory set of catalog records.
///
/// Order is insertion (or file) order. ISBN lookups go through a slot index
/// whose lists stay sorted, so the first match is always the earliest record,
/// exactly as a front-to-back scan would find it.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    books: Vec<Book>,
    by_isbn: IsbnIndex,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_books(books: Vec<Book>) -> Self {
        let mut catalog = Self::new();
        catalog.replace_all(books);
        catalog
    }

    pub fn replace_all(&mut self, books: Vec<Book>) {
        self.by_isbn.clear();
        for (slot, book) in books.iter().enumerate() {
            indices::insert_slot(&mut self.by_isbn, &book.isbn, slot);
        }
        self.books = books;
    }

    /// Appends without any duplicate check.
    pub fn push(&mut self, book: Book) -> Slot {
        let slot = self.books.len();
        indices::insert_slot(&mut self.by_isbn, &book.isbn, slot);
        self.books.push(book);
        slot
    }

    pub fn insert_unique(&mut self, book: Book) -> Result<Slot, StoreError> {
        if self.by_isbn.contains_key(book.isbn.as_str()) {
            return Err(StoreError::AlreadyExists(book.isbn));
        }
        Ok(self.push(book))
    }

    pub fn position_of(&self, isbn: &str) -> Option<Slot> {
        self.by_isbn
            .get(isbn)
            .and_then(|slots| slots.first())
            .copied()
    }

    pub fn find_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.position_of(isbn).and_then(|slot| self.books.get(slot))
    }

    /// Every record whose title contains `query`, ignoring case, in catalog order.
    pub fn search_by_title(&self, query: &str) -> Vec<&Book> {
        let needle = query.to_lowercase();
        self.books
            .iter()
            .filter(|b| b.title.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn list_all(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Applies `edit` in place to the first record with this ISBN.
    ///
    /// If the edit changes the ISBN the index follows it.
    pub fn modify<F>(&mut self, isbn: &str, edit: F) -> Result<&Book, StoreError>
    where
        F: FnOnce(&mut Book),
    {
        let slot = self
            .position_of(isbn)
            .ok_or_else(|| StoreError::NotFound(isbn.to_string()))?;
        let book = &mut self.books[slot];
        let old_isbn = book.isbn.clone();
        edit(book);

        if book.isbn != old_isbn {
            indices::remove_slot(&mut self.by_isbn, &old_isbn, slot);
            indices::insert_slot(&mut self.by_isbn, &book.isbn, slot);
        }
        Ok(&self.books[slot])
    }

    pub fn issue(&mut self, isbn: &str) -> Result<&Book, StoreError> {
        let current = self
            .find_by_isbn(isbn)
            .ok_or_else(|| StoreError::NotFound(isbn.to_string()))?;
        if current.status.is_issued() {
            return Err(StoreError::AlreadyIssued(isbn.to_string()));
        }
        self.modify(isbn, |b| b.status = BookStatus::Issued)
    }

    pub fn return_book(&mut self, isbn: &str) -> Result<&Book, StoreError> {
        let current = self
            .find_by_isbn(isbn)
            .ok_or_else(|| StoreError::NotFound(isbn.to_string()))?;
        if current.status.is_available() {
            return Err(StoreError::NotIssued(isbn.to_string()));
        }
        self.modify(isbn, |b| b.status = BookStatus::Available)
    }
}
