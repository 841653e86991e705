//! Catalog entry record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{BookStatus, Isbn};

/// One catalog entry.
///
/// Fields are not validated; the ISBN is the identifying key by convention
/// only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Title as entered.
    pub title: String,
    /// Author as entered.
    pub author: String,
    /// Identifying key.
    pub isbn: Isbn,
    /// Current availability.
    pub status: BookStatus,
}

impl Book {
    /// Creates an [`BookStatus::Available`] record.
    pub fn new(title: impl Into<String>, author: impl Into<String>, isbn: impl Into<Isbn>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            status: BookStatus::Available,
        }
    }

    /// Replaces the status, builder style.
    pub fn with_status(mut self, status: BookStatus) -> Self {
        self.status = status;
        self
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} (ISBN: {}) - {}",
            self.title, self.author, self.isbn, self.status
        )
    }
}
