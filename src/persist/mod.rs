//! Whole-catalog persistence.
//!
//! A sink loads the full record sequence at startup and rewrites it after
//! every mutation. There is no journal and no partial update.

/// Line-delimited text file sink.
pub mod flatfile;

use std::{io, path::PathBuf};

use crate::book::Book;

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type PersistResult<T> = Result<T, PersistError>;

/// Backend that stores the whole catalog at once.
pub trait CatalogSink {
    /// Reads every stored record in order.
    ///
    /// A store that does not exist yet yields an empty list, not an error.
    fn load(&self) -> PersistResult<Vec<Book>>;

    /// Overwrites the stored records with `books`.
    fn save(&mut self, books: &[Book]) -> PersistResult<()>;
}
