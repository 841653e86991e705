//! `|`-delimited text file sink.
//!
//! One record per line: `title|author|isbn|status`, each line newline
//! terminated. Fields are written verbatim with no escaping, so a `|` or line
//! break inside a field corrupts that line on the next load.

use std::{fs, io, path::PathBuf};

use crate::{book::Book, types::BookStatus};

use super::{CatalogSink, PersistError, PersistResult};

/// Field separator.
pub const DELIMITER: char = '|';

/// Fields per well-formed line.
pub const FIELD_COUNT: usize = 4;

/// File name used when no path is configured.
pub const DEFAULT_PATH: &str = "books.txt";

/// Records recovered from a file body plus the number of rejected lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCatalog {
    /// Well-formed records in file order.
    pub books: Vec<Book>,
    /// Lines that did not split into exactly [`FIELD_COUNT`] fields.
    pub skipped: usize,
}

/// Flat file implementation of [`CatalogSink`].
///
/// The file is not locked. Two processes saving to the same path overwrite
/// each other and the last save wins.
#[derive(Debug, Clone)]
pub struct FlatFileSink {
    path: PathBuf,
}

impl FlatFileSink {
    /// Sink backed by `path`. Nothing is touched until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSink for FlatFileSink {
    fn load(&self) -> PersistResult<Vec<Book>> {
        let body = match fs::read_to_string(&self.path) {
            Ok(body) => body,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "catalog file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(PersistError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let parsed = parse_catalog(&body);
        tracing::debug!(
            path = %self.path.display(),
            records = parsed.books.len(),
            skipped = parsed.skipped,
            "catalog loaded"
        );
        Ok(parsed.books)
    }

    fn save(&mut self, books: &[Book]) -> PersistResult<()> {
        let body = render_catalog(books);
        fs::write(&self.path, body).map_err(|source| {
            tracing::error!(path = %self.path.display(), error = %source, "error saving catalog file");
            PersistError::Write {
                path: self.path.clone(),
                source,
            }
        })?;
        tracing::debug!(path = %self.path.display(), records = books.len(), "catalog saved");
        Ok(())
    }
}

/// Parses a whole file body.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn parse_catalog(body: &str) -> ParsedCatalog {
    let mut parsed = ParsedCatalog::default();
    let body = body.replace("\r\n", "\n");
    for (lineno, line) in body.split_terminator(['\n', '\r']).enumerate() {
        match decode_line(line) {
            Some(book) => parsed.books.push(book),
            None => {
                tracing::trace!(line = lineno + 1, "skipping malformed catalog line");
                parsed.skipped += 1;
            }
        }
    }
    parsed
}

/// Renders every record, one newline-terminated line each.
pub fn render_catalog(books: &[Book]) -> String {
    let mut out = String::new();
    for book in books {
        out.push_str(&encode_line(book));
        out.push('\n');
    }
    out
}

/// Decodes one line, ignoring surrounding whitespace.
///
/// Returns `None` unless the line splits into exactly [`FIELD_COUNT`] fields.
/// The status field is taken verbatim even when it is not a known status.
pub fn decode_line(line: &str) -> Option<Book> {
    let mut fields = line.trim().split(DELIMITER);
    let title = fields.next()?;
    let author = fields.next()?;
    let isbn = fields.next()?;
    let status = fields.next()?;
    if fields.next().is_some() {
        return None;
    }

    Some(Book::new(title, author, isbn).with_status(BookStatus::from(status)))
}

/// Encodes one record without the trailing newline.
pub fn encode_line(book: &Book) -> String {
    let fields = [
        book.title.as_str(),
        book.author.as_str(),
        book.isbn.as_str(),
        book.status.as_str(),
    ];
    if fields.iter().any(|f| f.contains([DELIMITER, '\n', '\r'])) {
        tracing::warn!(
            isbn = %book.isbn,
            "field contains a delimiter or line break and will not load back intact"
        );
    }
    fields.join("|")
}
