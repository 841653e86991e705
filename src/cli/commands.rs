//! Subcommand dispatch and shared message rendering.

use std::io::{self, Write};

use tracing_subscriber::EnvFilter;

use crate::{
    book::Book,
    core::store::StoreError,
    inventory::{Inventory, InventoryError, InventoryResult},
};

use super::{
    args::{Cli, Command},
    errors::CliResult,
    menu::Menu,
};

/// Installs the stderr log subscriber. `RUST_LOG` wins over `default_filter`.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Opens the configured inventory and runs the selected command or the menu.
pub fn run(cli: Cli) -> CliResult<()> {
    let mut inventory = Inventory::open(cli.inventory_config())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let Some(command) = cli.command else {
        let stdin = io::stdin();
        Menu::new(&mut inventory, stdin.lock(), out).run()?;
        return Ok(());
    };

    match command {
        Command::Add {
            title,
            author,
            isbn,
        } => report_mutation(
            &mut out,
            inventory.add_book(title, author, isbn),
            "Book added successfully.",
        )?,
        Command::Issue { isbn } => {
            report_mutation(&mut out, inventory.issue(&isbn), "Book issued.")?
        }
        Command::Return { isbn } => {
            report_mutation(&mut out, inventory.return_book(&isbn), "Book returned.")?
        }
        Command::List { json } => {
            let books: Vec<&Book> = inventory.list_all().iter().collect();
            if json {
                write_json(&mut out, &books)?;
            } else if books.is_empty() {
                writeln!(out, "No books in library.")?;
            } else {
                write_lines(&mut out, &books)?;
            }
        }
        Command::Search { title, isbn, json } => {
            let books = match (title, isbn) {
                (Some(query), _) => inventory.search_by_title(&query),
                (None, Some(isbn)) => inventory.find_by_isbn(&isbn).into_iter().collect(),
                (None, None) => Vec::new(),
            };
            if json {
                write_json(&mut out, &books)?;
            } else if books.is_empty() {
                writeln!(out, "No books found.")?;
            } else {
                write_lines(&mut out, &books)?;
            }
        }
    }
    Ok(())
}

/// User-facing text for a rejected operation.
pub(crate) fn store_message(err: &StoreError) -> &'static str {
    match err {
        StoreError::NotFound(_) => "Book not found.",
        StoreError::AlreadyExists(_) => "Book with this ISBN already exists.",
        StoreError::AlreadyIssued(_) => "Book already issued.",
        StoreError::NotIssued(_) => "Book is not issued.",
    }
}

/// Prints the outcome of a mutating call.
///
/// A save failure is reported and then the success line follows, since the
/// change did take effect in memory.
pub(crate) fn report_mutation<W: Write>(
    out: &mut W,
    result: InventoryResult<Book>,
    success: &str,
) -> io::Result<()> {
    match result {
        Ok(_) => writeln!(out, "{success}"),
        Err(InventoryError::Store(err)) => writeln!(out, "{}", store_message(&err)),
        Err(InventoryError::Persist(err)) => {
            writeln!(out, "Error saving file: {err}")?;
            writeln!(out, "{success}")
        }
    }
}

pub(crate) fn write_lines<W: Write>(out: &mut W, books: &[&Book]) -> io::Result<()> {
    for book in books {
        writeln!(out, "{book}")?;
    }
    Ok(())
}

pub(crate) fn write_json<W: Write>(out: &mut W, books: &[&Book]) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, books)?;
    writeln!(out)?;
    Ok(())
}
