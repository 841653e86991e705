//! Single-user library catalog with write-through flat file persistence.
//!
//! # Examples
//!
//! In-memory usage with [`core::store::Catalog`]:
//! ```
//! use bookcat::{book::Book, core::store::{Catalog, StoreError}};
//!
//! let mut catalog = Catalog::new();
//! catalog.insert_unique(Book::new("The Great Gatsby", "Fitzgerald", "978")).expect("insert");
//! assert_eq!(catalog.search_by_title("the").len(), 1);
//!
//! catalog.issue("978").expect("issue");
//! assert_eq!(catalog.issue("978"), Err(StoreError::AlreadyIssued("978".to_string())));
//! ```
//!
//! File-backed usage with [`inventory::Inventory`]:
//! ```no_run
//! use bookcat::inventory::{Inventory, InventoryConfig};
//!
//! let mut inventory = Inventory::open(InventoryConfig::default()).expect("open books.txt");
//! inventory.add_book("Dune", "Herbert", "111").expect("add");
//! inventory.issue("111").expect("issue");
//! inventory.return_book("111").expect("return");
//! ```

/// Catalog entry record.
pub mod book;
/// Command-line menu and subcommands.
pub mod cli;
/// In-memory catalog store and index helpers.
pub mod core;
/// Caller-facing inventory with write-through saves.
pub mod inventory;
/// Persistence abstraction and flat file implementation.
pub mod persist;
/// Shared aliases and the status enum.
pub mod types;
