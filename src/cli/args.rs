//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{inventory::InventoryConfig, persist::flatfile::DEFAULT_PATH};

/// Single-user library catalog manager.
///
/// Without a subcommand an interactive menu is started.
#[derive(Parser, Debug)]
#[command(name = "bookcat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Catalog file
    #[arg(long, short, default_value = DEFAULT_PATH)]
    pub file: PathBuf,

    /// Start with an empty catalog if the file exists but cannot be read
    #[arg(long)]
    pub lenient_load: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// One-shot command; omit for the interactive menu
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// One-shot operations.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Catalog a new book
    Add {
        /// Book title
        title: String,
        /// Book author
        author: String,
        /// Identifying ISBN
        isbn: String,
    },

    /// Lend out a book
    Issue {
        /// ISBN of the book
        isbn: String,
    },

    /// Take back a lent book
    Return {
        /// ISBN of the book
        isbn: String,
    },

    /// Show every book
    List {
        /// Print JSON instead of text lines
        #[arg(long)]
        json: bool,
    },

    /// Find books by title substring or exact ISBN
    Search {
        /// Case-insensitive title fragment
        #[arg(long, conflicts_with = "isbn", required_unless_present = "isbn")]
        title: Option<String>,
        /// Exact ISBN
        #[arg(long)]
        isbn: Option<String>,
        /// Print JSON instead of text lines
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Inventory settings selected on the command line.
    pub fn inventory_config(&self) -> InventoryConfig {
        InventoryConfig {
            path: self.file.clone(),
            lenient_load: self.lenient_load,
        }
    }
}
