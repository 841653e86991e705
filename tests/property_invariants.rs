use proptest::prelude::*;
use tempfile::TempDir;

use bookcat::{
    book::Book,
    core::store::Catalog,
    inventory::{Inventory, InventoryConfig},
    persist::{CatalogSink, flatfile::FlatFileSink},
    types::BookStatus,
};

/// Field text that survives the flat file format: no delimiter, no line
/// breaks, no surrounding whitespace.
fn field() -> impl Strategy<Value = String> {
    "[A-Za-z0-9.,'-]([A-Za-z0-9 .,'-]{0,18}[A-Za-z0-9.,'-])?"
}

fn status() -> impl Strategy<Value = BookStatus> {
    prop_oneof![
        Just(BookStatus::Available),
        Just(BookStatus::Issued),
        "[a-z]{1,8}".prop_map(BookStatus::from),
    ]
}

fn book() -> impl Strategy<Value = Book> {
    (field(), field(), "[0-9]{1,13}", status())
        .prop_map(|(title, author, isbn, status)| Book::new(title, author, isbn).with_status(status))
}

#[derive(Debug, Clone)]
enum Action {
    Add { isbn: u8 },
    Issue { isbn: u8 },
    Return { isbn: u8 },
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0u8..12).prop_map(|isbn| Action::Add { isbn }),
        (0u8..12).prop_map(|isbn| Action::Issue { isbn }),
        (0u8..12).prop_map(|isbn| Action::Return { isbn }),
    ]
}

fn full_scan(catalog: &Catalog, isbn: &str) -> Option<Book> {
    catalog.list_all().iter().find(|b| b.isbn == isbn).cloned()
}

proptest! {
    #[test]
    fn flat_file_round_trip_preserves_sequence(books in prop::collection::vec(book(), 0..40)) {
        let tmp = TempDir::new().expect("tmp");
        let mut sink = FlatFileSink::new(tmp.path().join("books.txt"));

        sink.save(&books).expect("save");
        prop_assert_eq!(sink.load().expect("load"), books);
    }

    #[test]
    fn indexed_lookup_matches_linear_scan(books in prop::collection::vec(book(), 0..60), probe in "[0-9]{1,2}") {
        let catalog = Catalog::from_books(books);
        prop_assert_eq!(catalog.find_by_isbn(&probe).cloned(), full_scan(&catalog, &probe));
        for b in catalog.list_all() {
            prop_assert_eq!(catalog.find_by_isbn(&b.isbn).cloned(), full_scan(&catalog, &b.isbn));
        }
    }

    #[test]
    fn workflows_keep_isbns_unique_and_file_in_sync(actions in prop::collection::vec(action_strategy(), 1..60)) {
        let tmp = TempDir::new().expect("tmp");
        let config = InventoryConfig {
            path: tmp.path().join("books.txt"),
            ..InventoryConfig::default()
        };
        let mut inventory = Inventory::open(config.clone()).expect("open");

        for action in actions {
            match action {
                Action::Add { isbn } => {
                    let _ = inventory.add_book(format!("Title {isbn}"), "Author", isbn.to_string());
                }
                Action::Issue { isbn } => {
                    let _ = inventory.issue(&isbn.to_string());
                }
                Action::Return { isbn } => {
                    let _ = inventory.return_book(&isbn.to_string());
                }
            }

            let mut seen: Vec<&str> = inventory.list_all().iter().map(|b| b.isbn.as_str()).collect();
            let total = seen.len();
            seen.sort_unstable();
            seen.dedup();
            prop_assert_eq!(seen.len(), total);
            for b in inventory.list_all() {
                prop_assert!(b.status == BookStatus::Available || b.status == BookStatus::Issued);
            }
        }

        let reloaded = Inventory::open(config).expect("reopen");
        prop_assert_eq!(reloaded.list_all(), inventory.list_all());
    }
}
