use hashbrown::HashMap;

use crate::types::{Isbn, Slot};

/// ISBN to catalog slots, each list kept in ascending slot order.
pub type IsbnIndex = HashMap<Isbn, Vec<Slot>>;

/// Records `slot` under `isbn`, keeping the list sorted.
pub fn insert_slot(index: &mut IsbnIndex, isbn: &str, slot: Slot) {
    let slots = index.entry_ref(isbn).or_default();
    if let Err(pos) = slots.binary_search(&slot) {
        slots.insert(pos, slot);
    }
}

/// Drops `slot` from `isbn`, removing the key once it has no slots left.
pub fn remove_slot(index: &mut IsbnIndex, isbn: &str, slot: Slot) {
    let Some(slots) = index.get_mut(isbn) else {
        return;
    };
    if let Ok(pos) = slots.binary_search(&slot) {
        slots.remove(pos);
    }
    if slots.is_empty() {
        index.remove(isbn);
    }
}
