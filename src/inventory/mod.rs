//! Caller-facing inventory: catalog plus write-through persistence.

/// Inventory handle, configuration and errors.
pub mod handle;

pub use handle::{Inventory, InventoryConfig, InventoryError, InventoryResult};
