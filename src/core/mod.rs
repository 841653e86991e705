//! In-memory catalog store and index helpers.

/// ISBN position index.
pub mod indices;
/// Authoritative ordered catalog.
pub mod store;
