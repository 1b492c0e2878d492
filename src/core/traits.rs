//! Core traits for account persistence
//!
//! This module defines the storage abstraction that lets the ledger run
//! against the JSON record file or an in-memory backend interchangeably.

use crate::types::{Account, LedgerError};

/// Trait for loading and saving the whole account collection
///
/// The collection is always read and written as a unit. Implementations
/// degrade to an empty collection when there is nothing stored yet or the
/// stored content cannot be parsed.
pub trait RecordStore {
    /// Load every stored account, in insertion order
    fn load(&self) -> Result<Vec<Account>, LedgerError>;

    /// Replace the stored collection with `accounts`
    fn save(&self, accounts: &[Account]) -> Result<(), LedgerError>;
}
