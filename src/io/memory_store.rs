//! In-memory record store
//!
//! Holds the serialized collection in memory instead of on disk. Content
//! goes through the same JSON format and load policy as the file store.

use crate::core::RecordStore;
use crate::io::json_format::{parse_stored_accounts, render_accounts};
use crate::types::{Account, LedgerError};
use std::cell::RefCell;

/// Record store keeping the JSON text in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Stored text, `None` until the first save
    contents: RefCell<Option<String>>,
}

impl MemoryStore {
    /// Create a store with nothing saved yet
    pub fn new() -> Self {
        MemoryStore {
            contents: RefCell::new(None),
        }
    }

    /// Create a store holding previously saved text
    pub fn with_contents(contents: &str) -> Self {
        MemoryStore {
            contents: RefCell::new(Some(contents.to_string())),
        }
    }

    /// Currently stored text, empty if nothing was saved
    pub fn contents(&self) -> String {
        self.contents.borrow().clone().unwrap_or_default()
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Result<Vec<Account>, LedgerError> {
        match self.contents.borrow().as_deref() {
            Some(content) => parse_stored_accounts(content, "In-memory record store"),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, accounts: &[Account]) -> Result<(), LedgerError> {
        let rendered = render_accounts(accounts)?;
        *self.contents.borrow_mut() = Some(rendered);
        Ok(())
    }
}
