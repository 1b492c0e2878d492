//! File-backed record store
//!
//! Keeps the whole account collection in one JSON file.
//!
//! # Load policy
//!
//! - Missing file: empty collection (first run)
//! - Content that is not JSON (empty, truncated, not UTF-8): empty
//!   collection, logged as an error. The corrupted file is not backed up and
//!   is overwritten by the next save.
//! - Well-formed JSON that does not hold account records: `Serialization`
//!   error, the file is left untouched
//! - Any other I/O failure is returned to the caller
//!
//! # Save policy
//!
//! The collection is written to a temporary file next to the target which
//! is then renamed over it, so a failed write leaves the previous file intact.

use crate::core::RecordStore;
use crate::io::json_format::{parse_stored_accounts, render_accounts};
use crate::types::{Account, LedgerError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Record store writing to a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> Result<PathBuf, LedgerError> {
        let filename = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| LedgerError::Io {
                message: format!("Invalid record file path '{}'", self.path.display()),
            })?;
        Ok(self.path.with_file_name(format!("{filename}.tmp")))
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Account>, LedgerError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                log::warn!(
                    "Record file '{}' not found, starting with no accounts",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(error) if error.kind() == ErrorKind::InvalidData => {
                // Not UTF-8
                log::error!(
                    "Record file '{}' is corrupted, starting with no accounts: {error}",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(error) => {
                return Err(LedgerError::Io {
                    message: format!("Failed to read '{}': {error}", self.path.display()),
                })
            }
        };

        log::info!("Loading record file '{}'", self.path.display());
        let source = format!("Record file '{}'", self.path.display());
        parse_stored_accounts(&content, &source)
    }

    fn save(&self, accounts: &[Account]) -> Result<(), LedgerError> {
        log::debug!(
            "Saving {} accounts to '{}'",
            accounts.len(),
            self.path.display()
        );
        let content = render_accounts(accounts)?;

        let temp_path = self.temp_path()?;
        fs::write(&temp_path, content).map_err(|error| LedgerError::Io {
            message: format!("Failed to write '{}': {error}", temp_path.display()),
        })?;
        fs::rename(&temp_path, &self.path).map_err(|error| LedgerError::Io {
            message: format!("Failed to replace '{}': {error}", self.path.display()),
        })?;

        Ok(())
    }
}
