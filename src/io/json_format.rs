//! JSON format handling for the record file
//!
//! The collection is stored as a single JSON array of account objects,
//! indented with four spaces. Key order is not significant on input.

use crate::types::{Account, LedgerError};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Parse a JSON array of accounts
pub fn parse_accounts(content: &str) -> Result<Vec<Account>, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse stored content
///
/// Content that is not JSON at all, including empty or truncated text, is
/// treated as an empty collection. Well-formed JSON that does not hold
/// account records is an error, so the next save cannot overwrite it.
/// `source` names the content in log and error messages.
pub fn parse_stored_accounts(
    content: &str,
    source: &str,
) -> Result<Vec<Account>, LedgerError> {
    match parse_accounts(content) {
        Ok(accounts) => Ok(accounts),
        Err(error) if error.is_data() => {
            log::error!("{source} does not hold account records: {error}");
            Err(LedgerError::Serialization {
                message: format!("{source} does not hold account records: {error}"),
            })
        }
        Err(error) => {
            log::error!("{source} is corrupted, starting with no accounts: {error}");
            Ok(Vec::new())
        }
    }
}

/// Render accounts as an indented JSON array
pub fn render_accounts(accounts: &[Account]) -> Result<String, LedgerError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    accounts.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(|error| LedgerError::Serialization {
        message: error.to_string(),
    })
}
