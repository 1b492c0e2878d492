//! Types module
//!
//! Contains core data structures used throughout the application.
//! - `account`: Account record, holder details and identifiers
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;

pub use account::{Account, AccountDetails, AccountNo, Amount, Gender};
pub use error::LedgerError;
