//! Error types for the bank ledger
//!
//! This module defines the errors returned by the repository, the balance
//! operations and the record store. Errors carry enough context to be shown
//! to the operator as-is.
//!
//! # Error Categories
//!
//! - **Lookup Errors**: no account with the requested number
//! - **Balance Errors**: insufficient funds, zero amounts, overflow
//! - **Storage Errors**: I/O and JSON serialization failures

use crate::types::{AccountNo, Amount};
use thiserror::Error;

/// Main error type for the ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// No account with the requested number exists
    ///
    /// Recoverable: reported to the operator and the session continues.
    #[error("Account ID : {account_no} not found")]
    AccountNotFound { account_no: AccountNo },

    /// Withdrawal larger than the current balance
    ///
    /// The balance is left unchanged.
    #[error("Insufficient balance in account {account_no}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        account_no: AccountNo,
        balance: Amount,
        requested: Amount,
    },

    /// Deposits and withdrawals must move a positive amount
    #[error("Invalid amount {amount}: must be greater than zero")]
    InvalidAmount { amount: Amount },

    /// The balance would exceed the representable range
    #[error("Arithmetic overflow in {operation} for account {account_no}")]
    ArithmeticOverflow {
        operation: String,
        account_no: AccountNo,
    },

    /// I/O error while reading or writing the record file
    #[error("I/O error: {message}")]
    Io { message: String },

    /// The account collection could not be serialized
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(error: serde_json::Error) -> Self {
        LedgerError::Serialization {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an AccountNotFound error
    pub fn account_not_found(account_no: AccountNo) -> Self {
        LedgerError::AccountNotFound { account_no }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account_no: AccountNo, balance: Amount, requested: Amount) -> Self {
        LedgerError::InsufficientFunds {
            account_no,
            balance,
            requested,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Amount) -> Self {
        LedgerError::InvalidAmount { amount }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account_no: AccountNo) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account_no,
        }
    }
}
