//! Bank Ledger Library
//! # Overview
//!
//! This library provides a single-user account ledger driven from an
//! interactive menu. The full record set is rewritten to a JSON file after
//! every change.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Gender, LedgerError, etc.)
//! - [`core`] - Business logic components:
//!   - [`core::factory`] - Account number assignment and record construction
//!   - [`core::repository`] - In-memory account collection
//!   - [`core::balance`] - Deposits and withdrawals
//!   - [`core::ledger`] - Orchestration with persistence after every mutation
//! - [`io`] - Record stores (JSON file, in-memory)
//! - [`session`] - Menu loop, input validation and display
//! - [`cli`] - CLI arguments parsing
//! - [`logging`] - Log file setup
//!
//! # Invariants
//!
//! - Account numbers are unique and start at 1001
//! - Balances never go below zero; a refused withdrawal changes nothing
//! - Missing or corrupted record files load as an empty collection; record
//!   files of the wrong shape are refused rather than overwritten

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod session;
pub mod types;

pub use crate::core::{AccountRepository, Ledger, RecordStore};
pub use crate::io::{JsonFileStore, MemoryStore};
pub use crate::session::Session;
pub use crate::types::{Account, AccountDetails, AccountNo, Amount, Gender, LedgerError};
