//! Core business logic module
//!
//! This module contains the ledger components:
//! - `traits` - Storage abstraction for interchangeable record stores
//! - `factory` - Account number assignment and record construction
//! - `repository` - In-memory account collection
//! - `balance` - Deposit and withdrawal rules
//! - `ledger` - Orchestration of the above with persistence after each change

pub mod balance;
pub mod factory;
pub mod ledger;
pub mod repository;
pub mod traits;

pub use factory::FIRST_ACCOUNT_NO;
pub use ledger::Ledger;
pub use repository::AccountRepository;
pub use traits::RecordStore;
