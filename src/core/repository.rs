//! Account repository
//!
//! This module provides the `AccountRepository` struct which holds the loaded
//! account collection for the lifetime of the process.
//!
//! The AccountRepository is responsible for:
//! - Looking accounts up by number
//! - Appending new accounts in insertion order
//! - Removing accounts by number while keeping the order of the rest
//! - Handing out account numbers that are never reused within a session

use crate::core::factory;
use crate::types::{Account, AccountNo, LedgerError};

/// In-memory account collection
///
/// Accounts are kept in insertion order, which is also the order they are
/// persisted in. Lookups are linear scans.
#[derive(Debug, Default)]
pub struct AccountRepository {
    accounts: Vec<Account>,

    /// Highest account number seen or issued, kept across deletions
    high_water: Option<AccountNo>,
}

impl AccountRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        AccountRepository {
            accounts: Vec::new(),
            high_water: None,
        }
    }

    /// Create a repository holding a loaded collection
    pub fn from_accounts(accounts: Vec<Account>) -> Self {
        let high_water = accounts.iter().map(|account| account.account_no).max();
        AccountRepository {
            accounts,
            high_water,
        }
    }

    /// Find the first account with the given number
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account matches.
    pub fn find_by_id(&self, account_no: AccountNo) -> Result<&Account, LedgerError> {
        self.accounts
            .iter()
            .find(|account| account.account_no == account_no)
            .ok_or_else(|| LedgerError::account_not_found(account_no))
    }

    /// Find the first account with the given number for modification
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account matches.
    pub fn find_by_id_mut(&mut self, account_no: AccountNo) -> Result<&mut Account, LedgerError> {
        self.accounts
            .iter_mut()
            .find(|account| account.account_no == account_no)
            .ok_or_else(|| LedgerError::account_not_found(account_no))
    }

    /// Append an account at the end of the collection
    ///
    /// Uniqueness of the number is not checked here; numbers handed out by
    /// [`next_account_no`](Self::next_account_no) are always unique.
    pub fn insert(&mut self, account: Account) -> &Account {
        self.high_water = self.high_water.max(Some(account.account_no));
        self.accounts.push(account);
        &self.accounts[self.accounts.len() - 1]
    }

    /// Remove the first account with the given number and return it
    ///
    /// The relative order of the remaining accounts is preserved.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` and leaves the collection untouched if no
    /// account matches.
    pub fn delete_by_id(&mut self, account_no: AccountNo) -> Result<Account, LedgerError> {
        let position = self
            .accounts
            .iter()
            .position(|account| account.account_no == account_no)
            .ok_or_else(|| LedgerError::account_not_found(account_no))?;
        Ok(self.accounts.remove(position))
    }

    /// Number the next created account will receive
    ///
    /// One past the highest number ever seen by this repository, so a
    /// number freed by a deletion is not handed out again.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` once `AccountNo::MAX` has been seen.
    pub fn next_account_no(&self) -> Result<AccountNo, LedgerError> {
        let from_collection = factory::next_id(&self.accounts)?;
        match self.high_water {
            Some(highest) => Ok(from_collection.max(factory::following(highest)?)),
            None => Ok(from_collection),
        }
    }

    /// All accounts in insertion order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
