//! Ledger orchestration
//!
//! This module provides the `Ledger` that ties the account repository, the
//! factory and the balance operations to a record store.
//!
//! Every successful mutation is followed by a full save of the collection
//! before the call returns, so memory and storage agree after each
//! operation. A failed save is reported but the in-memory change stays.

use crate::core::traits::RecordStore;
use crate::core::{balance, factory, AccountRepository};
use crate::types::{Account, AccountDetails, AccountNo, Amount, LedgerError};

/// Account ledger backed by a record store
pub struct Ledger<S: RecordStore> {
    repository: AccountRepository,
    store: S,
}

impl<S: RecordStore> Ledger<S> {
    /// Open a ledger, loading the stored collection
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read or holds well-formed
    /// content that is not an account collection. Missing or corrupt content
    /// loads as an empty collection.
    pub fn open(store: S) -> Result<Self, LedgerError> {
        let accounts = store.load()?;
        log::info!("Ledger opened with {} accounts", accounts.len());
        Ok(Ledger {
            repository: AccountRepository::from_accounts(accounts),
            store,
        })
    }

    /// Create, insert and persist a new account
    pub fn open_account(&mut self, details: AccountDetails) -> Result<Account, LedgerError> {
        let account = factory::create(details, &self.repository)
            .inspect_err(|error| log::error!("Cannot number a new account: {error}"))?;
        let account = self.repository.insert(account).clone();
        self.persist()?;
        log::info!("Account created ID : {}", account.account_no);
        Ok(account)
    }

    /// Look an account up by number
    pub fn account(&self, account_no: AccountNo) -> Result<&Account, LedgerError> {
        self.repository
            .find_by_id(account_no)
            .inspect_err(|_| log::warn!("Account ID : {account_no} not found"))
    }

    /// Deposit into an account and persist
    ///
    /// # Returns
    ///
    /// The updated account.
    pub fn deposit(
        &mut self,
        account_no: AccountNo,
        amount: Amount,
    ) -> Result<Account, LedgerError> {
        let account = self.locate_mut(account_no)?;
        balance::deposit(account, amount)?;
        let account = account.clone();
        self.persist()?;
        log::info!("Deposit of {amount} into account {account_no} successful");
        Ok(account)
    }

    /// Withdraw from an account and persist
    ///
    /// Nothing is saved when the withdrawal is refused.
    pub fn withdraw(
        &mut self,
        account_no: AccountNo,
        amount: Amount,
    ) -> Result<Account, LedgerError> {
        let account = self.locate_mut(account_no)?;
        if let Err(error) = balance::withdraw(account, amount) {
            log::warn!("Withdrawal of {amount} from account {account_no} refused: {error}");
            return Err(error);
        }
        let account = account.clone();
        self.persist()?;
        log::info!("Withdrawal of {amount} from account {account_no} successful");
        Ok(account)
    }

    /// Delete an account and persist
    ///
    /// # Returns
    ///
    /// The removed account.
    pub fn close_account(&mut self, account_no: AccountNo) -> Result<Account, LedgerError> {
        let removed = self
            .repository
            .delete_by_id(account_no)
            .inspect_err(|_| log::warn!("Account ID : {account_no} not found"))?;
        self.persist()?;
        log::info!("Account ID : {account_no} deleted successfully");
        Ok(removed)
    }

    /// All accounts in insertion order
    pub fn accounts(&self) -> &[Account] {
        self.repository.accounts()
    }

    /// Record store the ledger saves to
    pub fn store(&self) -> &S {
        &self.store
    }

    fn locate_mut(&mut self, account_no: AccountNo) -> Result<&mut Account, LedgerError> {
        self.repository
            .find_by_id_mut(account_no)
            .inspect_err(|_| log::warn!("Account ID : {account_no} not found"))
    }

    fn persist(&self) -> Result<(), LedgerError> {
        self.store
            .save(self.repository.accounts())
            .inspect_err(|error| log::error!("Failed to save accounts: {error}"))
    }
}
