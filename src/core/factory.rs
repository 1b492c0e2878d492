//! Account factory
//!
//! Assigns account numbers and builds new account records. The factory never
//! inserts the record it builds; that is the caller's job.

use crate::core::repository::AccountRepository;
use crate::types::{Account, AccountDetails, AccountNo, LedgerError};

/// Number given to the first account of an empty ledger
pub const FIRST_ACCOUNT_NO: AccountNo = 1001;

/// Next free account number for a collection
///
/// Returns one past the highest number present regardless of where that
/// account sits in the collection, or [`FIRST_ACCOUNT_NO`] when empty.
///
/// # Errors
///
/// Returns `ArithmeticOverflow` when the highest number is already
/// `AccountNo::MAX`.
pub fn next_id(accounts: &[Account]) -> Result<AccountNo, LedgerError> {
    match accounts.iter().map(|account| account.account_no).max() {
        Some(highest) => following(highest),
        None => Ok(FIRST_ACCOUNT_NO),
    }
}

/// Number after `highest`, or `ArithmeticOverflow` if there is none
pub(crate) fn following(highest: AccountNo) -> Result<AccountNo, LedgerError> {
    highest
        .checked_add(1)
        .ok_or_else(|| LedgerError::arithmetic_overflow("account number", highest))
}

/// Build a new zero-balance account numbered by the repository
pub fn create(
    details: AccountDetails,
    repository: &AccountRepository,
) -> Result<Account, LedgerError> {
    Ok(Account::new(repository.next_account_no()?, details))
}
