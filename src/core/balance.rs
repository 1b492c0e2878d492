//! Balance operations
//!
//! Deposits and withdrawals against a single located account. A failed
//! operation never changes the balance.

use crate::types::{Account, Amount, LedgerError};

/// Deposit funds into an account
///
/// Uses checked arithmetic so the balance is never silently wrapped.
///
/// # Returns
///
/// The new balance.
///
/// # Errors
///
/// Returns an error if:
/// - The amount is zero
/// - Adding the amount would overflow the balance
pub fn deposit(account: &mut Account, amount: Amount) -> Result<Amount, LedgerError> {
    if amount == 0 {
        return Err(LedgerError::invalid_amount(amount));
    }

    let new_balance = account
        .balance
        .checked_add(amount)
        .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", account.account_no))?;

    account.balance = new_balance;
    Ok(new_balance)
}

/// Withdraw funds from an account
///
/// # Returns
///
/// The new balance.
///
/// # Errors
///
/// Returns an error if:
/// - The amount is zero
/// - The amount exceeds the current balance
pub fn withdraw(account: &mut Account, amount: Amount) -> Result<Amount, LedgerError> {
    if amount == 0 {
        return Err(LedgerError::invalid_amount(amount));
    }

    let new_balance = account.balance.checked_sub(amount).ok_or_else(|| {
        LedgerError::insufficient_funds(account.account_no, account.balance, amount)
    })?;

    account.balance = new_balance;
    Ok(new_balance)
}
