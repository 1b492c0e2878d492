//! Input validators
//!
//! Each validator turns one line of operator input into a typed value or a
//! message explaining what was wrong. The session re-prompts until the
//! validator accepts.

use crate::types::{AccountNo, Amount, Gender};
use chrono::NaiveDate;
use thiserror::Error;

/// Date format accepted for dates of birth
pub const DOB_FORMAT: &str = "%d/%m/%Y";

/// Rejected operator input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Account ID : {input} must be an integer")]
    AccountIdNotInteger { input: String },

    #[error("ID cannot be negative")]
    NegativeAccountId,

    #[error("ID must be greater than zero")]
    ZeroAccountId,

    #[error("Invalid input. Please enter digits only")]
    AmountNotInteger,

    #[error("Entered money value must be greater than zero")]
    AmountNotPositive,

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Invalid date format. Please use [DD/MM/YYYY]")]
    InvalidDate,

    #[error("Enter proper gender [M/F]")]
    InvalidGender,

    #[error("Enter valid email address.")]
    InvalidEmail,

    #[error("Incorrect phone number format. Try again.")]
    InvalidPhone,
}

pub fn account_id(input: &str) -> Result<AccountNo, ValidationError> {
    let input = input.trim();
    let value: i128 = input
        .parse()
        .map_err(|_| ValidationError::AccountIdNotInteger {
            input: input.to_string(),
        })?;
    if value < 0 {
        return Err(ValidationError::NegativeAccountId);
    }
    if value == 0 {
        return Err(ValidationError::ZeroAccountId);
    }
    AccountNo::try_from(value).map_err(|_| ValidationError::AccountIdNotInteger {
        input: input.to_string(),
    })
}

pub fn amount(input: &str) -> Result<Amount, ValidationError> {
    let value: i128 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::AmountNotInteger)?;
    if value <= 0 {
        return Err(ValidationError::AmountNotPositive);
    }
    Amount::try_from(value).map_err(|_| ValidationError::AmountNotInteger)
}

pub fn name(input: &str) -> Result<String, ValidationError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name.to_string())
}

/// Parse a `DD/MM/YYYY` calendar date
pub fn date_of_birth(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), DOB_FORMAT).map_err(|_| ValidationError::InvalidDate)
}

/// Accepts exactly `M`, `F`, `Male` or `Female`
pub fn gender(input: &str) -> Result<Gender, ValidationError> {
    match input.trim() {
        "M" | "Male" => Ok(Gender::Male),
        "F" | "Female" => Ok(Gender::Female),
        _ => Err(ValidationError::InvalidGender),
    }
}

/// Accepts `local@domain.tld` shaped addresses
pub fn email(input: &str) -> Result<String, ValidationError> {
    let email = input.trim();
    let (local, domain) = email.split_once('@').ok_or(ValidationError::InvalidEmail)?;
    let (host, tld) = domain.rsplit_once('.').ok_or(ValidationError::InvalidEmail)?;

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c));
    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ".-".contains(c));
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphanumeric());

    if local_ok && host_ok && tld_ok {
        Ok(email.to_string())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Ten digits, not starting with zero
pub fn phone(input: &str) -> Result<String, ValidationError> {
    let phone = input.trim();
    let valid = phone.len() == 10
        && phone.chars().all(|c| c.is_ascii_digit())
        && !phone.starts_with('0');
    if valid {
        Ok(phone.to_string())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}
