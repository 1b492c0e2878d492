//! Account-related types for the bank ledger
//!
//! This module defines the Account record as it is kept in memory and
//! persisted to the JSON record file, together with the validated fields
//! used to open a new account.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account number
///
/// Assigned by the ledger, starting at 1001.
pub type AccountNo = u64;

/// Money amount in whole currency units
pub type Amount = u64;

/// Gender of the account holder
///
/// Serialized as `Male`/`Female`. Record files written with the short
/// `M`/`F` spelling are accepted on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(alias = "M")]
    Male,
    #[serde(alias = "F")]
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("Male"),
            Gender::Female => f.write_str("Female"),
        }
    }
}

/// Validated holder details collected when opening an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDetails {
    pub name: String,
    pub dob: NaiveDate,
    pub gender: Gender,
    pub email: String,
    pub phone_no: String,
}

/// A customer account record
///
/// Field names match the keys of the persisted JSON objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique, immutable account number
    pub account_no: AccountNo,

    /// Full name of the holder
    pub name: String,

    /// Date of birth, stored as `YYYY-MM-DD`
    #[serde(deserialize_with = "stored_date::deserialize")]
    pub dob: NaiveDate,

    pub gender: Gender,

    pub email: String,

    /// Ten digit phone number without country prefix
    pub phone_no: String,

    /// Current balance
    ///
    /// Only changed by deposits and withdrawals. The unsigned type keeps
    /// it from ever going below zero.
    pub balance: Amount,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new(account_no: AccountNo, details: AccountDetails) -> Self {
        Account {
            account_no,
            name: details.name,
            dob: details.dob,
            gender: details.gender,
            email: details.email,
            phone_no: details.phone_no,
            balance: 0,
        }
    }
}

/// Reading of stored dates of birth
///
/// Older record files hold a full timestamp such as `1990-01-02 00:00:00`.
/// Only the date part is kept.
mod stored_date {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer};

    const DATE: &str = "%Y-%m-%d";
    const TIMESTAMPS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        if let Ok(date) = NaiveDate::parse_from_str(&text, DATE) {
            return Ok(date);
        }
        TIMESTAMPS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(&text, format).ok())
            .map(|timestamp| timestamp.date())
            .ok_or_else(|| de::Error::custom(format!("invalid date of birth '{text}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn details() -> AccountDetails {
        AccountDetails {
            name: "Asha Rao".to_string(),
            dob: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            gender: Gender::Female,
            email: "asha@example.com".to_string(),
            phone_no: "9876543210".to_string(),
        }
    }

    #[test]
    fn test_new_account_starts_with_zero_balance() {
        let account = Account::new(1001, details());

        assert_eq!(account.account_no, 1001);
        assert_eq!(account.name, "Asha Rao");
        assert_eq!(account.balance, 0);
    }

    #[test]
    fn test_serializes_with_record_file_keys() {
        let account = Account::new(1001, details());
        let value = serde_json::to_value(&account).unwrap();

        assert_eq!(value["account_no"], 1001);
        assert_eq!(value["dob"], "1990-04-12");
        assert_eq!(value["gender"], "Female");
        assert_eq!(value["phone_no"], "9876543210");
        assert_eq!(value["balance"], 0);
    }

    #[rstest]
    #[case::short_male("\"M\"", Gender::Male)]
    #[case::long_male("\"Male\"", Gender::Male)]
    #[case::short_female("\"F\"", Gender::Female)]
    #[case::long_female("\"Female\"", Gender::Female)]
    fn test_gender_accepts_both_spellings(#[case] json: &str, #[case] expected: Gender) {
        let gender: Gender = serde_json::from_str(json).unwrap();
        assert_eq!(gender, expected);
    }

    #[test]
    fn test_deserializes_any_key_order() {
        let json = r#"{
            "balance": 250,
            "phone_no": "9123456789",
            "email": "ravi@example.org",
            "gender": "M",
            "dob": "1985-12-01",
            "name": "Ravi Kumar",
            "account_no": 1002
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();

        assert_eq!(account.account_no, 1002);
        assert_eq!(account.gender, Gender::Male);
        assert_eq!(account.balance, 250);
    }

    #[rstest]
    #[case::date("1990-01-02")]
    #[case::timestamp("1990-01-02 00:00:00")]
    #[case::fractional_timestamp("1990-01-02 00:00:00.000000")]
    #[case::iso_timestamp("1990-01-02T08:30:00")]
    fn test_reads_stored_dob_formats(#[case] dob: &str) {
        let json = format!(
            r#"{{"account_no":1001,"name":"A","dob":"{dob}","gender":"F",
            "email":"a@b.co","phone_no":"9123456789","balance":0}}"#
        );

        let account: Account = serde_json::from_str(&json).unwrap();

        assert_eq!(account.dob, NaiveDate::from_ymd_opt(1990, 1, 2).unwrap());
        assert_eq!(serde_json::to_value(&account).unwrap()["dob"], "1990-01-02");
    }

    #[rstest]
    #[case::day_first("02/01/1990")]
    #[case::impossible_day("1990-02-30")]
    #[case::trailing_text("1990-01-02 later")]
    fn test_rejects_unreadable_dob(#[case] dob: &str) {
        let json = format!(
            r#"{{"account_no":1001,"name":"A","dob":"{dob}","gender":"F",
            "email":"a@b.co","phone_no":"9123456789","balance":0}}"#
        );

        assert!(serde_json::from_str::<Account>(&json).is_err());
    }

    #[test]
    fn test_rejects_negative_balance() {
        let json = r#"{"account_no":1001,"name":"A","dob":"2000-01-01","gender":"M",
            "email":"a@b.co","phone_no":"9123456789","balance":-5}"#;

        assert!(serde_json::from_str::<Account>(json).is_err());
    }
}
