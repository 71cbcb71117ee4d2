//! Account model
//!
//! Snapshot of an account as listed by the budgeting API.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Milliunits;

/// Type of financial account, using the API's camelCase names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountType {
    Checking,
    Savings,
    Cash,
    /// Credit card, the only type the alert inspects
    CreditCard,
    LineOfCredit,
    OtherAsset,
    OtherLiability,
    Mortgage,
    AutoLoan,
    StudentLoan,
    PersonalLoan,
    MedicalDebt,
    OtherDebt,
    /// Any type this crate does not know about yet
    #[serde(other)]
    Other,
}

impl AccountType {
    pub fn is_credit_card(&self) -> bool {
        matches!(self, Self::CreditCard)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Checking => "Checking",
            Self::Savings => "Savings",
            Self::Cash => "Cash",
            Self::CreditCard => "Credit Card",
            Self::LineOfCredit => "Line of Credit",
            Self::OtherAsset => "Other Asset",
            Self::OtherLiability => "Other Liability",
            Self::Mortgage => "Mortgage",
            Self::AutoLoan => "Auto Loan",
            Self::StudentLoan => "Student Loan",
            Self::PersonalLoan => "Personal Loan",
            Self::MedicalDebt => "Medical Debt",
            Self::OtherDebt => "Other Debt",
            Self::Other => "Other",
        };
        f.write_str(label)
    }
}

/// A financial account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Display name (e.g., "Chase Sapphire")
    pub name: String,

    /// Type of account
    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Current balance; negative for money owed on credit accounts
    #[serde(default)]
    pub balance: Milliunits,

    #[serde(default)]
    pub closed: bool,

    #[serde(default)]
    pub deleted: bool,
}

impl Account {
    /// Create an account snapshot with a zero balance
    pub fn new(id: impl Into<AccountId>, name: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            account_type,
            balance: Milliunits::zero(),
            closed: false,
            deleted: false,
        }
    }

    /// Compare against a user-supplied name, ignoring surrounding whitespace
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.trim() == name.trim()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_account() {
        let json = r#"{
            "id": "acc-1",
            "name": "Visa ",
            "type": "creditCard",
            "on_budget": true,
            "closed": false,
            "balance": -125000,
            "deleted": false
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.id.as_str(), "acc-1");
        assert_eq!(account.account_type, AccountType::CreditCard);
        assert_eq!(account.balance.value(), -125_000);
        assert!(account.name_matches("  Visa"));
    }

    #[test]
    fn test_unknown_account_type() {
        let account: Account =
            serde_json::from_str(r#"{"id": "a", "name": "Crypto", "type": "cryptoWallet"}"#)
                .unwrap();
        assert_eq!(account.account_type, AccountType::Other);
        assert!(!account.closed);
    }

    #[test]
    fn test_type_names() {
        let parsed: AccountType = serde_json::from_str("\"lineOfCredit\"").unwrap();
        assert_eq!(parsed, AccountType::LineOfCredit);
        assert!(!parsed.is_credit_card());
    }

    #[test]
    fn test_display() {
        let account = Account::new("a", "Amex", AccountType::CreditCard);
        assert_eq!(format!("{}", account), "Amex (Credit Card)");
    }
}
