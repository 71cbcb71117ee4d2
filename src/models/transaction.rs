//! Transaction model
//!
//! Represents a transaction on one account as returned by the budgeting API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, TransactionId};
use super::money::Milliunits;

/// Cleared status of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClearedStatus {
    /// Entered but not yet seen by the bank
    #[default]
    Uncleared,
    /// Transaction has cleared the bank
    Cleared,
    /// Transaction has been reconciled and is locked
    Reconciled,
}

impl fmt::Display for ClearedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uncleared => write!(f, "uncleared"),
            Self::Cleared => write!(f, "cleared"),
            Self::Reconciled => write!(f, "reconciled"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// The account this transaction belongs to
    pub account_id: AccountId,

    /// Transaction date
    pub date: NaiveDate,

    /// Amount (positive for inflow, negative for outflow)
    pub amount: Milliunits,

    /// Payee name; the API sends `null` for transactions without a payee
    #[serde(default)]
    pub payee_name: Option<String>,

    #[serde(default)]
    pub cleared: ClearedStatus,

    #[serde(default)]
    pub memo: Option<String>,
}

impl Transaction {
    /// Create a transaction with all fields the alert looks at
    pub fn new(
        account_id: impl Into<AccountId>,
        date: NaiveDate,
        amount: Milliunits,
        payee_name: Option<&str>,
        cleared: ClearedStatus,
    ) -> Self {
        let account_id = account_id.into();
        let id = TransactionId::new(format!("{}-{}-{}", account_id, date, amount.value()));
        Self {
            id,
            account_id,
            date,
            amount,
            payee_name: payee_name.map(str::to_string),
            cleared,
            memo: None,
        }
    }

    /// Payee name, or the empty string when the API sent none
    pub fn payee(&self) -> &str {
        self.payee_name.as_deref().unwrap_or("")
    }

    /// Check if this is an inflow (positive amount)
    pub fn is_inflow(&self) -> bool {
        self.amount.is_positive()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date,
            self.payee(),
            self.amount,
            self.cleared
        )
    }
}
