//! Milliunit amounts as reported by the budgeting API
//!
//! The API represents every amount as an integer number of milliunits
//! (1000 milliunits = one currency unit). Positive values are inflows to the
//! account, negative values are outflows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A signed amount in milliunits of the budget's currency
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Milliunits(i64);

impl Milliunits {
    /// Create an amount from raw milliunits
    ///
    /// # Examples
    /// ```
    /// use credit_alert::models::Milliunits;
    /// let amount = Milliunits::new(12_340); // 12.34
    /// assert!(amount.is_positive());
    /// ```
    pub const fn new(milliunits: i64) -> Self {
        Self(milliunits)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the raw milliunit value
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Whole currency units (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 1000
    }

    /// Hundredths of a unit (0-99), truncating the sub-cent digit
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 1000).abs() / 10
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Inflow to the account
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Outflow from the account
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Milliunits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl From<i64> for Milliunits {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
