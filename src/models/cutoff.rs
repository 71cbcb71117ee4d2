//! Lookback window for payment detection

use chrono::{Days, NaiveDate};
use std::fmt;

/// Earliest date a transaction may carry and still be considered
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CutoffDate(NaiveDate);

impl CutoffDate {
    /// `today - days`, clamped to the earliest representable date
    pub fn days_before(today: NaiveDate, days: u32) -> Self {
        let date = today
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self(date)
    }

    /// Use an explicit date as the cutoff
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// True when `date` falls on or after the cutoff
    pub fn includes(&self, date: NaiveDate) -> bool {
        date >= self.0
    }
}

impl fmt::Display for CutoffDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_before() {
        let cutoff = CutoffDate::days_before(date(2024, 3, 10), 14);
        assert_eq!(cutoff.date(), date(2024, 2, 25));
        assert_eq!(cutoff.to_string(), "2024-02-25");
    }

    #[test]
    fn test_zero_days_is_today() {
        let today = date(2024, 3, 10);
        assert_eq!(CutoffDate::days_before(today, 0).date(), today);
    }

    #[test]
    fn test_includes_boundary() {
        let cutoff = CutoffDate::from_date(date(2024, 2, 25));
        assert!(cutoff.includes(date(2024, 2, 25)));
        assert!(cutoff.includes(date(2024, 3, 1)));
        assert!(!cutoff.includes(date(2024, 2, 24)));
    }
}
