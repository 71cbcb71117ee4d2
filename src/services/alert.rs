//! End-to-end credit alert run
//!
//! Resolves the budget, finds due accounts, composes the notification and
//! hands it to a sink. Budget API failures abort the run before anything is
//! delivered; a delivery failure is logged and recorded in the report.

use chrono::NaiveDate;
use tracing::{error, info};

use super::due::{DueAccountService, DueAccountSet};
use crate::error::{AlertError, AlertResult};
use crate::gateway::BudgetGateway;
use crate::models::{BudgetId, CutoffDate};
use crate::notify::{compose, Notification, NotificationSink};

/// Outcome of one run
#[derive(Debug, Clone)]
pub struct AlertReport {
    pub budget_id: BudgetId,
    pub cutoff: CutoffDate,
    pub due: DueAccountSet,
    pub notification: Notification,
    /// False when the sink reported an error
    pub delivered: bool,
}

/// Service that runs the whole credit alert
pub struct AlertService<'a, G: BudgetGateway + ?Sized> {
    gateway: &'a G,
}

impl<'a, G: BudgetGateway + ?Sized> AlertService<'a, G> {
    /// Create a new alert service
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Check `budget_name` for payments in the `cutoff_days` before `today`
    /// and deliver the result through `sink`
    pub fn run(
        &self,
        budget_name: &str,
        cutoff_days: u32,
        today: NaiveDate,
        sink: &dyn NotificationSink,
    ) -> AlertResult<AlertReport> {
        let budget_id = self
            .gateway
            .resolve_budget_id(budget_name)?
            .ok_or_else(|| AlertError::budget_not_found(budget_name))?;

        let cutoff = CutoffDate::days_before(today, cutoff_days);
        info!(budget = budget_name, %cutoff, "Checking credit accounts for payments");

        let due = DueAccountService::new(self.gateway).find_due_accounts(&budget_id, cutoff)?;
        let notification = compose(due.names(), cutoff_days);

        let delivered = match sink.deliver(&notification) {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "Failed to deliver notification");
                false
            }
        };

        Ok(AlertReport {
            budget_id,
            cutoff,
            due,
            notification,
            delivered,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::InMemoryGateway;
    use crate::models::{Account, AccountType, ClearedStatus, Milliunits, Transaction};
    use crate::notify::{ALL_CLEAR_SUBJECT, DUE_SUBJECT};
    use std::cell::RefCell;

    /// Captures delivered notifications, optionally failing
    #[derive(Default)]
    struct RecordingSink {
        delivered: RefCell<Vec<Notification>>,
        fail: bool,
    }

    impl NotificationSink for RecordingSink {
        fn deliver(&self, notification: &Notification) -> AlertResult<()> {
            if self.fail {
                return Err(AlertError::Notification("connection refused".into()));
            }
            self.delivered.borrow_mut().push(notification.clone());
            Ok(())
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn gateway() -> InMemoryGateway {
        InMemoryGateway::new()
            .with_budget("b-1", "Household")
            .with_account("b-1", Account::new("visa", "Visa", AccountType::CreditCard))
            .with_account("b-1", Account::new("amex", "Amex", AccountType::CreditCard))
            .with_transaction(Transaction::new(
                "amex",
                NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
                Milliunits::new(300_000),
                Some("Transfer : Checking"),
                ClearedStatus::Cleared,
            ))
    }

    #[test]
    fn test_run_reports_due_accounts() {
        let gateway = gateway();
        let sink = RecordingSink::default();

        let report = AlertService::new(&gateway)
            .run("Household", 7, today(), &sink)
            .unwrap();

        assert_eq!(report.budget_id, BudgetId::new("b-1"));
        assert_eq!(report.cutoff.to_string(), "2024-03-08");
        assert_eq!(report.due.names(), ["Visa".to_string()]);
        assert!(report.delivered);

        let sent = sink.delivered.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, DUE_SUBJECT);
        assert!(sent[0].body.contains("Visa"));
        assert!(sent[0].body.contains("7 days"));
    }

    #[test]
    fn test_short_window_misses_older_payment() {
        let gateway = gateway();
        let sink = RecordingSink::default();

        let report = AlertService::new(&gateway)
            .run("Household", 2, today(), &sink)
            .unwrap();
        assert_eq!(
            report.due.names(),
            ["Visa".to_string(), "Amex".to_string()]
        );
        assert!(report.notification.body.contains("Visa and Amex"));
    }

    #[test]
    fn test_all_clear() {
        let gateway = gateway().with_transaction(Transaction::new(
            "visa",
            NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            Milliunits::new(120_000),
            Some("Transfer : Savings"),
            ClearedStatus::Cleared,
        ));
        let sink = RecordingSink::default();

        let report = AlertService::new(&gateway)
            .run("Household", 7, today(), &sink)
            .unwrap();
        assert!(report.due.is_empty());
        assert_eq!(report.notification.subject, ALL_CLEAR_SUBJECT);
    }

    #[test]
    fn test_unknown_budget_is_not_found() {
        let gateway = gateway();
        let sink = RecordingSink::default();

        let err = AlertService::new(&gateway)
            .run("Vacation", 7, today(), &sink)
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.exit_code(), 3);
        assert!(sink.delivered.borrow().is_empty());
    }

    #[test]
    fn test_api_failure_sends_nothing() {
        let gateway = gateway().failing_with_status(500);
        let sink = RecordingSink::default();

        let err = AlertService::new(&gateway)
            .run("Household", 7, today(), &sink)
            .unwrap_err();
        assert!(err.is_api_failure());
        assert!(sink.delivered.borrow().is_empty());
    }

    #[test]
    fn test_delivery_failure_is_not_fatal() {
        let gateway = gateway();
        let sink = RecordingSink {
            fail: true,
            ..Default::default()
        };

        let report = AlertService::new(&gateway)
            .run("Household", 7, today(), &sink)
            .unwrap();
        assert!(!report.delivered);
        assert_eq!(report.due.len(), 1);
    }
}
