//! Due-account aggregation
//!
//! Walks every credit-card account of a budget and collects the ones with no
//! qualifying payment since the cutoff.

use tracing::{debug, info};

use super::detector::has_qualifying_payment;
use crate::error::AlertResult;
use crate::gateway::BudgetGateway;
use crate::models::{BudgetId, CutoffDate};

/// Display names of accounts without a recent payment, in listing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DueAccountSet(Vec<String>);

impl DueAccountSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.0.push(name.into());
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<String>> for DueAccountSet {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

/// Service that finds due credit accounts
pub struct DueAccountService<'a, G: BudgetGateway + ?Sized> {
    gateway: &'a G,
}

impl<'a, G: BudgetGateway + ?Sized> DueAccountService<'a, G> {
    /// Create a new due-account service
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Credit accounts of `budget_id` lacking a payment since `cutoff`
    ///
    /// Each account's transactions are fetched with the identifier from the
    /// listing itself. Any gateway error aborts the whole check.
    pub fn find_due_accounts(
        &self,
        budget_id: &BudgetId,
        cutoff: CutoffDate,
    ) -> AlertResult<DueAccountSet> {
        let mut due = DueAccountSet::new();

        for account in self.gateway.list_credit_accounts(budget_id)? {
            let transactions =
                self.gateway
                    .list_transactions_since(budget_id, &account.id, cutoff)?;
            let paid = has_qualifying_payment(&transactions);

            debug!(
                account = %account.name,
                transactions = transactions.len(),
                paid,
                "Checked credit account"
            );

            if !paid {
                due.push(account.name);
            }
        }

        info!(due = due.len(), %cutoff, "Credit account check complete");
        Ok(due)
    }
}
