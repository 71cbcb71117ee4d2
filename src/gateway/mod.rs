//! Access to the budgeting service
//!
//! [`BudgetGateway`] is the seam between the alert logic and the remote API.
//! Implementations only provide the four raw fetches; name resolution,
//! credit-card filtering and the date-filtered transaction listing are
//! provided methods, so the HTTP client and the in-memory fake behave the
//! same way.
//!
//! Lookups by name return `Ok(None)` when nothing matches. Transport and HTTP
//! failures are always `Err`.

pub mod client;
pub mod memory;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{AlertError, AlertResult};
use crate::models::{
    Account, AccountId, BudgetId, BudgetSummary, CategoryGroup, CategoryId, CutoffDate,
    Transaction,
};

pub use client::YnabClient;
pub use memory::InMemoryGateway;

/// Read-only view of the budgeting service
pub trait BudgetGateway {
    /// All budgets visible to the credential
    fn budgets(&self) -> AlertResult<Vec<BudgetSummary>>;

    /// All accounts of a budget, in the order the service lists them
    fn accounts(&self, budget_id: &BudgetId) -> AlertResult<Vec<Account>>;

    /// All category groups of a budget
    fn category_groups(&self, budget_id: &BudgetId) -> AlertResult<Vec<CategoryGroup>>;

    /// Transactions of one account, asking the service for those on or
    /// after `since`
    fn transactions_since(
        &self,
        budget_id: &BudgetId,
        account_id: &AccountId,
        since: NaiveDate,
    ) -> AlertResult<Vec<Transaction>>;

    /// Find a budget by exact name
    fn resolve_budget_id(&self, name: &str) -> AlertResult<Option<BudgetId>> {
        let found = self
            .budgets()?
            .into_iter()
            .find(|budget| budget.name == name)
            .map(|budget| budget.id);

        if found.is_none() {
            warn!(budget = name, "Budget not found");
        }
        Ok(found)
    }

    /// Find an account by name, ignoring surrounding whitespace
    ///
    /// With duplicate names the first account in listing order wins.
    fn resolve_account_id(&self, budget_id: &BudgetId, name: &str) -> AlertResult<Option<AccountId>> {
        ensure_reference(budget_id.is_blank(), "Budget")?;

        let found = self
            .accounts(budget_id)?
            .into_iter()
            .find(|account| account.name_matches(name))
            .map(|account| account.id);

        if found.is_none() {
            warn!(account = name, "Account not found");
        }
        Ok(found)
    }

    /// Find a category by name across all groups, ignoring surrounding whitespace
    fn resolve_category_id(
        &self,
        budget_id: &BudgetId,
        name: &str,
    ) -> AlertResult<Option<CategoryId>> {
        ensure_reference(budget_id.is_blank(), "Budget")?;

        let found = self
            .category_groups(budget_id)?
            .iter()
            .find_map(|group| group.find_category(name))
            .map(|category| category.id.clone());

        if found.is_none() {
            warn!(category = name, "Category not found");
        }
        Ok(found)
    }

    /// Credit-card accounts of a budget, preserving listing order
    fn list_credit_accounts(&self, budget_id: &BudgetId) -> AlertResult<Vec<Account>> {
        ensure_reference(budget_id.is_blank(), "Budget")?;

        let accounts: Vec<Account> = self
            .accounts(budget_id)?
            .into_iter()
            .filter(|account| account.account_type.is_credit_card())
            .collect();

        debug!(count = accounts.len(), "Listed credit card accounts");
        Ok(accounts)
    }

    /// Transactions of one account dated on or after the cutoff
    ///
    /// The cutoff is sent to the service and enforced again locally, so a
    /// service that ignores the filter still yields the right window.
    fn list_transactions_since(
        &self,
        budget_id: &BudgetId,
        account_id: &AccountId,
        cutoff: CutoffDate,
    ) -> AlertResult<Vec<Transaction>> {
        ensure_reference(budget_id.is_blank(), "Budget")?;
        ensure_reference(account_id.is_blank(), "Account")?;

        let mut transactions = self.transactions_since(budget_id, account_id, cutoff.date())?;
        transactions.retain(|txn| cutoff.includes(txn.date));
        Ok(transactions)
    }
}

fn ensure_reference(blank: bool, entity_type: &'static str) -> AlertResult<()> {
    if blank {
        return Err(AlertError::InvalidReference { entity_type });
    }
    Ok(())
}
