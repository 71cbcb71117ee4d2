//! In-memory budget gateway
//!
//! Serves fixed budgets, accounts and transactions without any network
//! access. Like a service that ignores `since_date`, it returns every stored
//! transaction of an account, leaving the cutoff to
//! [`BudgetGateway::list_transactions_since`].

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::NaiveDate;

use super::BudgetGateway;
use crate::error::{AlertError, AlertResult};
use crate::models::{Account, AccountId, BudgetId, BudgetSummary, CategoryGroup, Transaction};

/// Fake gateway backed by plain collections
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    budgets: Vec<BudgetSummary>,
    accounts: HashMap<BudgetId, Vec<Account>>,
    category_groups: HashMap<BudgetId, Vec<CategoryGroup>>,
    transactions: HashMap<AccountId, Vec<Transaction>>,
    /// Every call fails with this HTTP status when set
    failure_status: Option<u16>,
    /// Account IDs passed to `transactions_since`, in call order
    transaction_requests: RefCell<Vec<AccountId>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_budget(mut self, id: impl Into<BudgetId>, name: impl Into<String>) -> Self {
        self.budgets.push(BudgetSummary::new(id, name));
        self
    }

    pub fn with_account(mut self, budget_id: impl Into<BudgetId>, account: Account) -> Self {
        self.accounts.entry(budget_id.into()).or_default().push(account);
        self
    }

    pub fn with_category_group(
        mut self,
        budget_id: impl Into<BudgetId>,
        group: CategoryGroup,
    ) -> Self {
        self.category_groups
            .entry(budget_id.into())
            .or_default()
            .push(group);
        self
    }

    /// Store a transaction under its own `account_id`
    pub fn with_transaction(mut self, transaction: Transaction) -> Self {
        self.transactions
            .entry(transaction.account_id.clone())
            .or_default()
            .push(transaction);
        self
    }

    /// Make every request fail as if the service returned `status`
    pub fn failing_with_status(mut self, status: u16) -> Self {
        self.failure_status = Some(status);
        self
    }

    /// Accounts whose transactions were requested so far
    pub fn transaction_requests(&self) -> Vec<AccountId> {
        self.transaction_requests.borrow().clone()
    }

    fn check_failure(&self, endpoint: &str) -> AlertResult<()> {
        match self.failure_status {
            Some(status) => Err(AlertError::Api {
                status,
                endpoint: endpoint.to_string(),
                detail: "simulated failure".into(),
            }),
            None => Ok(()),
        }
    }

    fn unknown_budget(budget_id: &BudgetId, endpoint: String) -> AlertError {
        AlertError::Api {
            status: 404,
            endpoint,
            detail: format!("budget {} does not exist", budget_id),
        }
    }
}

impl BudgetGateway for InMemoryGateway {
    fn budgets(&self) -> AlertResult<Vec<BudgetSummary>> {
        self.check_failure("budgets")?;
        Ok(self.budgets.clone())
    }

    fn accounts(&self, budget_id: &BudgetId) -> AlertResult<Vec<Account>> {
        let endpoint = format!("budgets/{}/accounts", budget_id);
        self.check_failure(&endpoint)?;
        if !self.budgets.iter().any(|b| &b.id == budget_id) {
            return Err(Self::unknown_budget(budget_id, endpoint));
        }
        Ok(self.accounts.get(budget_id).cloned().unwrap_or_default())
    }

    fn category_groups(&self, budget_id: &BudgetId) -> AlertResult<Vec<CategoryGroup>> {
        let endpoint = format!("budgets/{}/categories", budget_id);
        self.check_failure(&endpoint)?;
        if !self.budgets.iter().any(|b| &b.id == budget_id) {
            return Err(Self::unknown_budget(budget_id, endpoint));
        }
        Ok(self.category_groups.get(budget_id).cloned().unwrap_or_default())
    }

    fn transactions_since(
        &self,
        budget_id: &BudgetId,
        account_id: &AccountId,
        _since: NaiveDate,
    ) -> AlertResult<Vec<Transaction>> {
        let endpoint = format!("budgets/{}/accounts/{}/transactions", budget_id, account_id);
        self.check_failure(&endpoint)?;
        self.transaction_requests.borrow_mut().push(account_id.clone());
        Ok(self.transactions.get(account_id).cloned().unwrap_or_default())
    }
}
