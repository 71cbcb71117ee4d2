//! HTTP client for the YNAB v1 API
//!
//! Blocking requests with bearer-token auth and a bounded timeout. Every
//! successful response is wrapped in a `{"data": ...}` envelope; error
//! responses carry `{"error": {"id", "name", "detail"}}`.

use chrono::NaiveDate;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use zeroize::Zeroizing;

use super::BudgetGateway;
use crate::config::ApiSettings;
use crate::error::{AlertError, AlertResult};
use crate::models::{Account, AccountId, BudgetId, BudgetSummary, CategoryGroup, Transaction};

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct BudgetsData {
    budgets: Vec<BudgetSummary>,
}

#[derive(Deserialize)]
struct AccountsData {
    accounts: Vec<Account>,
}

#[derive(Deserialize)]
struct CategoriesData {
    category_groups: Vec<CategoryGroup>,
}

#[derive(Deserialize)]
struct TransactionsData {
    transactions: Vec<Transaction>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

/// Gateway backed by the budgeting service's REST API
pub struct YnabClient {
    base_url: String,
    access_token: Zeroizing<String>,
    http: Client,
}

impl YnabClient {
    /// Build a client from validated API settings
    pub fn new(api: &ApiSettings) -> AlertResult<Self> {
        let http = Client::builder()
            .timeout(api.timeout)
            .user_agent(concat!("credit-alert/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AlertError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: api.base_url.trim_end_matches('/').to_string(),
            access_token: api.access_token.clone(),
            http,
        })
    }

    fn get<T: DeserializeOwned>(&self, endpoint: &str, query: &[(&str, String)]) -> AlertResult<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(endpoint, "GET");

        let response = self
            .http
            .get(&url)
            .bearer_auth(self.access_token.as_str())
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .map_err(|e| AlertError::Transport {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AlertError::Api {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                detail: error_detail(&body, status.canonical_reason()),
            });
        }

        let envelope: Envelope<T> = response.json().map_err(|e| {
            AlertError::Json(format!("Failed to decode response from {}: {}", endpoint, e))
        })?;
        Ok(envelope.data)
    }
}

/// Best description of a failed request
fn error_detail(body: &str, reason: Option<&str>) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        if let Some(detail) = envelope.error.detail.or(envelope.error.name) {
            return detail;
        }
    }
    let body = body.trim();
    if body.is_empty() {
        reason.unwrap_or("no response body").to_string()
    } else {
        body.chars().take(200).collect()
    }
}

impl BudgetGateway for YnabClient {
    fn budgets(&self) -> AlertResult<Vec<BudgetSummary>> {
        let data: BudgetsData = self.get("budgets", &[])?;
        Ok(data.budgets)
    }

    fn accounts(&self, budget_id: &BudgetId) -> AlertResult<Vec<Account>> {
        let data: AccountsData = self.get(&format!("budgets/{}/accounts", budget_id), &[])?;
        Ok(data.accounts)
    }

    fn category_groups(&self, budget_id: &BudgetId) -> AlertResult<Vec<CategoryGroup>> {
        let data: CategoriesData = self.get(&format!("budgets/{}/categories", budget_id), &[])?;
        Ok(data.category_groups)
    }

    fn transactions_since(
        &self,
        budget_id: &BudgetId,
        account_id: &AccountId,
        since: NaiveDate,
    ) -> AlertResult<Vec<Transaction>> {
        let endpoint = format!("budgets/{}/accounts/{}/transactions", budget_id, account_id);
        let query = [("since_date", since.format("%Y-%m-%d").to_string())];
        let data: TransactionsData = self.get(&endpoint, &query)?;
        Ok(data.transactions)
    }
}
