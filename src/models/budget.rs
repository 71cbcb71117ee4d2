//! Budget summary model
//!
//! Only the fields needed to resolve a budget by name are kept.

use serde::{Deserialize, Serialize};

use super::ids::BudgetId;

/// A budget visible to the access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub id: BudgetId,
    pub name: String,
}

impl BudgetSummary {
    pub fn new(id: impl Into<BudgetId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
