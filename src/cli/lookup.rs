//! Lookup and listing commands
//!
//! Resolve names to identifiers and list the credit accounts the alert
//! would inspect.

use clap::Subcommand;

use crate::display::format_account_list;
use crate::error::{AlertError, AlertResult};
use crate::gateway::BudgetGateway;
use crate::models::BudgetId;

/// Lookup subcommands
#[derive(Subcommand, Debug)]
pub enum LookupCommands {
    /// Print the ID of a budget
    Budget {
        /// Budget name (exact)
        name: String,
    },
    /// Print the ID of an account in the configured budget
    Account {
        /// Account name
        name: String,
    },
    /// Print the ID of a category in the configured budget
    Category {
        /// Category name
        name: String,
    },
}

fn require_budget<G: BudgetGateway + ?Sized>(gateway: &G, name: &str) -> AlertResult<BudgetId> {
    gateway
        .resolve_budget_id(name)?
        .ok_or_else(|| AlertError::budget_not_found(name))
}

/// Resolve a name and return its identifier
pub fn handle_lookup_command<G: BudgetGateway + ?Sized>(
    gateway: &G,
    budget_name: &str,
    cmd: &LookupCommands,
) -> AlertResult<String> {
    let id = match cmd {
        LookupCommands::Budget { name } => require_budget(gateway, name)?.to_string(),
        LookupCommands::Account { name } => {
            let budget_id = require_budget(gateway, budget_name)?;
            gateway
                .resolve_account_id(&budget_id, name)?
                .ok_or_else(|| AlertError::account_not_found(name))?
                .to_string()
        }
        LookupCommands::Category { name } => {
            let budget_id = require_budget(gateway, budget_name)?;
            gateway
                .resolve_category_id(&budget_id, name)?
                .ok_or_else(|| AlertError::category_not_found(name))?
                .to_string()
        }
    };
    Ok(id)
}

/// Render the credit account table for a budget
pub fn handle_accounts_command<G: BudgetGateway + ?Sized>(
    gateway: &G,
    budget_name: &str,
) -> AlertResult<String> {
    let budget_id = require_budget(gateway, budget_name)?;
    let accounts = gateway.list_credit_accounts(&budget_id)?;
    Ok(format_account_list(&accounts))
}
