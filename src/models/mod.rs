//! Core data models for credit-alert
//!
//! Snapshots of the budgeting service's entities. Everything here is fetched
//! and discarded within a single run; nothing is persisted.

pub mod account;
pub mod budget;
pub mod category;
pub mod cutoff;
pub mod ids;
pub mod money;
pub mod transaction;

pub use account::{Account, AccountType};
pub use budget::BudgetSummary;
pub use category::{Category, CategoryGroup};
pub use cutoff::CutoffDate;
pub use ids::{AccountId, BudgetId, CategoryId, TransactionId};
pub use money::Milliunits;
pub use transaction::{ClearedStatus, Transaction};
