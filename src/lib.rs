//! credit-alert - payment reminders for YNAB credit card accounts
//!
//! This library checks every credit card account of a budget for a recent
//! payment and produces an email-ready summary of the accounts that still
//! look unpaid.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Config file location and validated settings
//! - `error`: Custom error types
//! - `models`: Snapshots of budgets, accounts and transactions
//! - `gateway`: Access to the budgeting API (HTTP client and in-memory fake)
//! - `services`: Payment detection, due-account aggregation, the alert run
//! - `notify`: Notification text and delivery sinks (SMTP, files, stdout)
//! - `cli`: Command handlers for the binary
//! - `display`: Terminal table formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use credit_alert::config::{AlertPaths, PartialSettings, Settings};
//! use credit_alert::gateway::YnabClient;
//! use credit_alert::notify::StdoutSink;
//! use credit_alert::services::AlertService;
//!
//! let settings = Settings::load(&AlertPaths::resolve(None), PartialSettings::default())?;
//! let client = YnabClient::new(&settings.api)?;
//! let today = chrono::Local::now().date_naive();
//! let report = AlertService::new(&client).run(
//!     &settings.budget_name,
//!     settings.cutoff_days,
//!     today,
//!     &StdoutSink,
//! )?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod gateway;
pub mod models;
pub mod notify;
pub mod services;

pub use error::{AlertError, AlertResult};
