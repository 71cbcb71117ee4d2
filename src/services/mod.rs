//! Service layer for credit-alert
//!
//! The service layer holds the alert logic on top of the gateway: payment
//! detection, due-account aggregation and the end-to-end run.

pub mod alert;
pub mod detector;
pub mod due;

pub use alert::{AlertReport, AlertService};
pub use detector::{has_qualifying_payment, is_qualifying_payment, PAYMENT_PAYEE_MARKER};
pub use due::{DueAccountService, DueAccountSet};
