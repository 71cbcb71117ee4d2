//! Configuration module for credit-alert
//!
//! This module provides configuration management including:
//! - Config file location (flag, environment, platform default)
//! - YAML settings with flag/environment overrides
//! - Validation of required settings at startup

pub mod paths;
pub mod settings;

pub use paths::AlertPaths;
pub use settings::{ApiSettings, PartialSettings, PartialSmtpSettings, Settings, SmtpSettings};
