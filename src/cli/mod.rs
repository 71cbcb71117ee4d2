//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod check;
pub mod config;
pub mod lookup;

use clap::Args;
use zeroize::Zeroizing;

use crate::config::{PartialSettings, PartialSmtpSettings};

pub use check::{handle_check_command, run_check, CheckArgs, Delivery};
pub use config::handle_config_command;
pub use lookup::{handle_accounts_command, handle_lookup_command, LookupCommands};

/// Settings that can be given as flags or environment variables
///
/// Anything set here overrides the config file.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Budget to check (exact name)
    #[arg(long, env = "YNAB_BUDGET_NAME", global = true, help_heading = "Configuration")]
    pub budget_name: Option<String>,

    /// Personal access token for the budgeting API
    #[arg(
        long,
        env = "YNAB_PERSONAL_ACCESS_TOKEN",
        hide_env_values = true,
        global = true,
        help_heading = "Configuration"
    )]
    pub access_token: Option<String>,

    /// Lookback window in days
    #[arg(long, env = "CUT_OFF_DAYS", global = true, help_heading = "Configuration")]
    pub cutoff_days: Option<u32>,

    /// API root URL
    #[arg(long, env = "YNAB_API_URL", global = true, help_heading = "Configuration")]
    pub api_url: Option<String>,

    /// API request timeout in seconds
    #[arg(long, global = true, help_heading = "Configuration")]
    pub request_timeout: Option<u64>,

    /// SMTP relay host
    #[arg(long, env = "SMTP_HOST", global = true, help_heading = "Email")]
    pub smtp_host: Option<String>,

    /// SMTP port (default 587)
    #[arg(long, env = "SMTP_PORT", global = true, help_heading = "Email")]
    pub smtp_port: Option<u16>,

    /// SMTP login
    #[arg(long, env = "SMTP_USERNAME", global = true, help_heading = "Email")]
    pub smtp_username: Option<String>,

    /// SMTP password
    #[arg(
        long,
        env = "SMTP_PASSWORD",
        hide_env_values = true,
        global = true,
        help_heading = "Email"
    )]
    pub smtp_password: Option<String>,

    /// Sender address
    #[arg(long = "from", env = "EMAIL_FROM", global = true, help_heading = "Email")]
    pub email_from: Option<String>,

    /// Recipient address
    #[arg(long = "to", env = "EMAIL_TO", global = true, help_heading = "Email")]
    pub email_to: Option<String>,
}

impl ConfigArgs {
    /// Convert into overrides for the config file
    pub fn into_partial(self) -> PartialSettings {
        PartialSettings {
            budget_name: self.budget_name,
            access_token: self.access_token.map(Zeroizing::new),
            cutoff_days: self.cutoff_days,
            api_base_url: self.api_url,
            request_timeout_secs: self.request_timeout,
            smtp: PartialSmtpSettings {
                host: self.smtp_host,
                port: self.smtp_port,
                username: self.smtp_username,
                password: self.smtp_password.map(Zeroizing::new),
                from: self.email_from,
                to: self.email_to,
                timeout_secs: None,
            },
        }
    }
}
