//! Settings for credit-alert
//!
//! Settings are assembled from an optional YAML file and then overridden by
//! command-line flags / environment variables. The merged result is
//! validated once, before anything talks to the network.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use zeroize::Zeroizing;

use super::paths::AlertPaths;
use crate::error::{AlertError, AlertResult};

/// Default API root of the budgeting service
pub const DEFAULT_API_BASE_URL: &str = "https://api.youneedabudget.com/v1";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SMTP_PORT: u16 = 587;

/// Settings as written in the config file or passed as overrides
///
/// Every field is optional here; [`Settings::from_partial`] decides what is
/// required. Key aliases accept the environment-style names used by older
/// config files (`ynab_budget_name`, `cut_off_days`, ...).
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct PartialSettings {
    #[serde(alias = "ynab_budget_name")]
    pub budget_name: Option<String>,
    #[serde(alias = "ynab_personal_access_token")]
    pub access_token: Option<Zeroizing<String>>,
    #[serde(alias = "cut_off_days")]
    pub cutoff_days: Option<u32>,
    pub api_base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub smtp: PartialSmtpSettings,
}

/// SMTP section of [`PartialSettings`]
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct PartialSmtpSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<Zeroizing<String>>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl PartialSettings {
    /// Parse a YAML document
    pub fn from_yaml(contents: &str) -> AlertResult<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
            .map_err(|e| AlertError::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Read the config file named by `paths`, if any
    pub fn load(paths: &AlertPaths) -> AlertResult<Self> {
        let Some(path) = paths.config_file() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            if paths.is_explicit() {
                return Err(AlertError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            AlertError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&contents)
    }

    /// Overlay `other` on top of `self`; set fields in `other` win
    pub fn merge(self, other: PartialSettings) -> Self {
        Self {
            budget_name: other.budget_name.or(self.budget_name),
            access_token: other.access_token.or(self.access_token),
            cutoff_days: other.cutoff_days.or(self.cutoff_days),
            api_base_url: other.api_base_url.or(self.api_base_url),
            request_timeout_secs: other.request_timeout_secs.or(self.request_timeout_secs),
            smtp: self.smtp.merge(other.smtp),
        }
    }
}

impl PartialSmtpSettings {
    fn merge(self, other: PartialSmtpSettings) -> Self {
        Self {
            host: other.host.or(self.host),
            port: other.port.or(self.port),
            username: other.username.or(self.username),
            password: other.password.or(self.password),
            from: other.from.or(self.from),
            to: other.to.or(self.to),
            timeout_secs: other.timeout_secs.or(self.timeout_secs),
        }
    }
}

fn redact<T>(value: &Option<T>) -> Option<&'static str> {
    value.as_ref().map(|_| "<redacted>")
}

impl fmt::Debug for PartialSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialSettings")
            .field("budget_name", &self.budget_name)
            .field("access_token", &redact(&self.access_token))
            .field("cutoff_days", &self.cutoff_days)
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("smtp", &self.smtp)
            .finish()
    }
}

impl fmt::Debug for PartialSmtpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialSmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("from", &self.from)
            .field("to", &self.to)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Connection settings for the budgeting API
#[derive(Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub access_token: Zeroizing<String>,
    pub timeout: Duration,
}

impl fmt::Debug for ApiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiSettings")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Validated SMTP delivery settings
#[derive(Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: Zeroizing<String>,
    pub from: String,
    pub to: String,
    pub timeout: Duration,
}

impl fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Validated settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Name of the budget to inspect (exact match)
    pub budget_name: String,

    /// Length of the lookback window in days
    pub cutoff_days: u32,

    pub api: ApiSettings,

    /// SMTP section, validated on demand by [`Settings::smtp`]
    smtp: PartialSmtpSettings,
}

impl Settings {
    /// Load the config file and apply overrides, then validate
    pub fn load(paths: &AlertPaths, overrides: PartialSettings) -> AlertResult<Self> {
        let file = PartialSettings::load(paths)?;
        Self::from_partial(file.merge(overrides))
    }

    /// Validate merged settings, failing on the first missing required field
    pub fn from_partial(partial: PartialSettings) -> AlertResult<Self> {
        let budget_name = required(partial.budget_name, "budget name (YNAB_BUDGET_NAME)")?;
        let access_token = required_secret(
            partial.access_token,
            "access token (YNAB_PERSONAL_ACCESS_TOKEN)",
        )?;
        let cutoff_days = partial
            .cutoff_days
            .ok_or_else(|| missing("cutoff days (CUT_OFF_DAYS)"))?;

        let base_url = partial
            .api_base_url
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(AlertError::Config(format!(
                "API base URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }

        let timeout = timeout_from(partial.request_timeout_secs, "request timeout")?;

        Ok(Self {
            budget_name,
            cutoff_days,
            api: ApiSettings {
                base_url,
                access_token,
                timeout,
            },
            smtp: partial.smtp,
        })
    }

    /// Validated SMTP settings; only needed when email delivery is selected
    pub fn smtp(&self) -> AlertResult<SmtpSettings> {
        let smtp = self.smtp.clone();
        Ok(SmtpSettings {
            host: required(smtp.host, "SMTP host (SMTP_HOST)")?,
            port: smtp.port.unwrap_or(DEFAULT_SMTP_PORT),
            username: required(smtp.username, "SMTP username (SMTP_USERNAME)")?,
            password: required_secret(smtp.password, "SMTP password (SMTP_PASSWORD)")?,
            from: required(smtp.from, "sender address (EMAIL_FROM)")?,
            to: required(smtp.to, "recipient address (EMAIL_TO)")?,
            timeout: timeout_from(smtp.timeout_secs, "SMTP timeout")?,
        })
    }

    /// Human-readable summary with secrets redacted
    pub fn describe(&self) -> String {
        let smtp = &self.smtp;
        let show = |value: &Option<String>| value.clone().unwrap_or_else(|| "(not set)".into());
        let secret = |value: &Option<Zeroizing<String>>| match value {
            Some(_) => "********",
            None => "(not set)",
        };

        let mut out = String::new();
        out.push_str(&format!("Budget name:      {}\n", self.budget_name));
        out.push_str(&format!("Cutoff days:      {}\n", self.cutoff_days));
        out.push_str(&format!("API base URL:     {}\n", self.api.base_url));
        out.push_str("Access token:     ********\n");
        out.push_str(&format!("Request timeout:  {}s\n", self.api.timeout.as_secs()));
        out.push_str(&format!("SMTP host:        {}\n", show(&smtp.host)));
        out.push_str(&format!(
            "SMTP port:        {}\n",
            smtp.port.unwrap_or(DEFAULT_SMTP_PORT)
        ));
        out.push_str(&format!("SMTP username:    {}\n", show(&smtp.username)));
        out.push_str(&format!("SMTP password:    {}\n", secret(&smtp.password)));
        out.push_str(&format!("From:             {}\n", show(&smtp.from)));
        out.push_str(&format!("To:               {}\n", show(&smtp.to)));
        out
    }
}

fn required(value: Option<String>, what: &str) -> AlertResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(missing(what)),
    }
}

fn required_secret(
    value: Option<Zeroizing<String>>,
    what: &str,
) -> AlertResult<Zeroizing<String>> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(missing(what)),
    }
}

fn missing(what: &str) -> AlertError {
    AlertError::Config(format!("Missing required setting: {}", what))
}

fn timeout_from(secs: Option<u64>, what: &str) -> AlertResult<Duration> {
    match secs.unwrap_or(DEFAULT_TIMEOUT_SECS) {
        0 => Err(AlertError::Config(format!("{} must be greater than zero", what))),
        secs => Ok(Duration::from_secs(secs)),
    }
}
