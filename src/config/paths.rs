//! Config file location for credit-alert
//!
//! ## Path Resolution Order
//!
//! 1. `--config PATH` on the command line
//! 2. `CREDIT_ALERT_CONFIG` environment variable (if set)
//! 3. The platform config directory: `~/.config/credit-alert/config.yaml` on
//!    Linux, `~/Library/Application Support/credit-alert/config.yaml` on macOS,
//!    `%APPDATA%\credit-alert\config\config.yaml` on Windows

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "CREDIT_ALERT_CONFIG";

const CONFIG_FILE_NAME: &str = "config.yaml";

/// Where settings are read from
#[derive(Debug, Clone)]
pub struct AlertPaths {
    config_file: Option<PathBuf>,
    /// The user named this file, so it must exist
    explicit: bool,
}

impl AlertPaths {
    /// Resolve the config file location
    ///
    /// A path given on the command line wins over `CREDIT_ALERT_CONFIG`,
    /// which wins over the platform default. When no home directory can be
    /// determined there is simply no default file.
    pub fn resolve(cli_path: Option<PathBuf>) -> Self {
        if let Some(path) = cli_path {
            return Self::with_config_file(path);
        }

        if let Some(custom) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
            return Self::with_config_file(PathBuf::from(custom));
        }

        Self {
            config_file: default_config_file(),
            explicit: false,
        }
    }

    /// Use a specific config file (must exist when loaded)
    pub fn with_config_file(path: PathBuf) -> Self {
        Self {
            config_file: Some(path),
            explicit: true,
        }
    }

    /// No config file at all; settings come from flags and environment only
    pub fn without_config_file() -> Self {
        Self {
            config_file: None,
            explicit: false,
        }
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Whether a missing file should be reported as an error
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }
}

fn default_config_file() -> Option<PathBuf> {
    ProjectDirs::from("", "", "credit-alert").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
