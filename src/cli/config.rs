//! Config command

use crate::config::{AlertPaths, Settings};

/// Render the effective configuration, secrets redacted
pub fn handle_config_command(paths: &AlertPaths, settings: &Settings) -> String {
    let file = match paths.config_file() {
        Some(path) if path.exists() => path.display().to_string(),
        Some(path) => format!("{} (not present)", path.display()),
        None => "(none)".to_string(),
    };

    let mut output = String::new();
    output.push_str("credit-alert configuration\n");
    output.push_str("==========================\n");
    output.push_str(&format!("Config file:      {}\n", file));
    output.push_str(&settings.describe());
    output
}
