use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// The binary with no configuration leaking in from the environment
fn credit_alert(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("credit-alert").unwrap();
    cmd.env_clear()
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"));
    cmd
}

#[test]
fn test_help_lists_commands() {
    let home = TempDir::new().unwrap();
    credit_alert(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("accounts"))
        .stdout(predicate::str::contains("lookup"));
}

#[test]
fn test_missing_settings_exit_code() {
    let home = TempDir::new().unwrap();
    credit_alert(&home)
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("YNAB_BUDGET_NAME"));
}

#[test]
fn test_missing_config_file_exit_code() {
    let home = TempDir::new().unwrap();
    credit_alert(&home)
        .args(["--config", "does-not-exist.yaml", "config"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_negative_cutoff_rejected() {
    let home = TempDir::new().unwrap();
    credit_alert(&home)
        .args(["--budget-name", "Household", "--access-token", "tok"])
        .env("CUT_OFF_DAYS", "-1")
        .arg("config")
        .assert()
        .code(2);
}

#[test]
fn test_config_command_redacts_token() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("alert.yaml");
    std::fs::write(
        &config,
        "budget_name: Household\naccess_token: file-secret\ncutoff_days: 5\nsmtp:\n  host: smtp.example.com\n",
    )
    .unwrap();

    credit_alert(&home)
        .arg("--config")
        .arg(&config)
        .env("CUT_OFF_DAYS", "9")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget name:      Household"))
        .stdout(predicate::str::contains("Cutoff days:      9"))
        .stdout(predicate::str::contains("smtp.example.com"))
        .stdout(predicate::str::contains("file-secret").not());
}

#[test]
fn test_email_delivery_validated_before_network() {
    let home = TempDir::new().unwrap();
    credit_alert(&home)
        .env("YNAB_BUDGET_NAME", "Household")
        .env("YNAB_PERSONAL_ACCESS_TOKEN", "tok")
        .env("CUT_OFF_DAYS", "7")
        // Unreachable on purpose: the SMTP check must fail first
        .env("YNAB_API_URL", "http://127.0.0.1:9/v1")
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("SMTP host"));
}

#[test]
fn test_unreachable_api_exit_code() {
    let home = TempDir::new().unwrap();
    credit_alert(&home)
        .env("YNAB_BUDGET_NAME", "Household")
        .env("YNAB_PERSONAL_ACCESS_TOKEN", "tok")
        .env("CUT_OFF_DAYS", "7")
        .env("YNAB_API_URL", "http://127.0.0.1:9/v1")
        .args(["--request-timeout", "2", "check", "--deliver", "stdout"])
        .assert()
        .code(4);
}
