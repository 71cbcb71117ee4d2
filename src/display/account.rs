//! Account display formatting
//!
//! Formats credit accounts for terminal output.

use crate::models::Account;

/// Format a list of accounts as a table
pub fn format_account_list(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No credit card accounts found.\n".to_string();
    }

    // Calculate column widths
    let name_width = accounts
        .iter()
        .map(|a| a.name.trim().len())
        .max()
        .unwrap_or(4)
        .max(4);

    // Build header
    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:<8}  {}\n",
        "Name",
        "Balance",
        "Status",
        "ID",
        name_width = name_width,
    ));

    // Separator line
    output.push_str(&format!(
        "{:-<name_width$}  {:->12}  {:-<8}  {:-<36}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    // Account rows
    for account in accounts {
        let status = if account.deleted {
            "Deleted"
        } else if account.closed {
            "Closed"
        } else {
            "Open"
        };

        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {:<8}  {}\n",
            account.name.trim(),
            account.balance.to_string(),
            status,
            account.id,
            name_width = name_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountType, Milliunits};

    #[test]
    fn test_empty_list() {
        assert_eq!(format_account_list(&[]), "No credit card accounts found.\n");
    }

    #[test]
    fn test_table_rows() {
        let mut visa = Account::new("acc-visa", "Visa", AccountType::CreditCard);
        visa.balance = Milliunits::new(-125_500);
        let mut store = Account::new("acc-store", "Store Card", AccountType::CreditCard);
        store.closed = true;

        let output = format_account_list(&[visa, store]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Name "));
        assert!(lines[0].contains("Balance"));
        assert!(lines[2].contains("-$125.50"));
        assert!(lines[2].ends_with("acc-visa"));
        assert!(lines[3].contains("Closed"));
    }
}
