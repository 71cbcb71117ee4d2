//! Notification text
//!
//! Pure formatting: turns the due-account list into an email subject and a
//! plain-text body.

use std::fmt;

/// Subject used when at least one account is due
pub const DUE_SUBJECT: &str = "YNAB Credit Alert - Important! Payment due!";

/// Subject used when every credit account has been paid
pub const ALL_CLEAR_SUBJECT: &str = "YNAB Credit Alert - All good!";

const ALL_CLEAR_BODY: &str = "Hello,

All your accounts have been paid.

Best regards,
YNAB Credit Alert
";

/// A rendered notification ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub body: String,
}

impl Notification {
    /// True when this is the all-clear message
    pub fn is_all_clear(&self) -> bool {
        self.subject == ALL_CLEAR_SUBJECT
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subject: {}\n\n{}", self.subject, self.body)
    }
}

/// Join names for a sentence: "A", "A and B", "A, B, and C"
pub fn combine_names<S: AsRef<str>>(names: &[S]) -> String {
    match names {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|name| name.as_ref()).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Build the notification for a run
///
/// An empty `due_accounts` always produces the fixed all-clear message,
/// whatever the `cutoff_days`.
pub fn compose<S: AsRef<str>>(due_accounts: &[S], cutoff_days: u32) -> Notification {
    if due_accounts.is_empty() {
        return Notification {
            subject: ALL_CLEAR_SUBJECT.to_string(),
            body: ALL_CLEAR_BODY.to_string(),
        };
    }

    let body = format!(
        "Hello,

The following accounts are due for payment and have not been paid in the last
{cutoff_days} days:
{names}

Please make the payment to avoid the account becoming due.

Best regards,
YNAB Credit Alert
",
        cutoff_days = cutoff_days,
        names = combine_names(due_accounts),
    );

    Notification {
        subject: DUE_SUBJECT.to_string(),
        body,
    }
}
