//! Payment detection
//!
//! A payment onto a credit card shows up in the card's register as a
//! cleared inflow whose payee is a transfer from another account. There is
//! no explicit "payment" flag, so the check is a heuristic: a card with no
//! balance due (and therefore no transfer) is reported as unpaid.

use crate::models::{ClearedStatus, Transaction};

/// Substring the payee of a payment must contain (case-sensitive)
pub const PAYMENT_PAYEE_MARKER: &str = "Transfer";

/// Whether a single transaction counts as a payment
///
/// All three must hold: the payee contains [`PAYMENT_PAYEE_MARKER`], the
/// amount is strictly positive and the status is exactly `cleared`.
pub fn is_qualifying_payment(transaction: &Transaction) -> bool {
    transaction
        .payee_name
        .as_deref()
        .is_some_and(|payee| payee.contains(PAYMENT_PAYEE_MARKER))
        && transaction.is_inflow()
        && transaction.cleared == ClearedStatus::Cleared
}

/// Whether any transaction in the window is a payment
pub fn has_qualifying_payment(transactions: &[Transaction]) -> bool {
    transactions.iter().any(is_qualifying_payment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Milliunits;
    use chrono::NaiveDate;

    fn txn(payee: Option<&str>, amount: i64, cleared: ClearedStatus) -> Transaction {
        Transaction::new(
            "card",
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            Milliunits::new(amount),
            payee,
            cleared,
        )
    }

    #[test]
    fn test_cleared_transfer_inflow_qualifies() {
        let payment = txn(Some("Online Transfer"), 500, ClearedStatus::Cleared);
        assert!(is_qualifying_payment(&payment));
        assert!(has_qualifying_payment(&[payment]));
    }

    #[test]
    fn test_empty_window_has_no_payment() {
        assert!(!has_qualifying_payment(&[]));
    }

    #[test]
    fn test_purchase_does_not_qualify() {
        let purchase = txn(Some("Coffee Shop"), -50, ClearedStatus::Cleared);
        assert!(!has_qualifying_payment(&[purchase]));
    }

    #[test]
    fn test_each_condition_is_required() {
        // Wrong payee
        assert!(!is_qualifying_payment(&txn(Some("Refund"), 500, ClearedStatus::Cleared)));
        // Case-sensitive marker
        assert!(!is_qualifying_payment(&txn(Some("transfer : Checking"), 500, ClearedStatus::Cleared)));
        // Outflow and zero
        assert!(!is_qualifying_payment(&txn(Some("Transfer : Checking"), -500, ClearedStatus::Cleared)));
        assert!(!is_qualifying_payment(&txn(Some("Transfer : Checking"), 0, ClearedStatus::Cleared)));
        // Status other than cleared
        assert!(!is_qualifying_payment(&txn(Some("Transfer : Checking"), 500, ClearedStatus::Uncleared)));
        assert!(!is_qualifying_payment(&txn(Some("Transfer : Checking"), 500, ClearedStatus::Reconciled)));
    }

    #[test]
    fn test_missing_payee_does_not_qualify() {
        assert!(!is_qualifying_payment(&txn(None, 500, ClearedStatus::Cleared)));
        assert!(!is_qualifying_payment(&txn(Some(""), 500, ClearedStatus::Cleared)));
    }

    #[test]
    fn test_existence_not_position() {
        let window = vec![
            txn(Some("Grocer"), -20_000, ClearedStatus::Cleared),
            txn(Some("Transfer : Savings"), 100_000, ClearedStatus::Uncleared),
            txn(Some("Transfer : Checking"), 250_000, ClearedStatus::Cleared),
            txn(Some("Gas"), -40_000, ClearedStatus::Uncleared),
        ];
        assert!(has_qualifying_payment(&window));

        let mut reversed = window.clone();
        reversed.reverse();
        assert!(has_qualifying_payment(&reversed));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_status() -> impl Strategy<Value = ClearedStatus> {
            prop_oneof![
                Just(ClearedStatus::Uncleared),
                Just(ClearedStatus::Cleared),
                Just(ClearedStatus::Reconciled),
            ]
        }

        fn arb_payee() -> impl Strategy<Value = Option<String>> {
            prop_oneof![
                Just(None),
                Just(Some("Transfer : Checking".to_string())),
                Just(Some("transfer : Checking".to_string())),
                "[A-Za-z :]{0,20}".prop_map(Some),
            ]
        }

        fn arb_transaction() -> impl Strategy<Value = Transaction> {
            (arb_payee(), -1_000_000i64..1_000_000, arb_status())
                .prop_map(|(payee, amount, cleared)| txn(payee.as_deref(), amount, cleared))
        }

        proptest! {
            #[test]
            fn any_window_matches_the_three_conditions(
                window in prop::collection::vec(arb_transaction(), 0..12)
            ) {
                let expected = window.iter().any(|t| {
                    t.payee_name.as_deref().is_some_and(|p| p.contains("Transfer"))
                        && t.amount.value() > 0
                        && t.cleared == ClearedStatus::Cleared
                });
                prop_assert_eq!(has_qualifying_payment(&window), expected);
            }

            #[test]
            fn order_does_not_matter(
                window in prop::collection::vec(arb_transaction(), 0..12)
            ) {
                let mut reversed = window.clone();
                reversed.reverse();
                prop_assert_eq!(
                    has_qualifying_payment(&window),
                    has_qualifying_payment(&reversed)
                );
            }
        }
    }
}
