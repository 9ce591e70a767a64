//! Property-based tests for balance calculation and line validation.

use ledgerpad_shared::types::AccountCode;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::line::JournalLine;
use super::totals::calculate_totals;
use super::validation::{LineIssue, check_entry, validate_lines};

/// Strategy to generate a positive amount (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a complete line with an amount on one side.
fn complete_line() -> impl Strategy<Value = JournalLine> {
    (any::<bool>(), positive_amount(), 100u32..600u32).prop_map(|(is_debit, amount, code)| {
        let (debit, credit) = if is_debit {
            (amount, Decimal::ZERO)
        } else {
            (Decimal::ZERO, amount)
        };
        JournalLine {
            account_id: AccountCode::new(code.to_string()),
            account_name: format!("Account {code}"),
            debit,
            credit,
            ..JournalLine::default()
        }
    })
}

/// Strategy to generate a non-empty sequence of complete lines.
fn complete_lines(max_len: usize) -> impl Strategy<Value = Vec<JournalLine>> {
    prop::collection::vec(complete_line(), 1..=max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Totals equal the arithmetic sum of each column for any line sequence.
    #[test]
    fn prop_totals_are_column_sums(lines in complete_lines(20)) {
        let totals = calculate_totals(&lines);

        let expected_debit: Decimal = lines.iter().map(|l| l.debit).sum();
        let expected_credit: Decimal = lines.iter().map(|l| l.credit).sum();

        prop_assert_eq!(totals.total_debit, expected_debit);
        prop_assert_eq!(totals.total_credit, expected_credit);
        prop_assert_eq!(totals.is_balanced, expected_debit == expected_credit);
    }

    /// Recomputing totals on an unchanged sequence yields identical results.
    #[test]
    fn prop_recompute_is_idempotent(lines in complete_lines(20)) {
        let first = calculate_totals(&lines);
        let second = calculate_totals(&lines);
        prop_assert_eq!(first, second);
    }

    /// The reported difference is non-negative and zero exactly when balanced.
    #[test]
    fn prop_difference_is_absolute(lines in complete_lines(20)) {
        let totals = calculate_totals(&lines);
        prop_assert!(!totals.difference().is_sign_negative());
        prop_assert_eq!(totals.difference().is_zero(), totals.is_balanced);
    }

    /// A matched debit/credit pair always validates and is approvable.
    #[test]
    fn prop_matched_pair_is_approvable(amount in positive_amount()) {
        let debit = JournalLine {
            account_id: AccountCode::from("101"),
            account_name: "Cash".to_string(),
            debit: amount,
            ..JournalLine::default()
        };
        let credit = JournalLine {
            account_id: AccountCode::from("401"),
            account_name: "Sales".to_string(),
            credit: amount,
            ..JournalLine::default()
        };
        let lines = vec![debit, credit];

        prop_assert!(validate_lines(&lines).is_ok());
        let checked = check_entry(&lines);
        prop_assert!(checked.is_balanced());
        prop_assert!(checked.is_approvable());
    }

    /// A line without an account blocks approval regardless of balance state.
    #[test]
    fn prop_missing_account_blocks_approval(
        lines in complete_lines(10),
        amount in positive_amount(),
    ) {
        let mut lines = lines;
        lines.push(JournalLine {
            credit: amount,
            ..JournalLine::default()
        });

        let checked = check_entry(&lines);
        prop_assert!(!checked.is_approvable());
        prop_assert!(
            checked
                .incomplete
                .iter()
                .any(|(_, issue)| *issue == LineIssue::MissingAccount)
        );
    }

    /// All-zero lines never become approvable even though totals balance.
    #[test]
    fn prop_zero_lines_balance_but_never_approve(count in 1usize..10) {
        let lines: Vec<JournalLine> = (0..count)
            .map(|i| JournalLine {
                account_id: AccountCode::new(format!("{}", 100 + i)),
                account_name: format!("Account {}", 100 + i),
                ..JournalLine::default()
            })
            .collect();

        let checked = check_entry(&lines);
        prop_assert!(checked.is_balanced());
        prop_assert!(!checked.is_approvable());

        let result = validate_lines(&lines);
        let rejected_for_no_amount = matches!(
            result,
            Err(super::error::JournalError::IncompleteLine {
                issue: LineIssue::NoAmount,
                ..
            })
        );
        prop_assert!(
            rejected_for_no_amount,
            "expected a no-amount incomplete line, got {:?}",
            result
        );
    }
}
