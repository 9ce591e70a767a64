//! Property-based tests for the submission gate.

use std::collections::HashSet;

use chrono::NaiveDate;
use ledgerpad_shared::types::AccountCode;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::entry::{EntryStatus, JournalEntry};
use super::error::JournalError;
use super::line::JournalLine;
use super::submission::SubmissionGate;

/// Strategy to generate a positive amount (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a balanced draft: N debit lines matched by one
/// credit line carrying the total.
fn balanced_draft() -> impl Strategy<Value = JournalEntry> {
    prop::collection::vec(positive_amount(), 1..8).prop_map(|amounts| {
        let mut entry = SubmissionGate::open_new(
            || "JE-0100".to_string(),
            Some(NaiveDate::from_ymd_opt(2026, 4, 2).unwrap()),
        );
        entry.description = "Generated entry".to_string();

        let total: Decimal = amounts.iter().copied().sum();
        for (i, amount) in amounts.iter().enumerate() {
            entry.push_line(JournalLine {
                account_id: AccountCode::new(format!("{}", 500 + i)),
                account_name: format!("Expense {i}"),
                debit: *amount,
                ..JournalLine::default()
            });
        }
        entry.push_line(JournalLine {
            account_id: AccountCode::from("101"),
            account_name: "Cash".to_string(),
            credit: total,
            ..JournalLine::default()
        });

        entry
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any balanced, complete draft passes the gate and comes back approved
    /// with every line carrying a fresh unique id.
    #[test]
    fn prop_balanced_draft_approves(entry in balanced_draft()) {
        let mut entry = entry;
        let line_count = entry.lines.len();
        let mut persisted = 0;
        let mut persisted_status = None;

        SubmissionGate::approve(&mut entry, |snapshot| {
            persisted += 1;
            persisted_status = Some(snapshot.status);
        })
        .unwrap();

        prop_assert_eq!(persisted, 1);
        // The persisted snapshot is already approved
        prop_assert_eq!(persisted_status, Some(EntryStatus::Approved));
        prop_assert_eq!(entry.status, EntryStatus::Approved);

        let ids: HashSet<_> = entry.lines.iter().filter_map(|l| l.id).collect();
        prop_assert_eq!(ids.len(), line_count);
    }

    /// Perturbing one amount breaks the balance and the gate rejects the
    /// draft without calling the persistence collaborator.
    #[test]
    fn prop_unbalanced_draft_is_rejected(
        entry in balanced_draft(),
        extra in positive_amount(),
    ) {
        let mut entry = entry;
        entry.lines[0].debit += extra;
        let totals = entry.totals();

        let mut persisted = 0;
        let result = SubmissionGate::approve(&mut entry, |_| persisted += 1);

        prop_assert_eq!(persisted, 0);
        match result {
            Err(JournalError::Unbalanced { debit, credit }) => {
                prop_assert_eq!(debit, totals.total_debit);
                prop_assert_eq!(credit, totals.total_credit);
            }
            other => prop_assert!(false, "expected Unbalanced, got {other:?}"),
        }

        // The rejected draft is handed back untouched and retryable
        prop_assert_eq!(entry.status, EntryStatus::Draft);
        prop_assert!(entry.lines.iter().all(|l| l.id.is_none()));
        entry.lines[0].debit -= extra;
        SubmissionGate::approve(&mut entry, |_| {}).unwrap();
        prop_assert_eq!(entry.status, EntryStatus::Approved);
    }

    /// The required-field guard fires before the balance guard.
    #[test]
    fn prop_missing_description_wins_over_unbalanced(entry in balanced_draft()) {
        let mut entry = entry;
        entry.description = String::new();
        let _ = entry.lines.pop(); // also unbalance the entry

        let result = SubmissionGate::approve(&mut entry, |_| {});
        prop_assert!(matches!(
            result,
            Err(JournalError::MissingRequiredField(
                super::error::RequiredField::Description
            ))
        ));
    }

    /// Drafts can be saved any number of times without a status change.
    #[test]
    fn prop_save_draft_repeatable(entry in balanced_draft(), saves in 1usize..10) {
        let mut persisted = 0;
        for _ in 0..saves {
            SubmissionGate::save_draft(&entry, |_| persisted += 1).unwrap();
        }
        prop_assert_eq!(persisted, saves);
        prop_assert_eq!(entry.status, EntryStatus::Draft);
    }
}
