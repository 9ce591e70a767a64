//! Line completeness and balance checks (the balance validator).

use serde::{Deserialize, Serialize};

use super::error::JournalError;
use super::line::JournalLine;
use super::totals::{EntryTotals, calculate_totals};

/// What is wrong with an incomplete or invalid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineIssue {
    /// No account has been chosen for the line.
    MissingAccount,
    /// Both debit and credit are zero.
    NoAmount,
    /// Both debit and credit are non-zero. Unreachable through the line
    /// editor, but rejected if it occurs.
    BothAmounts,
    /// A monetary field is negative.
    NegativeAmount,
}

impl std::fmt::Display for LineIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingAccount => write!(f, "no account selected"),
            Self::NoAmount => write!(f, "no amount entered"),
            Self::BothAmounts => write!(f, "both debit and credit are set"),
            Self::NegativeAmount => write!(f, "amount is negative"),
        }
    }
}

/// Examines a single line for completeness.
///
/// A complete line references an account (code and display name) and has a
/// positive amount in exactly one of debit/credit.
#[must_use]
pub fn line_issue(line: &JournalLine) -> Option<LineIssue> {
    if !line.has_account() {
        return Some(LineIssue::MissingAccount);
    }
    if line.debit.is_sign_negative() || line.credit.is_sign_negative() {
        return Some(LineIssue::NegativeAmount);
    }

    match (line.debit.is_zero(), line.credit.is_zero()) {
        (true, true) => Some(LineIssue::NoAmount),
        (false, false) => Some(LineIssue::BothAmounts),
        _ => None,
    }
}

/// Validates that an entry has at least one line and that every line is
/// complete, reporting the first offender.
///
/// # Errors
///
/// Returns `NoLines` for an empty collection, or `IncompleteLine` with the
/// index and issue of the first incomplete line.
pub fn validate_lines(lines: &[JournalLine]) -> Result<(), JournalError> {
    if lines.is_empty() {
        return Err(JournalError::NoLines);
    }

    for (index, line) in lines.iter().enumerate() {
        if let Some(issue) = line_issue(line) {
            return Err(JournalError::IncompleteLine { index, issue });
        }
    }

    Ok(())
}

/// Point-in-time validation snapshot for the presentation layer.
///
/// Drives the balanced/unbalanced banner, the per-line completeness
/// indicators, and the enabled state of the approve action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryCheck {
    /// Derived totals at the time of the check.
    pub totals: EntryTotals,
    /// Issues keyed by line index (empty when all lines are complete).
    pub incomplete: Vec<(usize, LineIssue)>,
    /// Number of lines examined.
    pub line_count: usize,
}

impl EntryCheck {
    /// Returns true if total debits equal total credits exactly.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.totals.is_balanced
    }

    /// Returns true if the entry has at least one line and all are complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.line_count > 0 && self.incomplete.is_empty()
    }

    /// Returns true if the approve action should be enabled.
    #[must_use]
    pub fn is_approvable(&self) -> bool {
        self.is_balanced() && self.is_complete()
    }
}

/// Computes the full validation snapshot for a line collection.
///
/// Pure decision function: no side effects, re-invoked by the presentation
/// layer on every edit.
#[must_use]
pub fn check_entry(lines: &[JournalLine]) -> EntryCheck {
    let incomplete = lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| line_issue(line).map(|issue| (index, issue)))
        .collect();

    EntryCheck {
        totals: calculate_totals(lines),
        incomplete,
        line_count: lines.len(),
    }
}
