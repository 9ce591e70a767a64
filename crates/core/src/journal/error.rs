//! Journal validation and state errors.
//!
//! All variants are user-correctable input states, not exceptions: they are
//! detected synchronously before any persistence call and short-circuit the
//! submission flow with a single user-facing message.

use ledgerpad_shared::types::AccountCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entry::EntryStatus;
use super::validation::LineIssue;

/// Entry-level fields required at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    /// The externally generated entry number.
    EntryNumber,
    /// The transaction date.
    Date,
    /// The entry-level narrative.
    Description,
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EntryNumber => write!(f, "entry number"),
            Self::Date => write!(f, "date"),
            Self::Description => write!(f, "description"),
        }
    }
}

/// Errors that can occur during journal operations.
#[derive(Debug, Error)]
pub enum JournalError {
    /// A required entry-level field is empty at submission time.
    #[error("Required field is missing: {0}")]
    MissingRequiredField(RequiredField),

    /// Entry totals do not match exactly.
    #[error("Entry is not balanced. Debit: {debit}, Credit: {credit}")]
    Unbalanced {
        /// Total debit amount.
        debit: Decimal,
        /// Total credit amount.
        credit: Decimal,
    },

    /// Entry has no lines to post.
    #[error("Entry must have at least one line")]
    NoLines,

    /// A line is missing its account or has an unusable amount pair.
    #[error("Line {index} is incomplete: {issue}")]
    IncompleteLine {
        /// Zero-based index of the offending line.
        index: usize,
        /// What is wrong with the line.
        issue: LineIssue,
    },

    /// The referenced account is inactive and cannot take new lines.
    #[error("Account {0} is inactive")]
    AccountInactive(AccountCode),

    /// Entry is not editable in its current status.
    #[error("Cannot modify entry in {status} status")]
    NotEditable {
        /// The entry's current status.
        status: EntryStatus,
    },

    /// Only draft entries can be cancelled.
    #[error("Can only cancel draft entries")]
    CanOnlyCancelDraft,
}

impl JournalError {
    /// Returns the stable error code for the message layer.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingRequiredField(_) => "MISSING_REQUIRED_FIELD",
            Self::Unbalanced { .. } => "UNBALANCED_ENTRY",
            Self::NoLines => "NO_LINES",
            Self::IncompleteLine { .. } => "INCOMPLETE_LINE",
            Self::AccountInactive(_) => "ACCOUNT_INACTIVE",
            Self::NotEditable { .. } => "NOT_EDITABLE",
            Self::CanOnlyCancelDraft => "CAN_ONLY_CANCEL_DRAFT",
        }
    }
}
