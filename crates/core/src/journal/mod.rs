//! Journal entry balancing.
//!
//! This module implements the journal entry workflow:
//! - Journal lines (debit/credit pairs against chart-of-accounts entries)
//! - Entry aggregates with derived totals
//! - Balance calculation over the line collection
//! - Completeness and balance validation
//! - The submission gate that promotes drafts to approved entries
//! - Sequential entry numbering

pub mod entry;
pub mod error;
pub mod line;
pub mod numbering;
pub mod submission;
pub mod totals;
pub mod validation;

#[cfg(test)]
mod submission_props;
#[cfg(test)]
mod validation_props;

pub use entry::{EntryStatus, JournalEntry};
pub use error::{JournalError, RequiredField};
pub use line::JournalLine;
pub use numbering::EntryNumberSequence;
pub use submission::SubmissionGate;
pub use totals::{EntryTotals, calculate_totals};
pub use validation::{EntryCheck, LineIssue, check_entry, line_issue, validate_lines};
