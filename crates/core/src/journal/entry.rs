//! Journal entry aggregate.

use chrono::NaiveDate;
use ledgerpad_shared::types::EntryId;
use serde::{Deserialize, Serialize};

use super::line::JournalLine;
use super::totals::{EntryTotals, calculate_totals};

/// Journal entry status.
///
/// Entries start as drafts, are mutated freely while drafted, and become
/// immutable once approved. There is no transition out of `Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Entry is being drafted and can be modified.
    Draft,
    /// Entry has passed the submission gate (immutable).
    Approved,
    /// Entry was abandoned (terminal).
    Cancelled,
}

impl EntryStatus {
    /// Returns true if the entry can be modified.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Draft)
    }

    /// Returns true if the entry has been approved.
    #[must_use]
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Approved => write!(f, "approved"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A journal entry: an ordered collection of debit/credit lines.
///
/// Totals are derived, never stored: `totals()` recomputes from the current
/// line collection so they can never drift from the lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Internal identifier, used by the persistence layer for updates.
    pub id: EntryId,
    /// Human-readable unique identifier, generated externally.
    pub entry_number: String,
    /// Calendar date of the transaction (`None` until the user picks one).
    pub date: Option<NaiveDate>,
    /// Narrative for the whole entry.
    pub description: String,
    /// Ordered line collection.
    pub lines: Vec<JournalLine>,
    /// Current lifecycle status.
    pub status: EntryStatus,
}

impl JournalEntry {
    /// Creates a new draft with no lines.
    #[must_use]
    pub fn draft(entry_number: impl Into<String>, date: Option<NaiveDate>) -> Self {
        Self {
            id: EntryId::new(),
            entry_number: entry_number.into(),
            date,
            description: String::new(),
            lines: Vec::new(),
            status: EntryStatus::Draft,
        }
    }

    /// Recomputes the derived totals from the current lines.
    #[must_use]
    pub fn totals(&self) -> EntryTotals {
        calculate_totals(&self.lines)
    }

    /// Appends a line to the collection.
    pub fn push_line(&mut self, line: JournalLine) {
        self.lines.push(line);
    }

    /// Removes and returns the line at `index`, if it exists.
    pub fn remove_line(&mut self, index: usize) -> Option<JournalLine> {
        if index < self.lines.len() {
            Some(self.lines.remove(index))
        } else {
            None
        }
    }

    /// Returns a mutable reference to the line at `index`.
    pub fn line_mut(&mut self, index: usize) -> Option<&mut JournalLine> {
        self.lines.get_mut(index)
    }
}
