//! Entry submission gate.
//!
//! The single choke point that decides whether a draft may be persisted or
//! promoted to approved. Persistence is an external collaborator passed in
//! as a closure; it is fire-and-forget from the gate's perspective.

use chrono::NaiveDate;
use ledgerpad_shared::types::LineId;

use super::entry::{EntryStatus, JournalEntry};
use super::error::{JournalError, RequiredField};
use super::validation::validate_lines;

/// Stateless gate for journal entry lifecycle transitions.
pub struct SubmissionGate;

impl SubmissionGate {
    /// Opens a new draft entry, invoking the entry-number generator once.
    #[must_use]
    pub fn open_new<G>(generator: G, date: Option<NaiveDate>) -> JournalEntry
    where
        G: FnOnce() -> String,
    {
        JournalEntry::draft(generator(), date)
    }

    /// Saves an entry while it remains a draft.
    ///
    /// May be called any number of times; the status does not change.
    ///
    /// # Errors
    ///
    /// Returns `NotEditable` if the entry is approved or cancelled.
    pub fn save_draft<P>(entry: &JournalEntry, mut persist: P) -> Result<(), JournalError>
    where
        P: FnMut(&JournalEntry),
    {
        if !entry.status.is_editable() {
            return Err(JournalError::NotEditable {
                status: entry.status,
            });
        }

        persist(entry);
        Ok(())
    }

    /// Promotes a draft to approved.
    ///
    /// Guards run in fixed order and the first failure wins, so exactly one
    /// message surfaces per attempt:
    /// 1. required entry-level fields (entry number, date, description)
    /// 2. balanced totals (exact equality)
    /// 3. at least one line, every line complete
    ///
    /// On success each line is assigned a fresh unique id, the status
    /// becomes `Approved`, and the resulting snapshot is handed to the
    /// persistence collaborator.
    ///
    /// All guards run before any mutation: a rejected entry is left exactly
    /// as it was, so the caller can correct it and retry.
    ///
    /// # Errors
    ///
    /// Returns the first failing guard; nothing is persisted on failure.
    pub fn approve<P>(entry: &mut JournalEntry, mut persist: P) -> Result<(), JournalError>
    where
        P: FnMut(&JournalEntry),
    {
        if !entry.status.is_editable() {
            return Err(JournalError::NotEditable {
                status: entry.status,
            });
        }

        Self::validate_required_fields(entry)?;

        let totals = entry.totals();
        if !totals.is_balanced {
            return Err(JournalError::Unbalanced {
                debit: totals.total_debit,
                credit: totals.total_credit,
            });
        }

        validate_lines(&entry.lines)?;

        for line in &mut entry.lines {
            line.id = Some(LineId::new());
        }
        entry.status = EntryStatus::Approved;

        persist(entry);
        Ok(())
    }

    /// Cancels a draft. Terminal: there is no transition out of cancelled.
    ///
    /// # Errors
    ///
    /// Returns `CanOnlyCancelDraft` for non-draft entries, leaving the
    /// entry unchanged.
    pub fn cancel<P>(entry: &mut JournalEntry, mut persist: P) -> Result<(), JournalError>
    where
        P: FnMut(&JournalEntry),
    {
        if entry.status != EntryStatus::Draft {
            return Err(JournalError::CanOnlyCancelDraft);
        }

        entry.status = EntryStatus::Cancelled;
        persist(entry);
        Ok(())
    }

    fn validate_required_fields(entry: &JournalEntry) -> Result<(), JournalError> {
        if entry.entry_number.trim().is_empty() {
            return Err(JournalError::MissingRequiredField(RequiredField::EntryNumber));
        }
        if entry.date.is_none() {
            return Err(JournalError::MissingRequiredField(RequiredField::Date));
        }
        if entry.description.trim().is_empty() {
            return Err(JournalError::MissingRequiredField(RequiredField::Description));
        }
        Ok(())
    }
}
