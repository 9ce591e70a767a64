//! Journal line domain type.

use ledgerpad_shared::types::{AccountCode, LineId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::JournalError;
use crate::accounts::Account;

/// A single debit/credit line in a journal entry.
///
/// Exactly one of `debit`/`credit` is non-zero on a complete line; zero
/// means "not used". Lines carry no id while the entry is a draft; ids are
/// assigned by the submission gate at approval time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalLine {
    /// Identifier assigned at approval time (`None` while drafting).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<LineId>,
    /// Chart-of-accounts code this line posts to (empty until chosen).
    pub account_id: AccountCode,
    /// Account display name, copied from the chart at time of entry.
    pub account_name: String,
    /// Optional free-text annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Debit amount; zero means the debit side is unused.
    pub debit: Decimal,
    /// Credit amount; zero means the credit side is unused.
    pub credit: Decimal,
}

impl JournalLine {
    /// Creates an empty line with no account and zero amounts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a line posting to the given account.
    ///
    /// The account name is denormalized onto the line: it stays as it was
    /// at time of entry even if the account is later renamed.
    ///
    /// # Errors
    ///
    /// Returns `AccountInactive` — inactive accounts cannot take new lines.
    pub fn for_account(account: &Account) -> Result<Self, JournalError> {
        let mut line = Self::default();
        line.set_account(account)?;
        Ok(line)
    }

    /// Sets the account reference, copying code and display name.
    ///
    /// # Errors
    ///
    /// Returns `AccountInactive` and leaves the line unchanged if the
    /// account is inactive.
    pub fn set_account(&mut self, account: &Account) -> Result<(), JournalError> {
        if !account.is_active {
            return Err(JournalError::AccountInactive(account.code.clone()));
        }
        self.account_id = account.code.clone();
        self.account_name = account.name.clone();
        Ok(())
    }

    /// Sets the free-text annotation.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Sets the debit amount, leaving the credit side unchanged.
    pub fn set_debit(&mut self, amount: Decimal) {
        self.debit = amount;
    }

    /// Sets the credit amount, leaving the debit side unchanged.
    pub fn set_credit(&mut self, amount: Decimal) {
        self.credit = amount;
    }

    /// Returns true if the line references an account (code and name set).
    #[must_use]
    pub fn has_account(&self) -> bool {
        !self.account_id.is_empty() && !self.account_name.trim().is_empty()
    }
}
