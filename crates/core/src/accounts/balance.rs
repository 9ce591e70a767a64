//! Account balance aggregation from approved journal entries.

use std::collections::HashMap;

use ledgerpad_shared::types::AccountCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::journal::JournalEntry;

/// Errors that can occur when posting entries into balances.
#[derive(Debug, Error)]
pub enum PostingError {
    /// Only approved entries may be posted.
    #[error("Only approved entries can be posted")]
    NotApproved,
}

/// Running balance for a single account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountBalance {
    /// The account code.
    pub code: AccountCode,
    /// Total debit amount posted to the account.
    pub debit_total: Decimal,
    /// Total credit amount posted to the account.
    pub credit_total: Decimal,
    /// Net balance (debits minus credits).
    pub balance: Decimal,
}

impl AccountBalance {
    /// Creates a zero balance for an account.
    #[must_use]
    pub fn new(code: AccountCode) -> Self {
        Self {
            code,
            debit_total: Decimal::ZERO,
            credit_total: Decimal::ZERO,
            balance: Decimal::ZERO,
        }
    }

    /// Adds a debit amount.
    pub fn add_debit(&mut self, amount: Decimal) {
        self.debit_total += amount;
        self.balance = self.debit_total - self.credit_total;
    }

    /// Adds a credit amount.
    pub fn add_credit(&mut self, amount: Decimal) {
        self.credit_total += amount;
        self.balance = self.debit_total - self.credit_total;
    }
}

/// Per-account balances built by posting approved journal entries.
///
/// Invariant: because only balanced entries reach approved status, the sum
/// of debit totals equals the sum of credit totals across all accounts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrialBalance {
    balances: HashMap<AccountCode, AccountBalance>,
}

impl TrialBalance {
    /// Creates an empty trial balance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts an approved entry into the per-account balances.
    ///
    /// # Errors
    ///
    /// Returns `PostingError::NotApproved` for draft or cancelled entries.
    pub fn post(&mut self, entry: &JournalEntry) -> Result<(), PostingError> {
        if !entry.status.is_approved() {
            return Err(PostingError::NotApproved);
        }

        for line in &entry.lines {
            let balance = self
                .balances
                .entry(line.account_id.clone())
                .or_insert_with(|| AccountBalance::new(line.account_id.clone()));
            balance.add_debit(line.debit);
            balance.add_credit(line.credit);
        }

        Ok(())
    }

    /// Returns the balance for an account, if any entry has touched it.
    #[must_use]
    pub fn get(&self, code: &AccountCode) -> Option<&AccountBalance> {
        self.balances.get(code)
    }

    /// Sum of debit totals across all accounts.
    #[must_use]
    pub fn total_debits(&self) -> Decimal {
        self.balances.values().map(|b| b.debit_total).sum()
    }

    /// Sum of credit totals across all accounts.
    #[must_use]
    pub fn total_credits(&self) -> Decimal {
        self.balances.values().map(|b| b.credit_total).sum()
    }

    /// Returns true if total debits equal total credits.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.total_debits() == self.total_credits()
    }
}
