//! Chart-of-accounts domain types.

use std::collections::HashMap;

use ledgerpad_shared::types::AccountCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account classification in the chart of accounts.
///
/// The classification determines which side grows the account:
/// - Asset/Expense accounts are debit-normal
/// - Liability/Equity/Revenue accounts are credit-normal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    /// Resources owned by the business.
    Asset,
    /// Obligations owed to others.
    Liability,
    /// Owner's residual interest.
    Equity,
    /// Income earned.
    Revenue,
    /// Costs incurred.
    Expense,
}

impl AccountKind {
    /// Returns true for debit-normal accounts (balance grows with debits).
    #[must_use]
    pub fn is_debit_normal(self) -> bool {
        matches!(self, Self::Asset | Self::Expense)
    }

    /// Calculates the balance change contributed by a (debit, credit) pair.
    ///
    /// - Asset/Expense: balance += debit - credit
    /// - Liability/Equity/Revenue: balance += credit - debit
    #[must_use]
    pub fn balance_change(self, debit: Decimal, credit: Decimal) -> Decimal {
        if self.is_debit_normal() {
            debit - credit
        } else {
            credit - debit
        }
    }
}

/// A chart-of-accounts entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// The account code (unique within the chart).
    pub code: AccountCode,
    /// Display name shown on journal lines and reports.
    pub name: String,
    /// Account classification.
    pub kind: AccountKind,
    /// Whether the account accepts new journal lines.
    pub is_active: bool,
}

impl Account {
    /// Creates an active account.
    #[must_use]
    pub fn new(code: impl Into<AccountCode>, name: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            kind,
            is_active: true,
        }
    }
}

/// In-memory chart of accounts, keyed by account code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartOfAccounts {
    accounts: HashMap<AccountCode, Account>,
}

impl ChartOfAccounts {
    /// Creates an empty chart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an account, keyed by its code.
    pub fn insert(&mut self, account: Account) {
        self.accounts.insert(account.code.clone(), account);
    }

    /// Looks up an account by code.
    #[must_use]
    pub fn get(&self, code: &AccountCode) -> Option<&Account> {
        self.accounts.get(code)
    }

    /// Looks up an active account by code.
    ///
    /// Inactive accounts cannot be referenced by new journal lines.
    #[must_use]
    pub fn get_active(&self, code: &AccountCode) -> Option<&Account> {
        self.accounts.get(code).filter(|a| a.is_active)
    }

    /// Returns the number of accounts in the chart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if the chart has no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
