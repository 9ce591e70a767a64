//! Derived debit/credit totals (the balance calculator).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line::JournalLine;

/// Derived totals for a journal entry.
///
/// Totals are never authored by a user; they are recomputed from the line
/// collection on every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryTotals {
    /// Sum of all debit amounts.
    pub total_debit: Decimal,
    /// Sum of all credit amounts.
    pub total_credit: Decimal,
    /// Whether the entry is balanced (exact equality, no tolerance).
    pub is_balanced: bool,
}

impl EntryTotals {
    /// Creates totals from debit and credit sums.
    #[must_use]
    pub fn new(total_debit: Decimal, total_credit: Decimal) -> Self {
        Self {
            total_debit,
            total_credit,
            is_balanced: total_debit == total_credit,
        }
    }

    /// Returns the absolute difference between debits and credits.
    ///
    /// Rendered by the presentation layer in the unbalanced banner.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        (self.total_debit - self.total_credit).abs()
    }
}

/// Sums the debit and credit columns of a line sequence.
///
/// Pure and synchronous; O(n) over the lines with no caching, so it is
/// cheap to re-invoke on every keystroke-driven edit. An empty sequence
/// yields (0, 0), which is balanced but not approvable (no valid lines).
#[must_use]
pub fn calculate_totals(lines: &[JournalLine]) -> EntryTotals {
    let total_debit: Decimal = lines.iter().map(|l| l.debit).sum();
    let total_credit: Decimal = lines.iter().map(|l| l.credit).sum();

    EntryTotals::new(total_debit, total_credit)
}
