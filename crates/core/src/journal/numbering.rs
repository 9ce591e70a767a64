//! Sequential entry-number generation.

use serde::{Deserialize, Serialize};

/// Generates `"JE-0001"`-style entry numbers.
///
/// The submission gate takes the generator as a callback, so any source of
/// unique strings works; this is the default in-memory implementation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryNumberSequence {
    prefix: String,
    next: u64,
}

impl EntryNumberSequence {
    /// Creates a sequence starting at 1 with the given prefix.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// Resumes a sequence after the given last issued number.
    #[must_use]
    pub fn starting_after(prefix: impl Into<String>, last_issued: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: last_issued + 1,
        }
    }

    /// Issues the next entry number.
    pub fn next_number(&mut self) -> String {
        let number = format!("{}-{:04}", self.prefix, self.next);
        self.next += 1;
        number
    }
}
