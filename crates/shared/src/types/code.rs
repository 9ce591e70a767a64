//! Chart-of-accounts codes.

use serde::{Deserialize, Serialize};

/// A chart-of-accounts code (e.g. "101" for Cash).
///
/// Codes are short human-assigned strings, unique within a chart of
/// accounts. An empty code marks a journal line whose account has not been
/// chosen yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountCode(String);

impl AccountCode {
    /// Creates a code from a string.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the code is empty (no account chosen).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for AccountCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for AccountCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl std::fmt::Display for AccountCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
