//! Chart of accounts and balance aggregation.
//!
//! - Account definitions and debit/credit-normal classification
//! - Per-account running balances built from approved journal entries

pub mod account;
pub mod balance;

pub use account::{Account, AccountKind, ChartOfAccounts};
pub use balance::{AccountBalance, PostingError, TrialBalance};
