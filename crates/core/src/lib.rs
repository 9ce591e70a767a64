//! Core business logic for Ledgerpad.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `journal` - Journal entry balancing, validation, and submission
//! - `accounts` - Chart of accounts and account balance aggregation

pub mod accounts;
pub mod journal;
