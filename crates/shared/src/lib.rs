//! Shared types for Ledgerpad.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Chart-of-accounts codes

pub mod types;
