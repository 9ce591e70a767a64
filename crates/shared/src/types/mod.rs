//! Common types used across the application.

pub mod code;
pub mod id;

pub use code::AccountCode;
pub use id::*;
