//! Postal-code (CEP) resolution subsystem.
//!
//! # Responsibility
//! - Define the lookup contract the migration facade depends on.
//! - Provide an in-process directory stub usable as a process singleton.
//!
//! # Invariants
//! - Lookups are keyed by the exact postal-code string; no normalization.

pub mod directory;
