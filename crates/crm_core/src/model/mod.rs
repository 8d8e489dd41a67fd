//! Domain model for customer migration.
//!
//! # Responsibility
//! - Define the records passed between the facade and its collaborators.
//!
//! # Invariants
//! - Records are plain values; no component retains them except the store.

pub mod customer;
