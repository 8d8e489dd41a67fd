//! CRM persistence abstractions and the in-process store stub.
//!
//! # Responsibility
//! - Define the write contract the migration facade depends on.
//! - Keep storage details out of the orchestration layer.
//!
//! # Invariants
//! - Repository writes take ownership of the record; callers keep nothing.

pub mod customer_repo;
