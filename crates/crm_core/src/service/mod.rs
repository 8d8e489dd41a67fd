//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate collaborator calls into use-case level APIs.
//! - Keep callers decoupled from lookup and storage details.

pub mod migration_facade;
