//! Core customer-migration logic.
//! A facade over postal lookup and CRM persistence, plus the process-wide
//! singletons that back it.

pub mod logging;
pub mod model;
pub mod postal;
pub mod repo;
pub mod service;
pub mod singleton;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::customer::{CustomerRecord, PostalArea};
pub use postal::directory::{PostalCodeResolver, PostalDirectory, PostalError, PostalResult};
pub use repo::customer_repo::{CustomerRepository, CustomerStore, RepoError, RepoResult};
pub use service::migration_facade::{CustomerMigrationFacade, MigrationError};
pub use singleton::{customer_store, postal_directory, process_facade, ProcessFacade};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
