//! Customer migration facade.
//!
//! # Responsibility
//! - Expose one `migrate_customer` entry point over the postal lookup and
//!   CRM persistence subsystems.
//!
//! # Invariants
//! - Call order is fixed: city lookup, state lookup, one write.
//! - Any collaborator failure stops the sequence; no partial writes.
//! - Collaborator errors reach the caller unchanged.
//! - Logs carry metadata only, never customer name or postal code.

use crate::model::customer::CustomerRecord;
use crate::postal::directory::{PostalCodeResolver, PostalError};
use crate::repo::customer_repo::{CustomerRepository, RepoError};
use log::{error, info};
use std::time::Instant;

/// Collaborator failure surfaced by the facade.
///
/// Each variant is transparent: `Display` and `source()` are the
/// collaborator's own.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    #[error(transparent)]
    Postal(#[from] PostalError),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Facade over postal resolution and customer persistence.
pub struct CustomerMigrationFacade<P: PostalCodeResolver, R: CustomerRepository> {
    resolver: P,
    repo: R,
}

impl<P: PostalCodeResolver, R: CustomerRepository> CustomerMigrationFacade<P, R> {
    pub fn new(resolver: P, repo: R) -> Self {
        Self { resolver, repo }
    }

    /// Resolves city and state for `postal_code` and records the customer.
    ///
    /// # Contract
    /// - `name` and `postal_code` are passed through without validation.
    /// - Returns `Ok(())` once the repository write completes.
    ///
    /// # Errors
    /// - Returns the first collaborator error encountered.
    pub fn migrate_customer(&self, name: &str, postal_code: &str) -> Result<(), MigrationError> {
        let started_at = Instant::now();
        info!("event=customer_migrate module=facade status=start");

        let result = self.run(name, postal_code);
        match &result {
            Ok(()) => info!(
                "event=customer_migrate module=facade status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=customer_migrate module=facade status=error duration_ms={} error_code={}",
                started_at.elapsed().as_millis(),
                error_code(err)
            ),
        }
        result
    }

    fn run(&self, name: &str, postal_code: &str) -> Result<(), MigrationError> {
        let city = self.resolver.resolve_city(postal_code)?;
        let state = self.resolver.resolve_state(postal_code)?;
        self.repo
            .record_customer(CustomerRecord::new(name, postal_code, city, state))?;
        Ok(())
    }

    pub fn resolver(&self) -> &P {
        &self.resolver
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }
}

fn error_code(err: &MigrationError) -> &'static str {
    match err {
        MigrationError::Postal(PostalError::UnknownPostalCode(_)) => "postal_code_unknown",
        MigrationError::Postal(PostalError::Unavailable(_)) => "postal_unavailable",
        MigrationError::Repo(RepoError::Unavailable(_)) => "repo_unavailable",
        MigrationError::Repo(RepoError::Rejected(_)) => "repo_rejected",
    }
}
