//! Customer repository contract and in-memory CRM store.
//!
//! # Responsibility
//! - Accept migrated customer records.
//! - Expose read-only snapshots for callers that need to inspect the store.
//!
//! # Invariants
//! - Records are kept in write order.
//! - Store storage is `const`-constructible to back an eager `static`.

use crate::model::customer::CustomerRecord;
use log::info;
use std::sync::{Mutex, MutexGuard};

pub type RepoResult<T> = Result<T, RepoError>;

/// Failure raised by a customer repository.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoError {
    #[error("customer store unavailable: {0}")]
    Unavailable(String),
    #[error("customer record rejected: {0}")]
    Rejected(String),
}

/// Write contract consumed by the migration facade.
pub trait CustomerRepository {
    fn record_customer(&self, record: CustomerRecord) -> RepoResult<()>;
}

impl<T: CustomerRepository + ?Sized> CustomerRepository for &T {
    fn record_customer(&self, record: CustomerRecord) -> RepoResult<()> {
        (**self).record_customer(record)
    }
}

/// In-memory CRM store stub.
#[derive(Debug, Default)]
pub struct CustomerStore {
    records: Mutex<Vec<CustomerRecord>>,
}

impl CustomerStore {
    pub const fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Returns a copy of every stored record in write order.
    pub fn records(&self) -> RepoResult<Vec<CustomerRecord>> {
        Ok(self.lock()?.clone())
    }

    pub fn len(&self) -> RepoResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> RepoResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    pub fn clear(&self) -> RepoResult<()> {
        self.lock()?.clear();
        Ok(())
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, Vec<CustomerRecord>>> {
        self.records
            .lock()
            .map_err(|_| RepoError::Unavailable("customer store lock poisoned".to_string()))
    }
}

impl CustomerRepository for CustomerStore {
    fn record_customer(&self, record: CustomerRecord) -> RepoResult<()> {
        let mut records = self.lock()?;
        records.push(record);
        info!(
            "event=customer_record module=repo status=ok total={}",
            records.len()
        );
        Ok(())
    }
}
