//! Postal-code lookup contract and in-memory directory.
//!
//! # Responsibility
//! - Resolve city and state for a postal code.
//! - Keep directory storage constructible in `const` context so it can back
//!   an eager `static`.
//!
//! # Invariants
//! - `register` replaces any previous area for the same postal code.
//! - Unknown postal codes are reported, never defaulted.

use crate::model::customer::PostalArea;
use log::debug;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub type PostalResult<T> = Result<T, PostalError>;

/// Failure raised by a postal-code resolver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostalError {
    #[error("postal code not found: `{0}`")]
    UnknownPostalCode(String),
    #[error("postal lookup unavailable: {0}")]
    Unavailable(String),
}

/// Lookup contract consumed by the migration facade.
pub trait PostalCodeResolver {
    fn resolve_city(&self, postal_code: &str) -> PostalResult<String>;
    fn resolve_state(&self, postal_code: &str) -> PostalResult<String>;
}

impl<T: PostalCodeResolver + ?Sized> PostalCodeResolver for &T {
    fn resolve_city(&self, postal_code: &str) -> PostalResult<String> {
        (**self).resolve_city(postal_code)
    }

    fn resolve_state(&self, postal_code: &str) -> PostalResult<String> {
        (**self).resolve_state(postal_code)
    }
}

/// In-memory postal directory stub.
#[derive(Debug, Default)]
pub struct PostalDirectory {
    areas: RwLock<BTreeMap<String, PostalArea>>,
}

impl PostalDirectory {
    /// Creates an empty directory.
    ///
    /// `const` so the process instance can live in a `static` with no
    /// runtime initialization step.
    pub const fn new() -> Self {
        Self {
            areas: RwLock::new(BTreeMap::new()),
        }
    }

    /// Inserts or replaces the area for `postal_code`.
    pub fn register(&self, postal_code: impl Into<String>, area: PostalArea) -> PostalResult<()> {
        let mut areas = self.write()?;
        areas.insert(postal_code.into(), area);
        debug!(
            "event=postal_register module=postal status=ok entries={}",
            areas.len()
        );
        Ok(())
    }

    /// Returns the full area for `postal_code`.
    pub fn lookup(&self, postal_code: &str) -> PostalResult<PostalArea> {
        self.read()?
            .get(postal_code)
            .cloned()
            .ok_or_else(|| PostalError::UnknownPostalCode(postal_code.to_string()))
    }

    pub fn len(&self) -> PostalResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> PostalResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Drops every registered area.
    pub fn clear(&self) -> PostalResult<()> {
        self.write()?.clear();
        Ok(())
    }

    fn read(&self) -> PostalResult<RwLockReadGuard<'_, BTreeMap<String, PostalArea>>> {
        self.areas
            .read()
            .map_err(|_| PostalError::Unavailable("postal directory lock poisoned".to_string()))
    }

    fn write(&self) -> PostalResult<RwLockWriteGuard<'_, BTreeMap<String, PostalArea>>> {
        self.areas
            .write()
            .map_err(|_| PostalError::Unavailable("postal directory lock poisoned".to_string()))
    }
}

impl PostalCodeResolver for PostalDirectory {
    fn resolve_city(&self, postal_code: &str) -> PostalResult<String> {
        self.lookup(postal_code).map(|area| area.city)
    }

    fn resolve_state(&self, postal_code: &str) -> PostalResult<String> {
        self.lookup(postal_code).map(|area| area.state)
    }
}
