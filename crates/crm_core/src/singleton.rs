//! Process-wide service instances.
//!
//! # Responsibility
//! - Own the single postal directory and customer store of this process.
//! - Hand out `'static` references and a facade wired to them.
//!
//! # Invariants
//! - Instances are `static` items built by `const fn` constructors, so they
//!   exist before any code runs and are never rebuilt or dropped.
//! - Accessors have no parameters, no failure modes and no side effects.

use crate::postal::directory::PostalDirectory;
use crate::repo::customer_repo::CustomerStore;
use crate::service::migration_facade::CustomerMigrationFacade;

static POSTAL_DIRECTORY: PostalDirectory = PostalDirectory::new();
static CUSTOMER_STORE: CustomerStore = CustomerStore::new();

/// Facade type returned by [`process_facade`].
pub type ProcessFacade = CustomerMigrationFacade<&'static PostalDirectory, &'static CustomerStore>;

/// Returns the process postal directory.
pub fn postal_directory() -> &'static PostalDirectory {
    &POSTAL_DIRECTORY
}

/// Returns the process customer store.
pub fn customer_store() -> &'static CustomerStore {
    &CUSTOMER_STORE
}

/// Builds a migration facade over the process singletons.
///
/// The facade itself is a cheap pair of references; only the collaborators
/// are shared.
pub fn process_facade() -> ProcessFacade {
    CustomerMigrationFacade::new(postal_directory(), customer_store())
}
