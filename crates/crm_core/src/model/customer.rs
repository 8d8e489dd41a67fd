//! Customer record and postal area value types.
//!
//! # Responsibility
//! - Carry migrated customer data from the facade to persistence.
//! - Carry resolved city/state pairs inside the postal directory.
//!
//! # Invariants
//! - All fields are opaque strings; no format validation happens here.

use serde::{Deserialize, Serialize};

/// Customer row handed to the CRM repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub name: String,
    /// Postal code (CEP) exactly as the caller supplied it.
    pub postal_code: String,
    pub city: String,
    pub state: String,
}

impl CustomerRecord {
    pub fn new(
        name: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            postal_code: postal_code.into(),
            city: city.into(),
            state: state.into(),
        }
    }
}

/// City/state pair a postal code resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalArea {
    pub city: String,
    pub state: String,
}

impl PostalArea {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
        }
    }
}
