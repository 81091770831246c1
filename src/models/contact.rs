//! Phonebook contact model.

use serde::{Deserialize, Serialize};

/// A phonebook entry. Seeded at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    /// Phone number as entered, not validated
    pub number: String,
    pub id: i64,
}
