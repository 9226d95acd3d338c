//! Room domain entity

use serde::{Deserialize, Serialize};

/// A bookable room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Store-assigned identifier
    pub id: i32,
    /// Display name, e.g. "General's Quarters"
    pub name: String,
}

impl Room {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
