//! Session ingredient entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single free-text ingredient line held in the session store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientEntry {
    /// Identifier unique within the session, never reused after removal
    pub id: u64,
    /// Ingredient description as the user typed it, e.g. "200g poulet grillé"
    pub text: String,
    /// When the entry was added; serialized as an RFC 3339 string
    pub added_at: DateTime<Utc>,
}

impl IngredientEntry {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            added_at: Utc::now(),
        }
    }
}
