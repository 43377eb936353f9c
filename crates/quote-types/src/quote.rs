//! Quote types

use serde::{Deserialize, Serialize};

/// A stored quote. The id is assigned by the store and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub id: u64,
    pub author: String,
    #[serde(rename = "quote")]
    pub text: String,
}

impl Quote {
    pub fn new(id: u64, author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            author: author.into(),
            text: text.into(),
        }
    }

    /// Case-insensitive author comparison used by the list filter
    pub fn is_by(&self, author: &str) -> bool {
        self.author == author || self.author.to_lowercase() == author.to_lowercase()
    }
}

/// Quote creation request
///
/// Absent fields decode to empty strings so that the presence check, not the
/// decoder, reports them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuoteRequest {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub quote: String,
}

impl CreateQuoteRequest {
    pub fn is_complete(&self) -> bool {
        !self.author.is_empty() && !self.quote.is_empty()
    }
}
