//! Storage trait for the quote catalog

use crate::Result;
use async_trait::async_trait;
use quote_types::Quote;

/// Quote store
///
/// Implementations serialize every operation: no caller may observe a
/// partially applied add or delete.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Validate, assign the next id and append.
    async fn add(&self, author: &str, text: &str) -> Result<Quote>;

    /// Snapshot in insertion order. `None` or an empty filter returns everything.
    async fn list(&self, author: Option<&str>) -> Result<Vec<Quote>>;

    /// Uniform pick from the current contents.
    async fn random(&self) -> Result<Quote>;

    /// Remove the quote with this id. Ids are never handed out again.
    async fn delete(&self, id: u64) -> Result<()>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
