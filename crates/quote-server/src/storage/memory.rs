//! In-memory quote store guarded by a single mutex

use async_trait::async_trait;
use quote_core::{Quote, QuoteError, QuoteStore, RandomSource, Result, SeededRandom};
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Quote registry with monotonic id assignment.
///
/// The sequence, the id counter and the random source sit behind one lock,
/// so every operation observes and leaves a consistent catalog.
pub struct MemoryQuoteStore {
    inner: Mutex<Catalog>,
}

struct Catalog {
    quotes: Vec<Quote>,
    next_id: u64,
    rng: Box<dyn RandomSource>,
}

impl MemoryQuoteStore {
    /// Empty store seeded from the wall clock
    pub fn new() -> Self {
        Self::with_random(SeededRandom::from_time())
    }

    /// Empty store drawing random picks from `rng`
    pub fn with_random(rng: impl RandomSource + 'static) -> Self {
        Self {
            inner: Mutex::new(Catalog {
                quotes: Vec::new(),
                next_id: 1,
                rng: Box::new(rng),
            }),
        }
    }
}

impl Default for MemoryQuoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteStore for MemoryQuoteStore {
    async fn add(&self, author: &str, text: &str) -> Result<Quote> {
        if author.is_empty() || text.is_empty() {
            return Err(QuoteError::missing_fields());
        }

        let mut catalog = self.inner.lock().await;
        let quote = Quote::new(catalog.next_id, author, text);
        catalog.next_id += 1;
        catalog.quotes.push(quote.clone());

        info!("Added quote {} by {}", quote.id, quote.author);
        Ok(quote)
    }

    async fn list(&self, author: Option<&str>) -> Result<Vec<Quote>> {
        let catalog = self.inner.lock().await;

        let quotes: Vec<Quote> = match author.filter(|a| !a.is_empty()) {
            Some(author) => catalog
                .quotes
                .iter()
                .filter(|q| q.is_by(author))
                .cloned()
                .collect(),
            None => catalog.quotes.clone(),
        };

        debug!("Listing {} of {} quotes", quotes.len(), catalog.quotes.len());
        Ok(quotes)
    }

    async fn random(&self) -> Result<Quote> {
        let mut catalog = self.inner.lock().await;
        if catalog.quotes.is_empty() {
            return Err(QuoteError::store_empty());
        }

        let len = catalog.quotes.len();
        let index = catalog.rng.next(len);
        let quote = catalog
            .quotes
            .get(index)
            .cloned()
            .ok_or_else(QuoteError::store_empty)?;

        debug!("Picked quote {} ({} of {})", quote.id, index + 1, len);
        Ok(quote)
    }

    async fn delete(&self, id: u64) -> Result<()> {
        let mut catalog = self.inner.lock().await;

        let position = catalog
            .quotes
            .iter()
            .position(|q| q.id == id)
            .ok_or_else(QuoteError::quote_not_found)?;
        // Vec::remove shifts the tail down, keeping relative order
        catalog.quotes.remove(position);

        info!("Deleted quote {}", id);
        Ok(())
    }

    async fn len(&self) -> usize {
        self.inner.lock().await.quotes.len()
    }
}
