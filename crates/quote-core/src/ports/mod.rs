//! Port traits (interfaces) for dependency injection

pub mod random;
pub mod storage;

pub use random::{RandomSource, SeededRandom};
pub use storage::QuoteStore;
