//! Quote Catalog Core Library
//!
//! Domain errors and the port traits the server plugs its store and
//! random source into.

// Re-export pure types from quote-types
pub use quote_types::*;

pub mod error;
pub mod ports;

pub use error::{QuoteError, Result};
pub use ports::{QuoteStore, RandomSource, SeededRandom};
