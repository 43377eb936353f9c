//! Storage layer
//!
//! Quotes live only in process memory; nothing survives a restart.

pub mod memory;

pub use memory::MemoryQuoteStore;
