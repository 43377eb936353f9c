//! Quote Types - Pure data definitions shared by the catalog crates
//!
//! Only serde types live here; nothing in this crate depends on an async runtime.

pub mod quote;

pub use quote::*;
