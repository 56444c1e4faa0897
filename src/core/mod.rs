//! Core key envelope types and operations.
//!
//! - [`algorithm`] - The algorithm registry (tags, names, lengths)
//! - [`scheme`] - Primitive adapters for each registered algorithm
//! - [`types`] - Variant wrappers: `PrivKey`, `PubKey`, `Signature`
//! - [`codec`] - Binary wire, structured-text and human-readable encodings
//! - [`armor`] - PEM-style armor for arbitrary binary data
//! - [`operations`] - Operations over wrapped keys (addresses)
//! - [`header`] - Text-format prefix parsing and generation
//! - [`error`] - Error types

pub mod algorithm;
pub mod armor;
pub mod codec;
pub mod error;
pub mod header;
pub mod operations;
pub mod scheme;
pub mod types;

// Re-export commonly used items
pub use algorithm::{Algorithm, AlgorithmDescriptor};
pub use error::{KeyError, KeyResult};
