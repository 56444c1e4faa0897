//! Operations derived from wrapped key material.
//!
//! - [`address`] - Short public-key identifiers (RIPEMD-160 based)

pub mod address;
