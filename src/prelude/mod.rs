//! Ergonomic layer for key envelopes.
//!
//! The prelude re-exports the wrapper types, the registry, the armor codec
//! and the [`ArmorBuilder`].
//!
//! # Usage
//!
//! ```rust
//! use polykey::prelude::*;
//! ```

mod builders;

pub use builders::ArmorBuilder;

// Re-export core types for convenience
pub use crate::core::algorithm::{Algorithm, AlgorithmDescriptor, REGISTRY};
pub use crate::core::armor::{decode_armor, encode_armor, Armor, ArmorHeaders};
pub use crate::core::error::{KeyError, KeyResult};
pub use crate::core::operations::address::Address;
pub use crate::core::scheme::SignatureScheme;
pub use crate::core::types::{PrivKey, PubKey, Signature, Variant};

#[cfg(feature = "ed25519")]
pub use crate::core::scheme::{Ed25519, PrivKeyEd25519, PubKeyEd25519, SignatureEd25519};
#[cfg(feature = "secp256k1")]
pub use crate::core::scheme::{PrivKeySecp256k1, PubKeySecp256k1, Secp256k1, SignatureSecp256k1};
