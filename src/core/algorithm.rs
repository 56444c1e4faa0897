//! Algorithm registry.
//!
//! Every supported signing algorithm has one immutable [`AlgorithmDescriptor`]
//! binding a one-byte wire tag and a name string to the lengths of its key
//! and signature material. The registry is a static table: lookups by tag
//! and by name are pure and need no synchronization.
//!
//! Tags and names are persisted in encoded data. A new algorithm must take
//! a fresh tag; existing tags are never reused or renumbered.

use core::fmt::{self, Display};

use crate::core::error::{KeyError, KeyResult};

/// Wire tag reserved for the empty value.
pub const EMPTY_TAG: u8 = 0x00;

/// Name reserved for the empty value in the text formats.
pub const EMPTY_NAME: &str = "empty";

/// A registered signing algorithm.
///
/// Variants are compiled in by the matching Cargo feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Algorithm {
    /// EdDSA over Curve25519.
    #[cfg(feature = "ed25519")]
    Ed25519,
    /// ECDSA over secp256k1 with SHA-256.
    #[cfg(feature = "secp256k1")]
    Secp256k1,
}

/// Static description of one algorithm's encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmDescriptor {
    /// The algorithm being described.
    pub algorithm: Algorithm,
    /// Binary wire tag. Never [`EMPTY_TAG`].
    pub tag: u8,
    /// Name used by the structured and human-readable text formats.
    pub name: &'static str,
    /// Length of an encoded private key.
    pub private_key_length: usize,
    /// Length of an encoded public key.
    pub public_key_length: usize,
    /// Length of an encoded signature, or `None` when signatures vary in size.
    pub signature_length: Option<usize>,
}

#[cfg(feature = "ed25519")]
const ED25519: AlgorithmDescriptor = AlgorithmDescriptor {
    algorithm: Algorithm::Ed25519,
    tag: 0x01,
    name: "ed25519",
    private_key_length: 64,
    public_key_length: 32,
    signature_length: Some(64),
};

#[cfg(feature = "secp256k1")]
const SECP256K1: AlgorithmDescriptor = AlgorithmDescriptor {
    algorithm: Algorithm::Secp256k1,
    tag: 0x02,
    name: "secp256k1",
    private_key_length: 32,
    public_key_length: 33,
    // DER-encoded ECDSA signatures are at most 72 bytes but vary in length
    signature_length: None,
};

/// All algorithms compiled into this build, in tag order.
pub static REGISTRY: &[AlgorithmDescriptor] = &[
    #[cfg(feature = "ed25519")]
    ED25519,
    #[cfg(feature = "secp256k1")]
    SECP256K1,
];

impl Algorithm {
    /// Returns the registry entry for this algorithm.
    #[must_use]
    pub const fn descriptor(self) -> &'static AlgorithmDescriptor {
        match self {
            #[cfg(feature = "ed25519")]
            Self::Ed25519 => &ED25519,
            #[cfg(feature = "secp256k1")]
            Self::Secp256k1 => &SECP256K1,
        }
    }

    /// The binary wire tag.
    #[must_use]
    pub const fn tag(self) -> u8 {
        self.descriptor().tag
    }

    /// The name used by the text formats.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// Iterates over every algorithm compiled into this build.
    pub fn all() -> impl Iterator<Item = Self> {
        REGISTRY.iter().map(|descriptor| descriptor.algorithm)
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks up the descriptor registered for a wire tag.
///
/// # Errors
///
/// Returns [`KeyError::UnknownTag`] if no algorithm uses `tag`. The
/// reserved [`EMPTY_TAG`] is not an algorithm and is also reported as
/// unknown here; codecs handle it before consulting the registry.
pub fn descriptor_for_tag(tag: u8) -> KeyResult<&'static AlgorithmDescriptor> {
    REGISTRY
        .iter()
        .find(|descriptor| descriptor.tag == tag)
        .ok_or(KeyError::UnknownTag { tag })
}

/// Looks up the descriptor registered for an algorithm name.
///
/// Names are matched exactly (case-sensitive).
///
/// # Errors
///
/// Returns [`KeyError::UnknownAlgorithmName`] if no algorithm uses `name`.
pub fn descriptor_for_name(name: &str) -> KeyResult<&'static AlgorithmDescriptor> {
    REGISTRY
        .iter()
        .find(|descriptor| descriptor.name == name)
        .ok_or_else(|| KeyError::UnknownAlgorithmName(name.to_string()))
}
