//! `Signature` - signature of any registered algorithm.

use core::fmt::{self, Debug, Display};
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroizing;

use super::{empty_payload, private, Variant};
use crate::core::algorithm::{Algorithm, AlgorithmDescriptor};
use crate::core::codec::json;
use crate::core::error::{KeyError, KeyResult};

#[cfg(feature = "ed25519")]
use crate::core::scheme::SignatureEd25519;
#[cfg(feature = "secp256k1")]
use crate::core::scheme::SignatureSecp256k1;

/// A signature of any registered algorithm, or the empty signature.
///
/// Two signatures are equal when their algorithms match and their bytes
/// are identical.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub enum Signature {
    /// No signature.
    #[default]
    Empty,
    /// A 64-byte Ed25519 signature.
    #[cfg(feature = "ed25519")]
    Ed25519(SignatureEd25519),
    /// A DER-encoded secp256k1 ECDSA signature.
    #[cfg(feature = "secp256k1")]
    Secp256k1(SignatureSecp256k1),
}

impl Signature {
    /// Wraps a concrete signature, an existing `Signature`, or nil (`None`).
    ///
    /// Wrapping is idempotent: an already wrapped signature comes back
    /// unchanged.
    #[must_use]
    pub fn wrap(value: impl Into<Self>) -> Self {
        value.into()
    }
}

impl private::Sealed for Signature {}

impl Variant for Signature {
    const KIND: &'static str = "signature";

    fn algorithm(&self) -> Option<Algorithm> {
        match self {
            Self::Empty => None,
            #[cfg(feature = "ed25519")]
            Self::Ed25519(_) => Some(Algorithm::Ed25519),
            #[cfg(feature = "secp256k1")]
            Self::Secp256k1(_) => Some(Algorithm::Secp256k1),
        }
    }

    fn payload(&self) -> Zeroizing<Vec<u8>> {
        match self {
            Self::Empty => Zeroizing::new(Vec::new()),
            #[cfg(feature = "ed25519")]
            Self::Ed25519(signature) => Zeroizing::new(signature.as_bytes().to_vec()),
            #[cfg(feature = "secp256k1")]
            Self::Secp256k1(signature) => Zeroizing::new(signature.as_bytes().to_vec()),
        }
    }

    fn payload_length(descriptor: &AlgorithmDescriptor) -> Option<usize> {
        descriptor.signature_length
    }

    fn from_payload(algorithm: Option<Algorithm>, payload: &[u8]) -> KeyResult<Self> {
        match algorithm {
            None => empty_payload(payload).map(|()| Self::Empty),
            #[cfg(feature = "ed25519")]
            Some(Algorithm::Ed25519) => SignatureEd25519::from_bytes(payload).map(Self::Ed25519),
            #[cfg(feature = "secp256k1")]
            Some(Algorithm::Secp256k1) => Ok(Self::Secp256k1(SignatureSecp256k1::from_bytes(
                payload,
            ))),
        }
    }
}

// =============================================================================
// Wrapping
// =============================================================================

#[cfg(feature = "ed25519")]
impl From<SignatureEd25519> for Signature {
    fn from(signature: SignatureEd25519) -> Self {
        Self::Ed25519(signature)
    }
}

#[cfg(feature = "secp256k1")]
impl From<SignatureSecp256k1> for Signature {
    fn from(signature: SignatureSecp256k1) -> Self {
        Self::Secp256k1(signature)
    }
}

impl<T: Into<Signature>> From<Option<T>> for Signature {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl<T: Into<Signature>> From<Box<T>> for Signature {
    fn from(value: Box<T>) -> Self {
        (*value).into()
    }
}

// =============================================================================
// Display / Debug / FromStr (human-readable text format)
// =============================================================================

impl Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self.to_text())
    }
}

impl FromStr for Signature {
    type Err = KeyError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_text(text)
    }
}

// =============================================================================
// serde (structured-text format)
// =============================================================================

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        json::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        json::deserialize(deserializer)
    }
}
