//! `PubKey` - public key of any registered algorithm.

use core::fmt::{self, Debug, Display};
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroizing;

use super::{empty_payload, private, Signature, Variant};
use crate::core::algorithm::{Algorithm, AlgorithmDescriptor};
use crate::core::codec::json;
use crate::core::error::{KeyError, KeyResult};
use crate::core::operations::address::{self, Address};

#[cfg(feature = "ed25519")]
use crate::core::scheme::PubKeyEd25519;
#[cfg(feature = "secp256k1")]
use crate::core::scheme::PubKeySecp256k1;

/// A public key of any registered algorithm, or the empty key.
///
/// # Example
///
/// ```rust
/// use polykey::{Algorithm, PrivKey, PubKey, Variant};
///
/// let pub_key = PrivKey::generate(Algorithm::Secp256k1)?.pub_key();
///
/// let text = pub_key.to_string();
/// assert!(text.starts_with("secp256k1:"));
///
/// let parsed: PubKey = text.parse()?;
/// assert_eq!(parsed, pub_key);
/// # Ok::<(), polykey::KeyError>(())
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub enum PubKey {
    /// No key.
    #[default]
    Empty,
    /// An Ed25519 public key.
    #[cfg(feature = "ed25519")]
    Ed25519(PubKeyEd25519),
    /// A compressed secp256k1 public key.
    #[cfg(feature = "secp256k1")]
    Secp256k1(PubKeySecp256k1),
}

impl PubKey {
    /// Wraps a concrete key, an existing `PubKey`, or nil (`None`).
    ///
    /// Wrapping is idempotent: an already wrapped key comes back unchanged.
    #[must_use]
    pub fn wrap(value: impl Into<Self>) -> Self {
        value.into()
    }

    /// Checks `signature` over `message`.
    ///
    /// Returns `false` when the algorithms differ, when either side is
    /// empty, or when the signature bytes are malformed.
    #[must_use]
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        match (self, signature) {
            #[cfg(feature = "ed25519")]
            (Self::Ed25519(key), Signature::Ed25519(signature)) => key.verify(message, signature),
            #[cfg(feature = "secp256k1")]
            (Self::Secp256k1(key), Signature::Secp256k1(signature)) => {
                key.verify(message, signature)
            }
            _ => false,
        }
    }

    /// Returns the 20-byte address of this key, or `None` for the empty key.
    #[must_use]
    pub fn address(&self) -> Option<Address> {
        match self {
            Self::Empty => None,
            #[cfg(feature = "ed25519")]
            Self::Ed25519(_) => Some(address::ed25519_address(&self.to_wire())),
            #[cfg(feature = "secp256k1")]
            Self::Secp256k1(key) => Some(address::secp256k1_address(key.as_bytes())),
        }
    }
}

impl private::Sealed for PubKey {}

impl Variant for PubKey {
    const KIND: &'static str = "public key";

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
            Self::Ed25519(key) => Zeroizing::new(key.as_bytes().to_vec()),
            #[cfg(feature = "secp256k1")]
            Self::Secp256k1(key) => Zeroizing::new(key.as_bytes().to_vec()),
        }
    }

    fn payload_length(descriptor: &AlgorithmDescriptor) -> Option<usize> {
        Some(descriptor.public_key_length)
    }

    fn from_payload(algorithm: Option<Algorithm>, payload: &[u8]) -> KeyResult<Self> {
        match algorithm {
            None => empty_payload(payload).map(|()| Self::Empty),
            #[cfg(feature = "ed25519")]
            Some(Algorithm::Ed25519) => PubKeyEd25519::from_bytes(payload).map(Self::Ed25519),
            #[cfg(feature = "secp256k1")]
            Some(Algorithm::Secp256k1) => {
                PubKeySecp256k1::from_bytes(payload).map(Self::Secp256k1)
            }
        }
    }
}

// =============================================================================
// Wrapping
// =============================================================================

#[cfg(feature = "ed25519")]
impl From<PubKeyEd25519> for PubKey {
    fn from(key: PubKeyEd25519) -> Self {
        Self::Ed25519(key)
    }
}

#[cfg(feature = "secp256k1")]
impl From<PubKeySecp256k1> for PubKey {
    fn from(key: PubKeySecp256k1) -> Self {
        Self::Secp256k1(key)
    }
}

impl<T: Into<PubKey>> From<Option<T>> for PubKey {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl<T: Into<PubKey>> From<Box<T>> for PubKey {
    fn from(value: Box<T>) -> Self {
        (*value).into()
    }
}

// =============================================================================
// Display / Debug / FromStr (human-readable text format)
// =============================================================================

impl Display for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl Debug for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PubKey({})", self.to_text())
    }
}

impl FromStr for PubKey {
    type Err = KeyError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_text(text)
    }
}

// =============================================================================
// serde (structured-text format)
// =============================================================================

impl Serialize for PubKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        json::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for PubKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        json::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "ed25519")]
    use crate::core::types::PrivKey;

    #[test]
    fn test_empty() {
        assert!(PubKey::Empty.is_empty());
        assert_eq!(PubKey::Empty.address(), None);
        assert!(!PubKey::Empty.verify(b"message", &Signature::Empty));
    }

    #[test]
    fn test_debug_shows_text_form() {
        assert_eq!(format!("{:?}", PubKey::Empty), "PubKey(empty:)");
    }

    #[test]
    #[cfg(feature = "ed25519")]
    fn test_verify_rejects_empty_signature() -> KeyResult<()> {
        let pub_key = PrivKey::generate(Algorithm::Ed25519)?.pub_key();
        assert!(!pub_key.verify(b"message", &Signature::Empty));
        Ok(())
    }

    #[test]
    #[cfg(all(feature = "ed25519", feature = "secp256k1"))]
    fn test_verify_rejects_algorithm_mismatch() -> KeyResult<()> {
        let ed = PrivKey::generate(Algorithm::Ed25519)?;
        let k1 = PrivKey::generate(Algorithm::Secp256k1)?;

        let signature = k1.sign(b"message");
        assert!(!ed.pub_key().verify(b"message", &signature));
        assert!(k1.pub_key().verify(b"message", &signature));
        Ok(())
    }

    #[test]
    #[cfg(feature = "ed25519")]
    fn test_wrap_nested_box() -> KeyResult<()> {
        let pub_key = PrivKey::generate(Algorithm::Ed25519)?.pub_key();
        let nested = PubKey::wrap(Box::new(Box::new(Box::new(pub_key.clone()))));
        assert_eq!(nested, pub_key);
        Ok(())
    }

    #[test]
    #[cfg(feature = "ed25519")]
    fn test_address_is_stable() -> KeyResult<()> {
        let pub_key = PrivKey::generate(Algorithm::Ed25519)?.pub_key();
        let a = pub_key.address();
        let b = pub_key.clone().address();
        assert!(a.is_some());
        assert_eq!(a, b);
        Ok(())
    }
}
