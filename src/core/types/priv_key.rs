//! `PrivKey` - private key of any registered algorithm.

use core::fmt::{self, Debug, Display};
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroizing;

use super::{empty_payload, private, PubKey, Signature, Variant};
use crate::core::algorithm::{Algorithm, AlgorithmDescriptor};
use crate::core::codec::json;
use crate::core::error::{KeyError, KeyResult};

#[cfg(feature = "ed25519")]
use crate::core::scheme::PrivKeyEd25519;
#[cfg(feature = "secp256k1")]
use crate::core::scheme::PrivKeySecp256k1;

/// A private key of any registered algorithm, or the empty key.
///
/// # Security
///
/// - Key material is zeroized on drop
/// - Debug output redacts the key
/// - Equality comparison is constant-time
///
/// # Example
///
/// ```rust
/// use polykey::{Algorithm, PrivKey, Variant};
///
/// let priv_key = PrivKey::generate(Algorithm::Ed25519)?;
/// let signature = priv_key.sign(b"hello");
/// assert!(priv_key.pub_key().verify(b"hello", &signature));
///
/// // Wrapping an existing key is a no-op
/// assert_eq!(PrivKey::wrap(priv_key.clone()), priv_key);
/// # Ok::<(), polykey::KeyError>(())
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub enum PrivKey {
    /// No key.
    #[default]
    Empty,
    /// An Ed25519 private key.
    #[cfg(feature = "ed25519")]
    Ed25519(PrivKeyEd25519),
    /// A secp256k1 private key.
    #[cfg(feature = "secp256k1")]
    Secp256k1(PrivKeySecp256k1),
}

impl PrivKey {
    /// Generates a fresh key for `algorithm` from the OS random source.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::RandomSource` if the OS random source fails.
    pub fn generate(algorithm: Algorithm) -> KeyResult<Self> {
        match algorithm {
            #[cfg(feature = "ed25519")]
            Algorithm::Ed25519 => PrivKeyEd25519::generate().map(Self::Ed25519),
            #[cfg(feature = "secp256k1")]
            Algorithm::Secp256k1 => PrivKeySecp256k1::generate().map(Self::Secp256k1),
        }
    }

    /// Wraps a concrete key, an existing `PrivKey`, or nil (`None`).
    ///
    /// Wrapping is idempotent: an already wrapped key comes back unchanged.
    #[must_use]
    pub fn wrap(value: impl Into<Self>) -> Self {
        value.into()
    }

    /// Derives the public key. The empty key derives the empty public key.
    #[must_use]
    pub fn pub_key(&self) -> PubKey {
        match self {
            Self::Empty => PubKey::Empty,
            #[cfg(feature = "ed25519")]
            Self::Ed25519(key) => PubKey::Ed25519(key.pub_key()),
            #[cfg(feature = "secp256k1")]
            Self::Secp256k1(key) => PubKey::Secp256k1(key.pub_key()),
        }
    }

    /// Signs `message`. The empty key produces the empty signature.
    #[must_use]
    pub fn sign(&self, message: &[u8]) -> Signature {
        match self {
            Self::Empty => Signature::Empty,
            #[cfg(feature = "ed25519")]
            Self::Ed25519(key) => Signature::Ed25519(key.sign(message)),
            #[cfg(feature = "secp256k1")]
            Self::Secp256k1(key) => Signature::Secp256k1(key.sign(message)),
        }
    }
}

impl private::Sealed for PrivKey {}

impl Variant for PrivKey {
    const KIND: &'static str = "private key";

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
            Self::Ed25519(key) => Zeroizing::new(key.to_bytes().to_vec()),
            #[cfg(feature = "secp256k1")]
            Self::Secp256k1(key) => Zeroizing::new(key.to_bytes().to_vec()),
        }
    }

    fn payload_length(descriptor: &AlgorithmDescriptor) -> Option<usize> {
        Some(descriptor.private_key_length)
    }

    fn from_payload(algorithm: Option<Algorithm>, payload: &[u8]) -> KeyResult<Self> {
        match algorithm {
            None => empty_payload(payload).map(|()| Self::Empty),
            #[cfg(feature = "ed25519")]
            Some(Algorithm::Ed25519) => PrivKeyEd25519::from_bytes(payload).map(Self::Ed25519),
            #[cfg(feature = "secp256k1")]
            Some(Algorithm::Secp256k1) => {
                PrivKeySecp256k1::from_bytes(payload).map(Self::Secp256k1)
            }
        }
    }
}

// =============================================================================
// Wrapping
// =============================================================================

#[cfg(feature = "ed25519")]
impl From<PrivKeyEd25519> for PrivKey {
    fn from(key: PrivKeyEd25519) -> Self {
        Self::Ed25519(key)
    }
}

#[cfg(feature = "secp256k1")]
impl From<PrivKeySecp256k1> for PrivKey {
    fn from(key: PrivKeySecp256k1) -> Self {
        Self::Secp256k1(key)
    }
}

impl<T: Into<PrivKey>> From<Option<T>> for PrivKey {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl<T: Into<PrivKey>> From<Box<T>> for PrivKey {
    fn from(value: Box<T>) -> Self {
        (*value).into()
    }
}

// =============================================================================
// Display / FromStr (human-readable text format)
// =============================================================================

impl Display for PrivKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromStr for PrivKey {
    type Err = KeyError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_text(text)
    }
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl Debug for PrivKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.algorithm() {
            None => f.write_str("PrivKey::Empty"),
            Some(algorithm) => f
                .debug_struct("PrivKey")
                .field("algorithm", &algorithm.name())
                .field("key", &"[REDACTED]")
                .finish(),
        }
    }
}

// =============================================================================
// serde (structured-text format)
// =============================================================================

impl Serialize for PrivKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        json::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for PrivKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        json::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_default() {
        let key = PrivKey::default();
        assert!(key.is_empty());
        assert_eq!(key.algorithm(), None);
        assert!(key.payload().is_empty());
    }

    #[test]
    fn test_empty_derives_empty() {
        let key = PrivKey::Empty;
        assert_eq!(key.pub_key(), PubKey::Empty);
        assert_eq!(key.sign(b"message"), Signature::Empty);
    }

    #[test]
    fn test_wrap_none_is_empty() {
        assert_eq!(PrivKey::wrap(None::<PrivKey>), PrivKey::Empty);
        assert_eq!(PrivKey::wrap(Some(None::<PrivKey>)), PrivKey::Empty);
    }

    #[test]
    fn test_empty_rejects_payload() {
        let result = PrivKey::from_payload(None, &[0x01]);
        assert!(matches!(
            result,
            Err(KeyError::LengthMismatch {
                algorithm: "empty",
                expected: 0,
                actual: 1,
            })
        ));
    }

    #[test]
    #[cfg(feature = "ed25519")]
    fn test_wrap_is_idempotent() -> KeyResult<()> {
        let key = PrivKey::generate(Algorithm::Ed25519)?;
        let wrapped = PrivKey::wrap(PrivKey::wrap(key.clone()));
        assert_eq!(wrapped, key);

        let boxed = PrivKey::wrap(Box::new(Some(Box::new(key.clone()))));
        assert_eq!(boxed, key);
        Ok(())
    }

    #[test]
    #[cfg(feature = "ed25519")]
    fn test_payload_roundtrip() -> KeyResult<()> {
        let key = PrivKey::generate(Algorithm::Ed25519)?;
        let payload = key.payload();
        assert_eq!(payload.len(), 64);

        let rebuilt = PrivKey::from_payload(Some(Algorithm::Ed25519), &payload)?;
        assert_eq!(rebuilt, key);
        Ok(())
    }

    #[test]
    #[cfg(all(feature = "ed25519", feature = "secp256k1"))]
    fn test_different_algorithms_not_equal() -> KeyResult<()> {
        let ed = PrivKey::generate(Algorithm::Ed25519)?;
        let k1 = PrivKey::generate(Algorithm::Secp256k1)?;
        assert_ne!(ed, k1);
        assert_ne!(ed, PrivKey::Empty);
        Ok(())
    }

    #[test]
    #[cfg(feature = "secp256k1")]
    fn test_debug_redacts_key() -> KeyResult<()> {
        let key = PrivKey::generate(Algorithm::Secp256k1)?;
        let debug_str = format!("{key:?}");
        assert!(debug_str.contains("secp256k1"));
        assert!(debug_str.contains("[REDACTED]"));
        assert_eq!(format!("{:?}", PrivKey::Empty), "PrivKey::Empty");
        Ok(())
    }
}
