//! Ed25519 adapter backed by `ed25519-dalek`.
//!
//! Private keys are carried in the 64-byte keypair form
//! (`seed || public key`), public keys are 32 bytes and signatures are
//! 64 bytes.

use core::fmt::{self, Debug};

use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use super::{fixed_bytes, private, random_seed, SignatureScheme};
use crate::core::algorithm::Algorithm;
use crate::core::error::{KeyError, KeyResult};

/// Ed25519 private key length (seed followed by public key).
pub const PRIVATE_KEY_SIZE: usize = 64;

/// Ed25519 public key length.
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Ed25519 signature length.
pub const SIGNATURE_SIZE: usize = 64;

/// Marker for the Ed25519 signature scheme.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ed25519;

impl private::Sealed for Ed25519 {}

impl SignatureScheme for Ed25519 {
    const ALGORITHM: Algorithm = Algorithm::Ed25519;

    type PrivKey = PrivKeyEd25519;
    type PubKey = PubKeyEd25519;
    type Signature = SignatureEd25519;

    fn generate() -> KeyResult<PrivKeyEd25519> {
        PrivKeyEd25519::generate()
    }

    fn derive_public(priv_key: &PrivKeyEd25519) -> PubKeyEd25519 {
        priv_key.pub_key()
    }

    fn sign(priv_key: &PrivKeyEd25519, message: &[u8]) -> SignatureEd25519 {
        priv_key.sign(message)
    }

    fn verify(pub_key: &PubKeyEd25519, message: &[u8], signature: &SignatureEd25519) -> bool {
        pub_key.verify(message, signature)
    }
}

// =============================================================================
// Private key
// =============================================================================

/// An Ed25519 private key.
///
/// # Security
///
/// - Key material is zeroized on drop (by `ed25519-dalek`)
/// - Debug output redacts the key
/// - Equality comparison is constant-time
#[derive(Clone)]
pub struct PrivKeyEd25519(SigningKey);

impl PrivKeyEd25519 {
    /// Generates a new key from the OS random source.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::RandomSource` if the OS random source fails.
    pub fn generate() -> KeyResult<Self> {
        let seed = random_seed()?;
        Ok(Self::from_seed(&seed))
    }

    /// Creates a key from its 32-byte seed.
    #[must_use]
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self(SigningKey::from_bytes(seed))
    }

    /// Parses the 64-byte keypair form.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::LengthMismatch` if `bytes` is not 64 bytes long and
    /// `KeyError::InvalidKeyMaterial` if the public half does not belong to
    /// the seed.
    pub fn from_bytes(bytes: &[u8]) -> KeyResult<Self> {
        let keypair = Zeroizing::new(fixed_bytes::<PRIVATE_KEY_SIZE>(Algorithm::Ed25519, bytes)?);
        SigningKey::from_keypair_bytes(&keypair)
            .map(Self)
            .map_err(|_| KeyError::InvalidKeyMaterial {
                algorithm: Algorithm::Ed25519.name(),
            })
    }

    /// Returns the 64-byte keypair form.
    #[must_use]
    pub fn to_bytes(&self) -> Zeroizing<[u8; PRIVATE_KEY_SIZE]> {
        Zeroizing::new(self.0.to_keypair_bytes())
    }

    /// Derives the matching public key.
    #[must_use]
    pub fn pub_key(&self) -> PubKeyEd25519 {
        PubKeyEd25519(self.0.verifying_key().to_bytes())
    }

    /// Signs `message`.
    #[must_use]
    pub fn sign(&self, message: &[u8]) -> SignatureEd25519 {
        SignatureEd25519(self.0.sign(message).to_bytes())
    }
}

impl Debug for PrivKeyEd25519 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivKeyEd25519")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

impl PartialEq for PrivKeyEd25519 {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes()[..].ct_eq(&other.to_bytes()[..]).into()
    }
}

impl Eq for PrivKeyEd25519 {}

// =============================================================================
// Public key
// =============================================================================

/// An Ed25519 public key.
///
/// The bytes are not checked to be a valid curve point; an invalid key
/// simply fails every verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PubKeyEd25519([u8; PUBLIC_KEY_SIZE]);

impl PubKeyEd25519 {
    /// Parses a 32-byte public key.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::LengthMismatch` if `bytes` is not 32 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> KeyResult<Self> {
        fixed_bytes(Algorithm::Ed25519, bytes).map(Self)
    }

    /// Returns the raw key bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    /// Checks `signature` over `message`.
    #[must_use]
    pub fn verify(&self, message: &[u8], signature: &SignatureEd25519) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(&self.0) else {
            return false;
        };
        let signature = ed25519_dalek::Signature::from_bytes(&signature.0);
        verifying_key.verify(message, &signature).is_ok()
    }
}

impl From<[u8; PUBLIC_KEY_SIZE]> for PubKeyEd25519 {
    fn from(key: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self(key)
    }
}

impl AsRef<[u8]> for PubKeyEd25519 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// =============================================================================
// Signature
// =============================================================================

/// An Ed25519 signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignatureEd25519([u8; SIGNATURE_SIZE]);

impl SignatureEd25519 {
    /// Parses a 64-byte signature.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::LengthMismatch` if `bytes` is not 64 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> KeyResult<Self> {
        fixed_bytes(Algorithm::Ed25519, bytes).map(Self)
    }

    /// Returns the raw signature bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.0
    }
}

impl From<[u8; SIGNATURE_SIZE]> for SignatureEd25519 {
    fn from(signature: [u8; SIGNATURE_SIZE]) -> Self {
        Self(signature)
    }
}

impl AsRef<[u8]> for SignatureEd25519 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SEED: [u8; 32] = [
        0x9d, 0x61, 0xb1, 0x9d, 0xef, 0xfd, 0x5a, 0x60, 0xba, 0x84, 0x4a, 0xf4, 0x92, 0xec, 0x2c,
        0xc4, 0x44, 0x49, 0xc5, 0x69, 0x7b, 0x32, 0x69, 0x19, 0x70, 0x3b, 0xac, 0x03, 0x1c, 0xae,
        0x7f, 0x60,
    ];

    // RFC 8032, section 7.1, TEST 1
    const TEST_PUBLIC: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
    const TEST_SIGNATURE: &str = "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e06522490155\
                                  5fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b";

    #[test]
    fn test_rfc8032_vector() {
        let priv_key = PrivKeyEd25519::from_seed(&TEST_SEED);
        assert_eq!(hex::encode(priv_key.pub_key().as_bytes()), TEST_PUBLIC);

        let signature = priv_key.sign(b"");
        assert_eq!(hex::encode(signature.as_bytes()), TEST_SIGNATURE);
        assert!(priv_key.pub_key().verify(b"", &signature));
    }

    #[test]
    fn test_keypair_bytes_roundtrip() -> KeyResult<()> {
        let priv_key = PrivKeyEd25519::from_seed(&TEST_SEED);
        let bytes = priv_key.to_bytes();
        assert_eq!(&bytes[..32], &TEST_SEED);
        assert_eq!(&bytes[32..], priv_key.pub_key().as_bytes());

        let parsed = PrivKeyEd25519::from_bytes(&*bytes)?;
        assert_eq!(parsed, priv_key);
        Ok(())
    }

    #[test]
    fn test_mismatched_keypair_rejected() {
        let mut bytes = *PrivKeyEd25519::from_seed(&TEST_SEED).to_bytes();
        bytes[63] ^= 0x01;
        let result = PrivKeyEd25519::from_bytes(&bytes);
        assert!(matches!(
            result,
            Err(KeyError::InvalidKeyMaterial {
                algorithm: "ed25519"
            })
        ));
    }

    #[test]
    fn test_wrong_lengths() {
        assert!(matches!(
            PrivKeyEd25519::from_bytes(&[0u8; 32]),
            Err(KeyError::LengthMismatch { expected: 64, .. })
        ));
        assert!(matches!(
            PubKeyEd25519::from_bytes(&[0u8; 33]),
            Err(KeyError::LengthMismatch { expected: 32, .. })
        ));
        assert!(matches!(
            SignatureEd25519::from_bytes(&[0u8; 63]),
            Err(KeyError::LengthMismatch { expected: 64, .. })
        ));
    }

    #[test]
    fn test_invalid_public_key_fails_verification() {
        let priv_key = PrivKeyEd25519::from_seed(&TEST_SEED);
        let signature = priv_key.sign(b"message");

        // Not a point on the curve
        let bogus = PubKeyEd25519::from([0xffu8; 32]);
        assert!(!bogus.verify(b"message", &signature));
    }

    #[test]
    fn test_debug_redacts_key() {
        let priv_key = PrivKeyEd25519::from_seed(&TEST_SEED);
        let debug_str = format!("{priv_key:?}");
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains("9d"));
    }

    #[test]
    fn test_generate_distinct_keys() -> KeyResult<()> {
        let a = PrivKeyEd25519::generate()?;
        let b = PrivKeyEd25519::generate()?;
        assert_ne!(a, b);
        Ok(())
    }
}
