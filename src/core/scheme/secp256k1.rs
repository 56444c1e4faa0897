//! secp256k1 adapter backed by `k256`.
//!
//! Messages are hashed with SHA-256 and signed with deterministic ECDSA
//! (RFC 6979). Signatures are low-S and ASN.1 DER encoded, so their length
//! varies; public keys are SEC1 compressed points.

use core::fmt::{self, Debug};

use k256::ecdsa::signature::{Signer, Verifier};
use k256::ecdsa::{SigningKey, VerifyingKey};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use super::{fixed_bytes, private, random_seed, SignatureScheme};
use crate::core::algorithm::Algorithm;
use crate::core::error::{KeyError, KeyResult};

/// secp256k1 private key (scalar) length.
pub const PRIVATE_KEY_SIZE: usize = 32;

/// secp256k1 compressed public key length.
pub const PUBLIC_KEY_SIZE: usize = 33;

/// Upper bound on a DER-encoded secp256k1 signature.
pub const MAX_SIGNATURE_SIZE: usize = 72;

/// Marker for the secp256k1 ECDSA signature scheme.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Secp256k1;

impl private::Sealed for Secp256k1 {}

impl SignatureScheme for Secp256k1 {
    const ALGORITHM: Algorithm = Algorithm::Secp256k1;

    type PrivKey = PrivKeySecp256k1;
    type PubKey = PubKeySecp256k1;
    type Signature = SignatureSecp256k1;

    fn generate() -> KeyResult<PrivKeySecp256k1> {
        PrivKeySecp256k1::generate()
    }

    fn derive_public(priv_key: &PrivKeySecp256k1) -> PubKeySecp256k1 {
        priv_key.pub_key()
    }

    fn sign(priv_key: &PrivKeySecp256k1, message: &[u8]) -> SignatureSecp256k1 {
        priv_key.sign(message)
    }

    fn verify(pub_key: &PubKeySecp256k1, message: &[u8], signature: &SignatureSecp256k1) -> bool {
        pub_key.verify(message, signature)
    }
}

// =============================================================================
// Private key
// =============================================================================

/// A secp256k1 private key.
///
/// # Security
///
/// - Key material is zeroized on drop (by `k256`)
/// - Debug output redacts the key
/// - Equality comparison is constant-time
#[derive(Clone)]
pub struct PrivKeySecp256k1(SigningKey);

impl PrivKeySecp256k1 {
    /// Generates a new key from the OS random source.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::RandomSource` if the OS random source fails.
    pub fn generate() -> KeyResult<Self> {
        // A random 32-byte string is out of range with probability ~2^-128
        loop {
            let seed = random_seed()?;
            if let Ok(key) = SigningKey::from_slice(&seed[..]) {
                return Ok(Self(key));
            }
        }
    }

    /// Parses a 32-byte big-endian scalar.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::LengthMismatch` if `bytes` is not 32 bytes long and
    /// `KeyError::InvalidKeyMaterial` if the scalar is zero or not below the
    /// group order.
    pub fn from_bytes(bytes: &[u8]) -> KeyResult<Self> {
        let scalar = Zeroizing::new(fixed_bytes::<PRIVATE_KEY_SIZE>(Algorithm::Secp256k1, bytes)?);
        SigningKey::from_slice(&scalar[..])
            .map(Self)
            .map_err(|_| KeyError::InvalidKeyMaterial {
                algorithm: Algorithm::Secp256k1.name(),
            })
    }

    /// Returns the 32-byte big-endian scalar.
    #[must_use]
    pub fn to_bytes(&self) -> Zeroizing<[u8; PRIVATE_KEY_SIZE]> {
        let mut out = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
        out.copy_from_slice(&self.0.to_bytes());
        out
    }

    /// Derives the matching compressed public key.
    #[must_use]
    pub fn pub_key(&self) -> PubKeySecp256k1 {
        let point = self.0.verifying_key().to_encoded_point(true);
        let mut key = [0u8; PUBLIC_KEY_SIZE];
        key.copy_from_slice(point.as_bytes());
        PubKeySecp256k1(key)
    }

    /// Signs SHA-256(`message`), returning a DER-encoded signature.
    #[must_use]
    pub fn sign(&self, message: &[u8]) -> SignatureSecp256k1 {
        let signature: k256::ecdsa::Signature = self.0.sign(message);
        SignatureSecp256k1(signature.to_der().as_bytes().to_vec())
    }
}

impl Debug for PrivKeySecp256k1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivKeySecp256k1")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

impl PartialEq for PrivKeySecp256k1 {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes()[..].ct_eq(&other.to_bytes()[..]).into()
    }
}

impl Eq for PrivKeySecp256k1 {}

// =============================================================================
// Public key
// =============================================================================

/// A compressed secp256k1 public key.
///
/// The bytes are not checked to be a valid curve point; an invalid key
/// simply fails every verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PubKeySecp256k1([u8; PUBLIC_KEY_SIZE]);

impl PubKeySecp256k1 {
    /// Parses a 33-byte compressed public key.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::LengthMismatch` if `bytes` is not 33 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> KeyResult<Self> {
        fixed_bytes(Algorithm::Secp256k1, bytes).map(Self)
    }

    /// Returns the raw compressed key bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    /// Checks a DER `signature` over SHA-256(`message`).
    ///
    /// High-S or non-DER signatures are rejected.
    #[must_use]
    pub fn verify(&self, message: &[u8], signature: &SignatureSecp256k1) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_sec1_bytes(&self.0) else {
            return false;
        };
        let Ok(signature) = k256::ecdsa::Signature::from_der(&signature.0) else {
            return false;
        };
        verifying_key.verify(message, &signature).is_ok()
    }
}

impl From<[u8; PUBLIC_KEY_SIZE]> for PubKeySecp256k1 {
    fn from(key: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self(key)
    }
}

impl AsRef<[u8]> for PubKeySecp256k1 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// =============================================================================
// Signature
// =============================================================================

/// A DER-encoded secp256k1 ECDSA signature.
///
/// Any byte string is accepted; one that is not valid DER fails every
/// verification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignatureSecp256k1(Vec<u8>);

impl SignatureSecp256k1 {
    /// Wraps DER signature bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    /// Returns the DER bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for SignatureSecp256k1 {
    fn from(der: Vec<u8>) -> Self {
        Self(der)
    }
}

impl AsRef<[u8]> for SignatureSecp256k1 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
