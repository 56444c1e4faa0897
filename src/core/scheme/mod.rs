//! Signature scheme adapters.
//!
//! Each supported algorithm has a zero-sized marker type implementing
//! [`SignatureScheme`] plus concrete key and signature types that delegate
//! the actual math to an external primitive library:
//!
//! - [`Ed25519`] - EdDSA over Curve25519 (`ed25519-dalek`)
//! - [`Secp256k1`] - ECDSA over secp256k1 with SHA-256 (`k256`)
//!
//! The concrete types are what the variant wrappers in
//! [`crate::core::types`] hold.

#[cfg(feature = "ed25519")]
mod ed25519;

#[cfg(feature = "secp256k1")]
mod secp256k1;

#[cfg(feature = "ed25519")]
pub use ed25519::{Ed25519, PrivKeyEd25519, PubKeyEd25519, SignatureEd25519};

#[cfg(feature = "secp256k1")]
pub use secp256k1::{PrivKeySecp256k1, PubKeySecp256k1, Secp256k1, SignatureSecp256k1};

use rand_core::{OsRng, TryRngCore};
use zeroize::Zeroizing;

use crate::core::algorithm::Algorithm;
use crate::core::error::{KeyError, KeyResult};
use crate::core::types::{PrivKey, PubKey, Signature};

mod private {
    pub trait Sealed {}
}

/// Trait for signature scheme markers.
///
/// This trait is sealed and cannot be implemented outside of this crate.
/// Each marker binds a registered [`Algorithm`] to the concrete key and
/// signature types that implement it.
pub trait SignatureScheme: private::Sealed + Default + Clone + Copy + Send + Sync + 'static {
    /// The registry entry this scheme encodes under.
    const ALGORITHM: Algorithm;

    /// Concrete private key type.
    type PrivKey: Clone + PartialEq + Into<PrivKey>;

    /// Concrete public key type.
    type PubKey: Clone + PartialEq + Into<PubKey>;

    /// Concrete signature type.
    type Signature: Clone + PartialEq + Into<Signature>;

    /// Generates a fresh private key from the OS random source.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::RandomSource` if the OS random source fails.
    fn generate() -> KeyResult<Self::PrivKey>;

    /// Derives the public key belonging to `priv_key`.
    fn derive_public(priv_key: &Self::PrivKey) -> Self::PubKey;

    /// Signs `message` with `priv_key`.
    fn sign(priv_key: &Self::PrivKey, message: &[u8]) -> Self::Signature;

    /// Checks `signature` over `message` against `pub_key`.
    ///
    /// Malformed keys or signatures verify as `false`.
    fn verify(pub_key: &Self::PubKey, message: &[u8], signature: &Self::Signature) -> bool;
}

/// Reads 32 bytes from the OS random source.
pub(crate) fn random_seed() -> KeyResult<Zeroizing<[u8; 32]>> {
    let mut seed = Zeroizing::new([0u8; 32]);
    OsRng
        .try_fill_bytes(&mut seed[..])
        .map_err(|_| KeyError::RandomSource)?;
    Ok(seed)
}

/// Copies `bytes` into a fixed-size array, reporting a length mismatch
/// against `algorithm` otherwise.
pub(crate) fn fixed_bytes<const N: usize>(
    algorithm: Algorithm,
    bytes: &[u8],
) -> KeyResult<[u8; N]> {
    bytes.try_into().map_err(|_| KeyError::LengthMismatch {
        algorithm: algorithm.name(),
        expected: N,
        actual: bytes.len(),
    })
}
