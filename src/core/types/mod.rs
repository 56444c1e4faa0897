//! Algorithm-agnostic key and signature types.
//!
//! This module provides the three variant wrappers:
//!
//! - [`PrivKey`] - a private key of any registered algorithm
//! - [`PubKey`] - a public key of any registered algorithm
//! - [`Signature`] - a signature of any registered algorithm
//!
//! Each is a closed enum with one arm per algorithm plus an `Empty` arm.
//! Because the arms hold concrete values only, a wrapper can never contain
//! another wrapper: wrapping an existing wrapper (directly, through
//! `Option`, or through `Box`, at any depth) yields the innermost value
//! wrapped exactly once.
//!
//! The [`Variant`] trait gives all three a uniform byte view, which is what
//! the codecs in [`crate::core::codec`] operate on.

mod priv_key;
mod pub_key;
mod signature;

pub use priv_key::PrivKey;
pub use pub_key::PubKey;
pub use signature::Signature;

use zeroize::Zeroizing;

use crate::core::algorithm::{Algorithm, AlgorithmDescriptor, EMPTY_NAME};
use crate::core::codec::{json, text, wire};
use crate::core::error::{KeyError, KeyResult};

mod private {
    pub trait Sealed {}
}

/// Uniform view over [`PrivKey`], [`PubKey`] and [`Signature`].
///
/// This trait is sealed and cannot be implemented outside of this crate.
pub trait Variant: private::Sealed + Sized + Clone + PartialEq {
    /// Human-readable kind, used in diagnostics.
    const KIND: &'static str;

    /// The algorithm of the held value, or `None` for the empty value.
    fn algorithm(&self) -> Option<Algorithm>;

    /// The raw payload bytes (empty for the empty value).
    fn payload(&self) -> Zeroizing<Vec<u8>>;

    /// Expected payload length for `descriptor`, or `None` if it varies.
    fn payload_length(descriptor: &AlgorithmDescriptor) -> Option<usize>;

    /// Rebuilds a value from its algorithm and raw payload.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::LengthMismatch` if the payload has the wrong size
    /// and `KeyError::InvalidKeyMaterial` if the primitive rejects it.
    fn from_payload(algorithm: Option<Algorithm>, payload: &[u8]) -> KeyResult<Self>;

    /// Returns `true` for the empty value.
    fn is_empty(&self) -> bool {
        self.algorithm().is_none()
    }

    /// Encodes to the binary wire format (`tag || payload`).
    fn to_wire(&self) -> Vec<u8> {
        wire::encode(self)
    }

    /// Decodes from the binary wire format.
    ///
    /// # Errors
    ///
    /// See [`wire::decode`].
    fn from_wire(bytes: &[u8]) -> KeyResult<Self> {
        wire::decode(bytes)
    }

    /// Encodes to the structured-text format (`{"<name>":"<base64>"}`).
    fn to_json(&self) -> String {
        json::encode(self)
    }

    /// Decodes from the structured-text format.
    ///
    /// # Errors
    ///
    /// See [`json::decode`].
    fn from_json(json: &str) -> KeyResult<Self> {
        json::decode(json)
    }

    /// Encodes to the human-readable text format (`<name>:<HEX>`).
    fn to_text(&self) -> String {
        text::encode(self)
    }

    /// Decodes from the human-readable text format.
    ///
    /// # Errors
    ///
    /// See [`text::decode`].
    fn from_text(text: &str) -> KeyResult<Self> {
        text::decode(text)
    }
}

/// Rejects a non-empty payload for the empty value.
fn empty_payload(payload: &[u8]) -> KeyResult<()> {
    if payload.is_empty() {
        Ok(())
    } else {
        Err(KeyError::LengthMismatch {
            algorithm: EMPTY_NAME,
            expected: 0,
            actual: payload.len(),
        })
    }
}
