//! Binary wire format.
//!
//! Format: one tag byte from the registry followed by the raw payload.
//! The empty value is the single byte `0x00`.

use crate::core::algorithm::{descriptor_for_tag, EMPTY_TAG};
use crate::core::codec::{check_length, tag_of};
use crate::core::error::{KeyError, KeyResult};
use crate::core::types::Variant;

/// Encodes `value` as `tag || payload`.
#[must_use]
pub fn encode<V: Variant>(value: &V) -> Vec<u8> {
    let payload = value.payload();
    let mut out = Vec::with_capacity(1 + payload.len());
    out.push(tag_of(value));
    out.extend_from_slice(&payload);
    out
}

/// Decodes a `tag || payload` byte string.
///
/// # Errors
///
/// - `KeyError::MalformedEncoding` if `bytes` is empty
/// - `KeyError::UnknownTag` if the tag byte matches no registered algorithm
/// - `KeyError::LengthMismatch` if a fixed-length algorithm (or the empty
///   value) receives the wrong number of payload bytes
/// - `KeyError::InvalidKeyMaterial` if the primitive rejects the payload
pub fn decode<V: Variant>(bytes: &[u8]) -> KeyResult<V> {
    let Some((&tag, payload)) = bytes.split_first() else {
        return Err(KeyError::MalformedEncoding(format!(
            "empty input, expected a {} tag byte",
            V::KIND
        )));
    };

    if tag == EMPTY_TAG {
        return V::from_payload(None, payload);
    }

    let descriptor = descriptor_for_tag(tag).inspect_err(|_| {
        tracing::debug!(kind = V::KIND, tag, "unknown algorithm tag");
    })?;
    check_length::<V>(descriptor, payload.len())?;
    V::from_payload(Some(descriptor.algorithm), payload)
}
