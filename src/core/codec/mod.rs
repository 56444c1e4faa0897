//! Encodings for the variant wrappers.
//!
//! Three independent formats share one rule: the payload is prefixed by the
//! algorithm's registry identity.
//!
//! | Format | Shape | Module |
//! |--------|-------|--------|
//! | Binary wire | `[tag][payload]` | [`wire`] |
//! | Structured text | `{"<name>":"<base64(payload)>"}` | [`json`] |
//! | Human-readable text | `<name>:<HEX(payload)>` | [`text`] |
//!
//! The empty value encodes as tag `0x00` with no payload, and as the name
//! `empty` with an empty payload in the text formats.

pub mod json;
pub mod text;
pub mod wire;

use crate::core::algorithm::{
    descriptor_for_name, Algorithm, AlgorithmDescriptor, EMPTY_NAME, EMPTY_TAG,
};
use crate::core::error::{KeyError, KeyResult};
use crate::core::types::Variant;

/// Registry name of the held algorithm, or the reserved empty name.
pub(crate) fn name_of<V: Variant>(value: &V) -> &'static str {
    value.algorithm().map_or(EMPTY_NAME, Algorithm::name)
}

/// Wire tag of the held algorithm, or the reserved empty tag.
pub(crate) fn tag_of<V: Variant>(value: &V) -> u8 {
    value.algorithm().map_or(EMPTY_TAG, Algorithm::tag)
}

/// Checks a payload length against the registry for fixed-length material.
pub(crate) fn check_length<V: Variant>(
    descriptor: &AlgorithmDescriptor,
    actual: usize,
) -> KeyResult<()> {
    match V::payload_length(descriptor) {
        Some(expected) if expected != actual => {
            tracing::debug!(
                kind = V::KIND,
                algorithm = descriptor.name,
                expected,
                actual,
                "payload length mismatch"
            );
            Err(KeyError::LengthMismatch {
                algorithm: descriptor.name,
                expected,
                actual,
            })
        }
        _ => Ok(()),
    }
}

/// Rebuilds a value from a text-format name and its decoded payload.
///
/// Shared by the structured and human-readable text formats, which report
/// a wrongly sized payload as malformed rather than as a length mismatch.
pub(crate) fn decode_named<V: Variant>(name: &str, payload: &[u8]) -> KeyResult<V> {
    let algorithm = if name == EMPTY_NAME {
        None
    } else {
        let descriptor = descriptor_for_name(name).inspect_err(|_| {
            tracing::debug!(kind = V::KIND, name, "unknown algorithm name");
        })?;
        check_length::<V>(descriptor, payload.len()).map_err(into_malformed)?;
        Some(descriptor.algorithm)
    };

    V::from_payload(algorithm, payload).map_err(into_malformed)
}

/// Restates a length mismatch as a malformed text encoding.
fn into_malformed(err: KeyError) -> KeyError {
    match err {
        KeyError::LengthMismatch {
            algorithm,
            expected,
            actual,
        } => KeyError::MalformedEncoding(format!(
            "{algorithm} payload decodes to {actual} bytes, expected {expected}"
        )),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{PubKey, Signature};

    #[test]
    fn test_empty_identity() {
        assert_eq!(name_of(&PubKey::Empty), "empty");
        assert_eq!(tag_of(&Signature::Empty), 0x00);
    }

    #[test]
    fn test_decode_named_unknown() {
        let result = decode_named::<PubKey>("rsa", &[]);
        assert!(matches!(result, Err(KeyError::UnknownAlgorithmName(ref n)) if n == "rsa"));
    }

    #[test]
    fn test_decode_named_empty_with_payload() {
        let result = decode_named::<PubKey>("empty", &[0x00]);
        assert!(matches!(result, Err(KeyError::MalformedEncoding(_))));
    }

    #[test]
    #[cfg(feature = "ed25519")]
    fn test_decode_named_wrong_length_is_malformed() {
        let result = decode_named::<PubKey>("ed25519", &[0u8; 31]);
        assert!(matches!(result, Err(KeyError::MalformedEncoding(ref m)) if m.contains("31")));
    }

    #[test]
    #[cfg(feature = "secp256k1")]
    fn test_check_length_variable() -> KeyResult<()> {
        let descriptor = Algorithm::Secp256k1.descriptor();
        check_length::<Signature>(descriptor, 7)?;
        check_length::<Signature>(descriptor, 72)?;
        assert!(check_length::<PubKey>(descriptor, 32).is_err());
        Ok(())
    }
}
