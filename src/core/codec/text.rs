//! Human-readable text format.
//!
//! Format: `{name}:{HEX(payload)}`, e.g. `ed25519:3B6A27BC...`. The empty
//! value is `empty:`. Intended for logs and command-line display; decoding
//! is supported and accepts hex digits of either case.

use zeroize::Zeroizing;

use crate::core::codec::{decode_named, name_of};
use crate::core::error::{KeyError, KeyResult};
use crate::core::header::{make_header, parse_header};
use crate::core::types::Variant;

/// Encodes `value` as `name:HEX`.
#[must_use]
pub fn encode<V: Variant>(value: &V) -> String {
    let mut out = make_header(name_of(value));
    out.push_str(&hex::encode_upper(&*value.payload()));
    out
}

/// Decodes a `name:HEX` string. Surrounding whitespace is ignored.
///
/// # Errors
///
/// - `KeyError::MalformedEncoding` if the separator is missing, the payload
///   is not valid hex, or it decodes to the wrong length
/// - `KeyError::UnknownAlgorithmName` if the name matches no registered
///   algorithm
/// - `KeyError::InvalidKeyMaterial` if the primitive rejects the payload
pub fn decode<V: Variant>(text: &str) -> KeyResult<V> {
    let (name, data) = parse_header(text.trim())?;
    let payload = hex::decode(data)
        .map(Zeroizing::new)
        .map_err(|err| KeyError::MalformedEncoding(format!("{name} payload: {err}")))?;
    decode_named(name, &payload)
}
