//! Header parsing and generation for the human-readable text format.
//!
//! Text-encoded values follow the format `{name}:{data}` where `name` is an
//! algorithm name from the registry (or the reserved empty name) and `data`
//! is the hex-encoded payload.

use crate::core::error::KeyError;

/// Separator between the algorithm name and the payload.
pub const SEPARATOR: char = ':';

/// Splits a text-encoded value into its algorithm name and payload.
///
/// The payload may be empty (the empty value encodes as `empty:`), but the
/// name may not.
///
/// # Errors
///
/// Returns `KeyError::MalformedEncoding` if the separator is missing or the
/// name is empty.
pub fn parse_header(text: &str) -> Result<(&str, &str), KeyError> {
    let Some((name, data)) = text.split_once(SEPARATOR) else {
        return Err(KeyError::MalformedEncoding(format!(
            "missing '{SEPARATOR}' between algorithm name and payload"
        )));
    };

    if name.is_empty() {
        return Err(KeyError::MalformedEncoding(
            "empty algorithm name".to_string(),
        ));
    }

    Ok((name, data))
}

/// Constructs a text header (e.g., `ed25519:`).
#[must_use]
pub fn make_header(name: &str) -> String {
    format!("{name}{SEPARATOR}")
}
