//! Structured-text (JSON) format.
//!
//! Format: a single-entry object keyed by the algorithm name whose value is
//! the standard, padded base64 encoding of the payload:
//!
//! ```text
//! {"ed25519":"q83vASNFZ4mrze8BI0VniavN7wEjRWeJq83vASNFZ4k="}
//! ```
//!
//! The empty value is `{"empty":""}`.
//!
//! The wrappers implement `serde` traits in this shape, so they can be
//! embedded in larger documents.

use core::fmt;

use base64::prelude::*;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserializer, Serializer};
use zeroize::Zeroizing;

use crate::core::codec::{decode_named, name_of};
use crate::core::error::{KeyError, KeyResult};
use crate::core::types::Variant;

/// Encodes `value` as a JSON object string.
#[must_use]
pub fn encode<V: Variant>(value: &V) -> String {
    let mut object = serde_json::Map::with_capacity(1);
    object.insert(
        name_of(value).to_string(),
        serde_json::Value::String(BASE64_STANDARD.encode(&*value.payload())),
    );
    serde_json::Value::Object(object).to_string()
}

/// Decodes a JSON object string.
///
/// # Errors
///
/// - `KeyError::MalformedEncoding` if the input is not a single-entry
///   object of strings, the value is not valid base64, or it decodes to
///   the wrong length
/// - `KeyError::UnknownAlgorithmName` if the key names no registered
///   algorithm
/// - `KeyError::InvalidKeyMaterial` if the primitive rejects the payload
pub fn decode<V: Variant>(json: &str) -> KeyResult<V> {
    let malformed = |err: serde_json::Error| KeyError::MalformedEncoding(err.to_string());

    let mut deserializer = serde_json::Deserializer::from_str(json);
    let entries = (&mut deserializer)
        .deserialize_map(EntriesVisitor)
        .map_err(malformed)?;
    deserializer.end().map_err(malformed)?;

    decode_entries(entries)
}

/// `serde` serialization in the structured-text shape.
pub(crate) fn serialize<V: Variant, S: Serializer>(
    value: &V,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry(name_of(value), &BASE64_STANDARD.encode(&*value.payload()))?;
    map.end()
}

/// `serde` deserialization from the structured-text shape.
pub(crate) fn deserialize<'de, V: Variant, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<V, D::Error> {
    let entries = deserializer.deserialize_map(EntriesVisitor)?;
    decode_entries(entries).map_err(de::Error::custom)
}

fn decode_entries<V: Variant>(entries: Vec<(String, String)>) -> KeyResult<V> {
    let [(name, encoded)] = <[(String, String); 1]>::try_from(entries).map_err(|entries| {
        KeyError::MalformedEncoding(format!(
            "expected exactly one algorithm entry, found {}",
            entries.len()
        ))
    })?;

    let payload = BASE64_STANDARD
        .decode(encoded)
        .map(Zeroizing::new)
        .map_err(|err| KeyError::MalformedEncoding(format!("{name} payload: {err}")))?;

    decode_named(&name, &payload)
}

/// Collects every entry of a map, keeping duplicates so they can be
/// rejected.
struct EntriesVisitor;

impl<'de> Visitor<'de> for EntriesVisitor {
    type Value = Vec<(String, String)>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping an algorithm name to an encoded payload")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(1).min(4));
        while let Some(entry) = access.next_entry::<String, String>()? {
            entries.push(entry);
        }
        Ok(entries)
    }
}
