//! PEM-style ASCII armor for arbitrary binary data.
//!
//! # Format
//!
//! ```text
//! -----BEGIN MINT TEST-----
//! Comment: optional caller headers, order preserved
//! Checksum: 5782501D
//!
//! bG92ZQ==
//! -----END MINT TEST-----
//! ```
//!
//! The body is standard padded base64 wrapped at 64 columns. `Checksum` is
//! a reserved header holding the CRC-32 of the raw data as eight uppercase
//! hex digits. It is always emitted after the caller's headers and is
//! stripped from the headers returned by [`decode_armor`].
//!
//! Armor does not interpret its data. Wire-encoded keys and signatures are
//! the usual payload, but any blob works.

use base64::prelude::*;

use crate::core::error::{KeyError, KeyResult};

/// Opening marker prefix.
pub const BEGIN_PREFIX: &str = "-----BEGIN ";

/// Closing marker prefix.
pub const END_PREFIX: &str = "-----END ";

/// Suffix shared by both markers.
pub const MARKER_SUFFIX: &str = "-----";

/// Reserved header carrying the data checksum.
pub const CHECKSUM_HEADER: &str = "Checksum";

/// Column width of the base64 body.
pub const LINE_WIDTH: usize = 64;

// =============================================================================
// Headers
// =============================================================================

/// Ordered armor headers.
///
/// Keys are unique. Inserting an existing key replaces its value in place,
/// so the original position is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArmorHeaders(Vec<(String, String)>);

impl ArmorHeaders {
    /// Creates an empty header list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Inserts a header, returning the previous value if the key was present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        if let Some((_, existing)) = self.0.iter_mut().find(|(k, _)| *k == key) {
            return Some(core::mem::replace(existing, value));
        }
        self.0.push((key, value));
        None
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.0.iter().position(|(k, _)| k == key)?;
        Some(self.0.remove(index).1)
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of headers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no headers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ArmorHeaders {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (key, value) in iter {
            headers.insert(key, value);
        }
        headers
    }
}

impl IntoIterator for ArmorHeaders {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// =============================================================================
// Armor
// =============================================================================

/// A decoded armor block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Armor {
    /// Label from the BEGIN/END markers.
    pub block_type: String,
    /// Caller headers, without the reserved checksum.
    pub headers: ArmorHeaders,
    /// Raw data carried in the body.
    pub data: Vec<u8>,
}

impl Armor {
    /// Encodes this block as armored text.
    ///
    /// # Errors
    ///
    /// See [`encode_armor`].
    pub fn encode(&self) -> KeyResult<String> {
        encode_armor(&self.block_type, &self.headers, &self.data)
    }
}

impl TryFrom<&str> for Armor {
    type Error = KeyError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        decode_armor(text)
    }
}

/// Encodes `data` as an armor block labelled `block_type`.
///
/// # Errors
///
/// Returns `KeyError::MalformedArmor` if the block type contains a line
/// break, if a header key is empty or contains `:` or whitespace, if a
/// header value contains a line break or has surrounding whitespace, or if
/// the caller supplies the reserved `Checksum` header.
pub fn encode_armor(block_type: &str, headers: &ArmorHeaders, data: &[u8]) -> KeyResult<String> {
    if block_type.contains(['\r', '\n']) {
        return Err(KeyError::MalformedArmor(
            "block type must be a single line".to_string(),
        ));
    }
    for (key, value) in headers.iter() {
        validate_header(key, value)?;
    }

    let body = BASE64_STANDARD.encode(data);
    let mut out = String::with_capacity(body.len() + body.len() / LINE_WIDTH + 128);

    push_line(&mut out, &[BEGIN_PREFIX, block_type, MARKER_SUFFIX]);
    for (key, value) in headers.iter() {
        push_line(&mut out, &[key, ": ", value]);
    }
    let checksum = format!("{:08X}", crc32fast::hash(data));
    push_line(&mut out, &[CHECKSUM_HEADER, ": ", checksum.as_str()]);
    out.push('\n');

    // base64 output is ASCII, so byte chunks are valid UTF-8
    for chunk in body.as_bytes().chunks(LINE_WIDTH) {
        out.push_str(&String::from_utf8_lossy(chunk));
        out.push('\n');
    }
    push_line(&mut out, &[END_PREFIX, block_type, MARKER_SUFFIX]);

    tracing::trace!(
        block_type,
        data_len = data.len(),
        armor_len = out.len(),
        "encoded armor"
    );
    Ok(out)
}

/// Decodes an armor block.
///
/// Surrounding whitespace and CRLF line endings are accepted.
///
/// # Errors
///
/// - `KeyError::MalformedArmor` if a marker is missing or the markers
///   disagree, a header line is not `key: value`, a header repeats, the
///   blank line before the body is missing, or the checksum header is
///   missing or not eight hex digits
/// - `KeyError::Base64Decode` if the body is not valid base64
/// - `KeyError::ChecksumMismatch` if the data does not hash to the
///   embedded checksum
pub fn decode_armor(text: &str) -> KeyResult<Armor> {
    let mut lines = text.trim().lines().map(str::trim_end);

    let begin = lines.next().unwrap_or_default();
    let block_type = begin
        .strip_prefix(BEGIN_PREFIX)
        .and_then(|rest| rest.strip_suffix(MARKER_SUFFIX))
        .ok_or_else(|| KeyError::MalformedArmor(format!("expected BEGIN marker, found {begin:?}")))?;

    let mut headers = ArmorHeaders::new();
    loop {
        let line = lines.next().ok_or_else(|| {
            KeyError::MalformedArmor("missing blank line before body".to_string())
        })?;
        if line.is_empty() {
            break;
        }
        let (key, value) = parse_header_line(line)?;
        if headers.insert(key, value).is_some() {
            return Err(KeyError::MalformedArmor(format!(
                "duplicate header {key:?}"
            )));
        }
    }

    let mut body = String::new();
    let mut end = None;
    for line in lines.by_ref() {
        if line.starts_with(END_PREFIX) {
            end = Some(line);
            break;
        }
        body.push_str(line.trim_start());
    }

    let end_type = end
        .and_then(|line| line.strip_prefix(END_PREFIX))
        .and_then(|rest| rest.strip_suffix(MARKER_SUFFIX))
        .ok_or_else(|| KeyError::MalformedArmor("missing END marker".to_string()))?;
    if end_type != block_type {
        return Err(KeyError::MalformedArmor(format!(
            "END marker {end_type:?} does not match BEGIN marker {block_type:?}"
        )));
    }
    if lines.next().is_some() {
        return Err(KeyError::MalformedArmor(
            "unexpected content after END marker".to_string(),
        ));
    }

    let expected = headers
        .remove(CHECKSUM_HEADER)
        .ok_or_else(|| KeyError::MalformedArmor("missing checksum header".to_string()))
        .and_then(|value| parse_checksum(&value))?;

    let data = BASE64_STANDARD.decode(body.as_bytes())?;
    let actual = crc32fast::hash(&data);
    if actual != expected {
        tracing::debug!(
            block_type,
            expected,
            actual,
            "armor checksum mismatch"
        );
        return Err(KeyError::ChecksumMismatch { expected, actual });
    }

    tracing::trace!(block_type, data_len = data.len(), "decoded armor");
    Ok(Armor {
        block_type: block_type.to_string(),
        headers,
        data,
    })
}

fn push_line(out: &mut String, parts: &[&str]) {
    for part in parts {
        out.push_str(part);
    }
    out.push('\n');
}

fn validate_header(key: &str, value: &str) -> KeyResult<()> {
    if key == CHECKSUM_HEADER {
        return Err(KeyError::MalformedArmor(format!(
            "{CHECKSUM_HEADER} is a reserved header"
        )));
    }
    if key.is_empty() || key.contains(|c: char| c == ':' || c.is_whitespace()) {
        return Err(KeyError::MalformedArmor(format!(
            "invalid header key {key:?}"
        )));
    }
    if value.contains(['\r', '\n']) || value.trim() != value {
        return Err(KeyError::MalformedArmor(format!(
            "invalid value for header {key:?}"
        )));
    }
    Ok(())
}

fn parse_header_line(line: &str) -> KeyResult<(&str, &str)> {
    let (key, value) = line
        .split_once(':')
        .ok_or_else(|| KeyError::MalformedArmor(format!("malformed header line {line:?}")))?;
    if key.is_empty() || key.contains(char::is_whitespace) {
        return Err(KeyError::MalformedArmor(format!(
            "invalid header key {key:?}"
        )));
    }
    Ok((key, value.trim()))
}

fn parse_checksum(value: &str) -> KeyResult<u32> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(KeyError::MalformedArmor(format!(
            "checksum must be 8 hex digits, found {value:?}"
        )));
    }
    u32::from_str_radix(value, 16)
        .map_err(|err| KeyError::MalformedArmor(format!("invalid checksum: {err}")))
}
