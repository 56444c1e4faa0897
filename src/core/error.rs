//! Error types for key, signature and armor codecs.
//!
//! Every decode path reports what it was looking at (the offending tag,
//! name or length) so callers can diagnose bad input. A failed signature
//! verification is not an error: `verify` returns `false`.

use thiserror::Error;

/// Errors that can occur when encoding or decoding keys, signatures and
/// armored blocks.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KeyError {
    /// The binary tag byte does not belong to any registered algorithm.
    #[error("unknown algorithm tag: 0x{tag:02x}")]
    UnknownTag {
        /// The tag byte that was read.
        tag: u8,
    },

    /// The algorithm name does not belong to any registered algorithm.
    #[error("unknown algorithm name: {0:?}")]
    UnknownAlgorithmName(String),

    /// A fixed-length algorithm received the wrong number of payload bytes.
    #[error("length mismatch for {algorithm}: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Name of the algorithm whose payload was being decoded.
        algorithm: &'static str,
        /// Expected payload length in bytes.
        expected: usize,
        /// Actual payload length in bytes.
        actual: usize,
    },

    /// The input does not have the shape the codec expects.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),

    /// Correctly sized bytes that the underlying primitive rejects.
    #[error("invalid key material for {algorithm}")]
    InvalidKeyMaterial {
        /// Name of the algorithm that rejected the bytes.
        algorithm: &'static str,
    },

    /// The armored block is structurally invalid.
    #[error("malformed armor: {0}")]
    MalformedArmor(String),

    /// The armored data does not match its embedded checksum.
    #[error("armor checksum mismatch: header says {expected:08X}, data hashes to {actual:08X}")]
    ChecksumMismatch {
        /// Checksum carried in the armor header.
        expected: u32,
        /// Checksum recomputed over the decoded data.
        actual: u32,
    },

    /// The operating system random source failed.
    #[error("random source unavailable")]
    RandomSource,

    /// Base64 decoding error.
    #[error("base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// Hex decoding error.
    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),
}

/// Result type alias for key operations.
pub type KeyResult<T> = Result<T, KeyError>;
