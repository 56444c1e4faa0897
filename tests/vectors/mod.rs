//! Test vector types for the key envelope tests.
//!
//! Ed25519 vectors include the RFC 8032 section 7.1 cases. secp256k1
//! vectors cover boundary scalars; signatures are checked by round trip
//! since ECDSA output depends on the nonce derivation.

// Some fields are required for deserialization but not read by every test
#![allow(dead_code)]

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

/// Test vector for one private key and what derives from it.
#[derive(Debug, Deserialize)]
pub struct KeyTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Hex-encoded private key payload
    #[serde(rename = "private-key")]
    pub private_key: String,
    /// Hex-encoded public key payload (null for fail tests)
    #[serde(rename = "public-key")]
    pub public_key: Option<String>,
    /// Hex-encoded message
    pub message: Option<String>,
    /// Hex-encoded expected signature, when the scheme is deterministic
    pub signature: Option<String>,
    /// Hex-encoded 20-byte address of the public key
    pub address: Option<String>,
    #[serde(rename = "public-encodings")]
    pub public_encodings: Option<Encodings>,
    #[serde(rename = "signature-encodings")]
    pub signature_encodings: Option<Encodings>,
}

/// Expected output of the three codecs for one value.
#[derive(Debug, Deserialize)]
pub struct Encodings {
    /// Hex-encoded binary wire form
    pub wire: String,
    pub json: String,
    pub text: String,
}

/// Loads a suite from `tests/vectors/{file}`.
pub fn load_suite(file: &str) -> TestVectorSuite<KeyTestVector> {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/vectors")
        .join(file);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&content).expect("failed to parse test vectors")
}
