//! Algorithm-agnostic envelopes for private keys, public keys and signatures.
//!
//! Each supported signature algorithm is registered once with a stable wire
//! tag and name. Keys and signatures of any registered algorithm are held in
//! closed enums ([`PrivKey`], [`PubKey`], [`Signature`]) that encode to three
//! interchangeable formats, and arbitrary bytes can be transported in
//! checksummed PEM-style armor.
//!
//! # Quick Start
//!
//! ```rust
//! use polykey::{Algorithm, PrivKey, PubKey, Signature, Variant};
//!
//! # fn main() -> Result<(), polykey::KeyError> {
//! let priv_key = PrivKey::generate(Algorithm::Ed25519)?;
//! let pub_key = priv_key.pub_key();
//! let signature = priv_key.sign(b"hello");
//! assert!(pub_key.verify(b"hello", &signature));
//!
//! // Binary wire format: tag byte then payload
//! let wire = signature.to_wire();
//! assert_eq!(wire[0], Algorithm::Ed25519.tag());
//! assert_eq!(Signature::from_wire(&wire)?, signature);
//!
//! // Structured text and human-readable text
//! assert!(pub_key.to_json().starts_with(r#"{"ed25519":"#));
//! let parsed: PubKey = pub_key.to_string().parse()?;
//! assert_eq!(parsed, pub_key);
//! # Ok(())
//! # }
//! ```
//!
//! # Formats
//!
//! | Format | Shape | Example |
//! |--------|-------|---------|
//! | Binary wire | `[tag][payload]` | `01 3b6a27bc...` |
//! | Structured text | `{"<name>":"<base64>"}` | `{"ed25519":"O2onvM62..."}` |
//! | Human-readable | `<name>:<HEX>` | `ed25519:3B6A27BC...` |
//!
//! The empty value of every wrapper encodes as tag `0x00`, `{"empty":""}`
//! and `empty:`.
//!
//! # Algorithms
//!
//! | Algorithm | Tag | Private key | Public key | Signature |
//! |-----------|-----|-------------|------------|-----------|
//! | `ed25519` | `0x01` | 64 bytes (seed and public key) | 32 bytes | 64 bytes |
//! | `secp256k1` | `0x02` | 32 bytes | 33 bytes (compressed) | DER, up to 72 bytes |
//!
//! # Armor
//!
//! ```rust
//! use polykey::{decode_armor, encode_armor, ArmorHeaders};
//!
//! # fn main() -> Result<(), polykey::KeyError> {
//! let text = encode_armor("MINT TEST", &ArmorHeaders::new(), b"love")?;
//! let armor = decode_armor(&text)?;
//! assert_eq!(armor.block_type, "MINT TEST");
//! assert_eq!(armor.data, b"love");
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! ```toml
//! [dependencies]
//! polykey = "0.1"  # ed25519 and secp256k1 (default)
//! polykey = { version = "0.1", default-features = false, features = ["ed25519"] }
//! polykey = { version = "0.1", features = ["prelude"] }  # builders and re-exports
//! ```
//!
//! # Security
//!
//! - Private key material is zeroized on drop
//! - Debug output redacts private keys
//! - Constant-time comparison for private keys
//! - Malformed signatures verify as `false` instead of panicking
//! - No unsafe code
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`prelude`] - Ergonomic imports (requires `prelude` feature)

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use core::algorithm::{Algorithm, AlgorithmDescriptor, REGISTRY};
pub use core::armor::{decode_armor, encode_armor, Armor, ArmorHeaders};
pub use core::error::{KeyError, KeyResult};
pub use core::operations::address::Address;
pub use core::scheme::SignatureScheme;
pub use core::types::{PrivKey, PubKey, Signature, Variant};

#[cfg(feature = "ed25519")]
pub use core::scheme::Ed25519;
#[cfg(feature = "secp256k1")]
pub use core::scheme::Secp256k1;
