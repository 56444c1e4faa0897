//! Public-key address computation.
//!
//! An address is a 20-byte identifier derived from a public key. The hash
//! input depends on the algorithm:
//!
//! - Ed25519: RIPEMD-160 over the binary wire encoding (`0x01 || key`)
//! - secp256k1: RIPEMD-160(SHA-256(compressed SEC1 key))

use ripemd::{Digest, Ripemd160};

/// Address output size (20 bytes = 160 bits).
pub const ADDRESS_SIZE: usize = 20;

/// A 20-byte public-key address.
pub type Address = [u8; ADDRESS_SIZE];

/// Computes the address of an Ed25519 public key from its wire encoding.
#[must_use]
pub fn ed25519_address(wire_bytes: &[u8]) -> Address {
    ripemd160(wire_bytes)
}

/// Computes the address of a compressed secp256k1 public key.
#[must_use]
#[cfg(feature = "secp256k1")]
pub fn secp256k1_address(compressed: &[u8; 33]) -> Address {
    let digest = sha2::Sha256::digest(compressed);
    ripemd160(&digest)
}

fn ripemd160(data: &[u8]) -> Address {
    let digest = Ripemd160::digest(data);
    let mut output = [0u8; ADDRESS_SIZE];
    output.copy_from_slice(&digest);
    output
}
