//! Property-based tests for signing, wrapping and the codecs.

// Test code legitimately uses panic patterns for test failure reporting
#![allow(clippy::expect_used, clippy::panic, clippy::unwrap_used)]

use polykey::{
    decode_armor, encode_armor, Algorithm, ArmorHeaders, KeyError, PrivKey, PubKey, Signature,
    Variant,
};
use proptest::prelude::*;

fn algorithms() -> Vec<Algorithm> {
    Algorithm::all().collect()
}

/// Checks all three codecs round-trip `value`.
fn assert_codecs_round_trip<V: Variant + std::fmt::Debug>(value: &V) {
    assert_eq!(&V::from_wire(&value.to_wire()).unwrap(), value);
    assert_eq!(&V::from_json(&value.to_json()).unwrap(), value);
    assert_eq!(&V::from_text(&value.to_text()).unwrap(), value);
}

// ============================================================================
// Signing
// ============================================================================

/// For any message, a signature made with a private key verifies against
/// the derived public key.
#[test]
#[cfg(any(feature = "ed25519", feature = "secp256k1"))]
fn property_sign_verify() {
    proptest!(ProptestConfig::with_cases(64), |(
        algorithm in prop::sample::select(algorithms()),
        message in prop::collection::vec(any::<u8>(), 0..512),
    )| {
        let priv_key = PrivKey::generate(algorithm).unwrap();
        let signature = priv_key.sign(&message);
        prop_assert!(priv_key.pub_key().verify(&message, &signature));
    });
}

/// Flipping any single bit of a valid signature makes verification fail.
#[test]
#[cfg(any(feature = "ed25519", feature = "secp256k1"))]
fn property_single_bit_tamper() {
    proptest!(ProptestConfig::with_cases(64), |(
        algorithm in prop::sample::select(algorithms()),
        message in prop::collection::vec(any::<u8>(), 1..256),
        byte in any::<prop::sample::Index>(),
        bit in 0..8u8,
    )| {
        let priv_key = PrivKey::generate(algorithm).unwrap();
        let pub_key = priv_key.pub_key();
        let signature = priv_key.sign(&message);

        let mut wire = signature.to_wire();
        let index = 1 + byte.index(wire.len() - 1);
        wire[index] ^= 1 << bit;
        let tampered = Signature::from_wire(&wire).unwrap();

        prop_assert!(!pub_key.verify(&message, &tampered));
    });
}

// ============================================================================
// Wrapping and codecs
// ============================================================================

/// Wrapping any depth collapses to the depth-one wrap.
#[test]
#[cfg(any(feature = "ed25519", feature = "secp256k1"))]
fn property_wrap_idempotent() {
    proptest!(ProptestConfig::with_cases(32), |(
        algorithm in prop::option::of(prop::sample::select(algorithms())),
        depth in 0..6usize,
    )| {
        let base = match algorithm {
            Some(algorithm) => PubKey::wrap(PrivKey::generate(algorithm).unwrap().pub_key()),
            None => PubKey::wrap(None::<PubKey>),
        };

        let mut wrapped = base.clone();
        for _ in 0..depth {
            wrapped = PubKey::wrap(Box::new(Some(wrapped)));
        }
        prop_assert_eq!(&wrapped, &base);
        prop_assert_eq!(PubKey::wrap(PubKey::wrap(wrapped.clone())), wrapped);
    });
}

/// Every wrapper decodes back from all three encodings.
#[test]
#[cfg(any(feature = "ed25519", feature = "secp256k1"))]
fn property_codec_round_trip() {
    proptest!(ProptestConfig::with_cases(32), |(
        algorithm in prop::sample::select(algorithms()),
        message in prop::collection::vec(any::<u8>(), 0..64),
    )| {
        let priv_key = PrivKey::generate(algorithm).unwrap();
        let pub_key = priv_key.pub_key();
        let signature = priv_key.sign(&message);

        assert_codecs_round_trip(&priv_key);
        assert_codecs_round_trip(&pub_key);
        assert_codecs_round_trip(&signature);

        let wire = signature.to_wire();
        prop_assert_eq!(wire[0], algorithm.tag());
        if let Some(size) = algorithm.descriptor().signature_length {
            prop_assert_eq!(wire.len(), size + 1);
        }
        prop_assert!(signature.to_json().contains(algorithm.name()));
        prop_assert!(signature.to_text().starts_with(algorithm.name()));
    });
}

#[test]
fn test_empty_codec_round_trip() {
    assert_codecs_round_trip(&PrivKey::Empty);
    assert_codecs_round_trip(&PubKey::Empty);
    assert_codecs_round_trip(&Signature::Empty);
}

/// Decoders never panic on arbitrary bytes.
#[test]
fn property_wire_decode_total() {
    proptest!(|(bytes in prop::collection::vec(any::<u8>(), 0..128))| {
        let _ = PrivKey::from_wire(&bytes);
        let _ = PubKey::from_wire(&bytes);
        let _ = Signature::from_wire(&bytes);
    });
}

// ============================================================================
// Armor
// ============================================================================

fn header_strategy() -> impl Strategy<Value = ArmorHeaders> {
    prop::collection::vec(("[a-z][a-z0-9-]{0,15}", "[!-~]{0,40}"), 0..5)
        .prop_map(|pairs| pairs.into_iter().collect())
}

/// Armor round-trips block type, headers and data.
#[test]
fn property_armor_round_trip() {
    proptest!(|(
        block_type in "[A-Z][A-Z0-9 ]{0,30}",
        headers in header_strategy(),
        data in prop::collection::vec(any::<u8>(), 0..512),
    )| {
        let armored = encode_armor(&block_type, &headers, &data).unwrap();
        let armor = decode_armor(&armored).unwrap();
        prop_assert_eq!(armor.block_type, block_type);
        prop_assert_eq!(armor.headers, headers);
        prop_assert_eq!(armor.data, data);
    });
}

/// Replacing one character of the body with another base64 character is
/// reported as a checksum mismatch.
#[test]
fn property_armor_corruption() {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    proptest!(|(
        data in prop::collection::vec(any::<u8>(), 4..256),
        position in 0..4usize,
        shift in 1..64usize,
    )| {
        let armored = encode_armor("BLOB", &ArmorHeaders::new(), &data).unwrap();

        // the first base64 quantum is never the padded final one here
        let index = armored.find("\n\n").unwrap() + 2 + position;
        let mut bytes = armored.into_bytes();
        let current = ALPHABET.iter().position(|&c| c == bytes[index]).unwrap();
        bytes[index] = ALPHABET[(current + shift) % ALPHABET.len()];
        let corrupted = String::from_utf8(bytes).unwrap();

        let result = decode_armor(&corrupted);
        prop_assert!(
            matches!(result, Err(KeyError::ChecksumMismatch { .. })),
            "expected checksum mismatch, got {:?}",
            result
        );
    });
}
