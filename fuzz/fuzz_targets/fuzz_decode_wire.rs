#![no_main]

use libfuzzer_sys::fuzz_target;
use polykey::{PrivKey, PubKey, Signature, Variant};

fuzz_target!(|data: &[u8]| {
    // Decoding should never panic; anything accepted must re-encode exactly
    if let Ok(key) = PrivKey::from_wire(data) {
        assert_eq!(key.to_wire(), data);
    }
    if let Ok(key) = PubKey::from_wire(data) {
        assert_eq!(key.to_wire(), data);
    }
    if let Ok(signature) = Signature::from_wire(data) {
        assert_eq!(signature.to_wire(), data);
    }
});
