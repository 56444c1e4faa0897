#![no_main]

use libfuzzer_sys::fuzz_target;
use polykey::{PrivKey, PubKey, Signature, Variant};

fuzz_target!(|data: &str| {
    // Should never panic
    let _ = PrivKey::from_json(data);
    let _ = PubKey::from_json(data);
    let _ = Signature::from_json(data);
    let _ = serde_json::from_str::<PubKey>(data);
});
