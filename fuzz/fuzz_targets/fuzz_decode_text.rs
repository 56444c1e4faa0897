#![no_main]

use libfuzzer_sys::fuzz_target;
use polykey::{PrivKey, PubKey, Signature};

fuzz_target!(|data: &str| {
    // Should never panic
    let _ = data.parse::<PrivKey>();
    let _ = data.parse::<PubKey>();
    let _ = data.parse::<Signature>();
});
