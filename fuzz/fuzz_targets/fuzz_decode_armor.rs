#![no_main]

use libfuzzer_sys::fuzz_target;
use polykey::{decode_armor, encode_armor};

fuzz_target!(|data: &str| {
    // Anything accepted must survive a re-encode
    if let Ok(armor) = decode_armor(data) {
        let text = encode_armor(&armor.block_type, &armor.headers, &armor.data);
        if let Ok(text) = text {
            assert_eq!(decode_armor(&text).ok(), Some(armor));
        }
    }
});
