//! Builder patterns for armor encoding.
//!
//! # Example
//!
//! ```rust
//! use polykey::prelude::*;
//!
//! # fn main() -> Result<(), KeyError> {
//! let text = ArmorBuilder::new("MINT TEST")
//!     .header("Comment", "test vector")
//!     .encode(b"love")?;
//!
//! let armor = decode_armor(&text)?;
//! assert_eq!(armor.headers.get("Comment"), Some("test vector"));
//! assert_eq!(armor.data, b"love");
//! # Ok(())
//! # }
//! ```

use crate::core::armor::{encode_armor, ArmorHeaders};
use crate::core::error::KeyResult;
use crate::core::types::Variant;

/// Builder for armor blocks.
///
/// Collects a block type and ordered headers, then armors data. The
/// reserved `Checksum` header is added at encode time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArmorBuilder {
    block_type: String,
    headers: ArmorHeaders,
}

impl ArmorBuilder {
    /// Creates a builder for blocks labelled `block_type`.
    #[must_use]
    pub fn new(block_type: impl Into<String>) -> Self {
        Self {
            block_type: block_type.into(),
            headers: ArmorHeaders::new(),
        }
    }

    /// Adds a header. A repeated key replaces the earlier value.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key, value);
        self
    }

    /// Returns the configured block type.
    #[must_use]
    pub fn get_block_type(&self) -> &str {
        &self.block_type
    }

    /// Returns the configured headers.
    #[must_use]
    pub const fn get_headers(&self) -> &ArmorHeaders {
        &self.headers
    }

    /// Armors `data`.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::MalformedArmor` if the block type or a header is
    /// not representable (see [`encode_armor`]).
    pub fn encode(&self, data: &[u8]) -> KeyResult<String> {
        encode_armor(&self.block_type, &self.headers, data)
    }

    /// Armors the binary wire encoding of a key or signature.
    ///
    /// # Errors
    ///
    /// Same as [`ArmorBuilder::encode`].
    pub fn encode_wire<V: Variant>(&self, value: &V) -> KeyResult<String> {
        self.encode(&value.to_wire())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::armor::decode_armor;
    use crate::core::error::KeyError;
    use crate::core::types::PubKey;

    #[test]
    fn test_armor_builder_headers() {
        let builder = ArmorBuilder::new("KEY")
            .header("Version", "1")
            .header("Comment", "a")
            .header("Version", "2");

        assert_eq!(builder.get_block_type(), "KEY");
        let pairs: Vec<_> = builder.get_headers().iter().collect();
        assert_eq!(pairs, vec![("Version", "2"), ("Comment", "a")]);
    }

    #[test]
    fn test_armor_builder_round_trip() -> KeyResult<()> {
        let text = ArmorBuilder::new("MINT TEST")
            .header("Comment", "hello")
            .encode(b"love")?;

        let armor = decode_armor(&text)?;
        assert_eq!(armor.block_type, "MINT TEST");
        assert_eq!(armor.headers.get("Comment"), Some("hello"));
        assert_eq!(armor.data, b"love");
        Ok(())
    }

    #[test]
    fn test_armor_builder_wire() -> KeyResult<()> {
        let text = ArmorBuilder::new("PUBLIC KEY").encode_wire(&PubKey::Empty)?;
        let armor = decode_armor(&text)?;
        assert_eq!(PubKey::from_wire(&armor.data)?, PubKey::Empty);
        Ok(())
    }

    #[test]
    fn test_armor_builder_rejects_checksum_header() {
        let result = ArmorBuilder::new("KEY")
            .header("Checksum", "00000000")
            .encode(b"x");
        assert!(matches!(result, Err(KeyError::MalformedArmor(_))));
    }
}
