//! Reader settings as they come out of a pipeline's configuration file.
//!
//! ```rust
//! # use colreader::{ReaderConfig, ByteOrder};
//! let cfg: ReaderConfig = serde_json::from_str(r#"{"byte_order": "big_endian"}"#).unwrap();
//! assert_eq!(cfg.byte_order, ByteOrder::BigEndian);
//! ```

use serde::{Deserialize, Serialize};
use crate::byte_order::ByteOrder;

/// How a [`crate::BufferBinaryReader`] interprets its buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// byte order for multi-byte scalars and length prefixes
    pub byte_order: ByteOrder,
}

impl ReaderConfig {
    /// config with the given byte order
    pub fn new(byte_order: ByteOrder) -> Self {
        ReaderConfig { byte_order }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let cfg: ReaderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, ReaderConfig::new(ByteOrder::LittleEndian));
    }

    #[test]
    fn test_unknown_byte_order() {
        let r: Result<ReaderConfig, _> = serde_json::from_str(r#"{"byte_order": "middle_endian"}"#);
        assert!(r.is_err());
    }
}
