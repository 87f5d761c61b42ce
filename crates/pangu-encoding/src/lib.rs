//! Text/binary classification and encoding sniffing for raw byte streams.
//!
//! Only UTF-8 (with or without BOM) and the two UTF-16 byte orders are
//! recognised; anything else is read with a configured legacy encoding.

pub mod codec;
pub mod detector;

pub use codec::{resolve_fallback, Codec};
pub use detector::{is_text_file, is_utf8_without_bom, EncodingDetector};

use pangu_core::{EncodingTag, Result};

/// Detect the encoding of `bytes` with the default configuration.
pub fn get_encoding_type(bytes: &[u8]) -> Result<EncodingTag> {
    EncodingDetector::default().get_encoding_type(bytes)
}
