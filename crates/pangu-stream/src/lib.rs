//! Byte stream spacing: detect, decode, space, re-encode.

pub mod adapter;

pub use adapter::{ByteStreamAdapter, StreamReport};
pub use pangu_core::{EncodingTag, PanguConfig, PanguError, Result};
pub use pangu_spacing::{spacing_text, SpacingReport};

/// Space a raw byte stream with the default configuration.
pub fn spacing_byte_stream(bytes: &[u8]) -> Result<Vec<u8>> {
    ByteStreamAdapter::default().spacing_byte_stream(bytes)
}
