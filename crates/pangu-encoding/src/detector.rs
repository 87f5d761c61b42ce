//! Encoding detector.

use pangu_core::{EncodingTag, PanguConfig, PanguError, Result, Utf16BomCheck};
use tracing::{trace, warn};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// A stream is text unless it contains a NUL byte.
pub fn is_text_file(bytes: &[u8]) -> bool {
    !bytes.contains(&0)
}

/// Single-pass UTF-8 shape check.
///
/// A leading byte `1..10xxxxx` with N leading ones announces N-1
/// continuation bytes; N == 1 or N > 6 rejects. Continuation bytes must be
/// `10xxxxxx`. Overlong forms and surrogates are not checked.
///
/// Running out of input while continuation bytes are still expected is an
/// error rather than a rejection.
pub fn is_utf8_without_bom(bytes: &[u8]) -> Result<bool> {
    let mut remaining = 0usize;
    let mut lead = 0usize;

    for (offset, &byte) in bytes.iter().enumerate() {
        if remaining == 0 {
            if byte >= 0x80 {
                let ones = byte.leading_ones() as usize;
                if ones == 1 || ones > 6 {
                    trace!(offset, byte, "invalid UTF-8 leading byte");
                    return Ok(false);
                }
                remaining = ones - 1;
                lead = offset;
            }
        } else {
            if byte & 0xC0 != 0x80 {
                trace!(offset, byte, "invalid UTF-8 continuation byte");
                return Ok(false);
            }
            remaining -= 1;
        }
    }

    if remaining > 0 {
        return Err(PanguError::MalformedEncoding { offset: lead });
    }
    Ok(true)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EncodingDetector {
    pub utf16_bom: Utf16BomCheck,
}

impl EncodingDetector {
    pub fn new(config: &PanguConfig) -> Self {
        Self { utf16_bom: config.utf16_bom }
    }

    pub fn is_text_file(&self, bytes: &[u8]) -> bool {
        is_text_file(bytes)
    }

    /// First match wins: valid UTF-8, UTF-8 BOM, UTF-16BE BOM, UTF-16LE BOM,
    /// then the legacy fallback.
    pub fn get_encoding_type(&self, bytes: &[u8]) -> Result<EncodingTag> {
        if is_utf8_without_bom(bytes)? {
            return Ok(EncodingTag::Utf8NoBom);
        }
        if bytes.starts_with(UTF8_BOM) {
            return Ok(EncodingTag::Utf8Bom);
        }

        let (be, le): (&[u8], &[u8]) = match self.utf16_bom {
            Utf16BomCheck::Standard => (&[0xFE, 0xFF], &[0xFF, 0xFE]),
            Utf16BomCheck::Legacy => (&[0xFE, 0xFF, 0x00], &[0xFF, 0xFE, 0x41]),
        };
        if bytes.starts_with(be) {
            return Ok(EncodingTag::Utf16BigEndian);
        }
        if bytes.starts_with(le) {
            return Ok(EncodingTag::Utf16LittleEndian);
        }

        warn!(len = bytes.len(), "no UTF encoding matched, using fallback encoding");
        Ok(EncodingTag::PlatformDefault)
    }
}
