use serde::{Deserialize, Serialize};

/// Encoding a byte stream was produced with.
///
/// The tag selects both halves of the codec: a stream decoded under a tag is
/// re-encoded under the same tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingTag {
    Utf8NoBom,
    Utf8Bom,
    Utf16BigEndian,
    Utf16LittleEndian,
    /// Configured legacy single/multi-byte encoding.
    PlatformDefault,
}

impl EncodingTag {
    /// Byte order mark emitted in front of the encoded text.
    pub fn bom(&self) -> &'static [u8] {
        match self {
            Self::Utf8Bom => &[0xEF, 0xBB, 0xBF],
            Self::Utf16BigEndian => &[0xFE, 0xFF],
            Self::Utf16LittleEndian => &[0xFF, 0xFE],
            Self::Utf8NoBom | Self::PlatformDefault => &[],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Utf8NoBom => "UTF-8",
            Self::Utf8Bom => "UTF-8 (BOM)",
            Self::Utf16BigEndian => "UTF-16BE",
            Self::Utf16LittleEndian => "UTF-16LE",
            Self::PlatformDefault => "platform default",
        }
    }
}

impl std::fmt::Display for EncodingTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
