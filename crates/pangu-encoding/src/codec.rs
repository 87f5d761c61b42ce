//! Decode/encode pair for each `EncodingTag`.

use encoding_rs::{EncoderResult, Encoding, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};
use pangu_core::{EncodingTag, PanguError, Result};

/// Resolve a WHATWG label to an encoding that can both decode and encode.
pub fn resolve_fallback(label: &str) -> Result<&'static Encoding> {
    let encoding = Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| PanguError::InvalidFallback(format!("unknown label {label:?}")))?;
    // UTF-16 and `replacement` encode as UTF-8, which would not round-trip.
    if encoding.output_encoding() != encoding {
        return Err(PanguError::InvalidFallback(format!(
            "{} cannot be used for encoding",
            encoding.name()
        )));
    }
    Ok(encoding)
}

#[derive(Debug, Clone, Copy)]
pub struct Codec {
    tag: EncodingTag,
    fallback: &'static Encoding,
}

impl Codec {
    pub fn new(tag: EncodingTag, fallback: &'static Encoding) -> Self {
        Self { tag, fallback }
    }

    pub fn tag(&self) -> EncodingTag {
        self.tag
    }

    fn encoding(&self) -> &'static Encoding {
        match self.tag {
            EncodingTag::Utf8NoBom | EncodingTag::Utf8Bom => UTF_8,
            EncodingTag::Utf16BigEndian => UTF_16BE,
            EncodingTag::Utf16LittleEndian => UTF_16LE,
            EncodingTag::PlatformDefault => self.fallback,
        }
    }

    fn encoding_name(&self) -> String {
        match self.tag {
            EncodingTag::PlatformDefault => self.fallback.name().to_string(),
            tag => tag.name().to_string(),
        }
    }

    /// Strict decode: the BOM for this tag is dropped, malformed input is an error.
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        let body = bytes.strip_prefix(self.tag.bom()).unwrap_or(bytes);
        self.encoding()
            .decode_without_bom_handling_and_without_replacement(body)
            .map(|text| text.into_owned())
            .ok_or_else(|| PanguError::Decode { encoding: self.encoding_name() })
    }

    /// Encode `text`, re-emitting the BOM for this tag.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        let mut out = self.tag.bom().to_vec();
        match self.tag {
            EncodingTag::Utf8NoBom | EncodingTag::Utf8Bom => out.extend_from_slice(text.as_bytes()),
            EncodingTag::Utf16BigEndian => {
                out.extend(text.encode_utf16().flat_map(|unit| unit.to_be_bytes()))
            }
            EncodingTag::Utf16LittleEndian => {
                out.extend(text.encode_utf16().flat_map(|unit| unit.to_le_bytes()))
            }
            EncodingTag::PlatformDefault => self.encode_legacy(text, &mut out)?,
        }
        Ok(out)
    }

    fn encode_legacy(&self, text: &str, out: &mut Vec<u8>) -> Result<()> {
        let mut encoder = self.fallback.new_encoder();
        let mut rest = text;
        loop {
            let needed = encoder
                .max_buffer_length_from_utf8_without_replacement(rest.len())
                .unwrap_or(rest.len() * 4);
            out.reserve(needed);
            let (result, read) = encoder.encode_from_utf8_to_vec_without_replacement(rest, out, true);
            rest = &rest[read..];
            match result {
                EncoderResult::InputEmpty => return Ok(()),
                EncoderResult::OutputFull => continue,
                EncoderResult::Unmappable(ch) => {
                    return Err(PanguError::Unmappable { encoding: self.encoding_name(), ch })
                }
            }
        }
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(EncodingTag::Utf8NoBom, WINDOWS_1252)
    }
}
