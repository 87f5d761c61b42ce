use encoding_rs::{Encoding, WINDOWS_1252};
use pangu_core::{EncodingTag, PanguConfig, PanguError, Result};
use pangu_encoding::{resolve_fallback, Codec, EncodingDetector};
use pangu_spacing::{SpacingEngine, SpacingReport};
use tracing::debug;

/// Output bytes plus what happened on the way.
#[derive(Debug, Clone)]
pub struct StreamReport {
    pub output: Vec<u8>,
    pub encoding: EncodingTag,
    pub spacing: SpacingReport,
}

/// Composes detection, decoding, spacing and re-encoding.
///
/// Output is always encoded with the encoding the input was detected as.
#[derive(Debug, Clone, Copy)]
pub struct ByteStreamAdapter {
    detector: EncodingDetector,
    engine: SpacingEngine,
    fallback: &'static Encoding,
}

impl ByteStreamAdapter {
    pub fn new(config: &PanguConfig) -> Result<Self> {
        Ok(Self {
            detector: EncodingDetector::new(config),
            engine: SpacingEngine::with_config(config),
            fallback: resolve_fallback(&config.fallback_encoding)?,
        })
    }

    pub fn fallback_encoding(&self) -> &'static Encoding {
        self.fallback
    }

    pub fn spacing_byte_stream(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        Ok(self.spacing_byte_stream_with_report(bytes)?.output)
    }

    pub fn spacing_byte_stream_with_report(&self, bytes: &[u8]) -> Result<StreamReport> {
        if !self.detector.is_text_file(bytes) {
            return Err(PanguError::NotTextFile);
        }
        let encoding = self.detector.get_encoding_type(bytes)?;
        debug!(%encoding, len = bytes.len(), "detected encoding");

        let codec = Codec::new(encoding, self.fallback);
        let text = codec.decode(bytes)?;
        let spacing = self.engine.spacing_with_report(&text);
        let output = codec.encode(&spacing.output)?;

        Ok(StreamReport { output, encoding, spacing })
    }
}

impl Default for ByteStreamAdapter {
    fn default() -> Self {
        Self {
            detector: EncodingDetector::default(),
            engine: SpacingEngine::default(),
            fallback: WINDOWS_1252,
        }
    }
}
