use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanguConfig {
    /// WHATWG label of the legacy encoding used when no UTF form matches.
    pub fallback_encoding: String,
    pub utf16_bom: Utf16BomCheck,
    pub bracket_fallback: BracketFallback,
}

/// How a UTF-16 byte order mark is recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Utf16BomCheck {
    /// `FE FF` / `FF FE`.
    #[default]
    Standard,
    /// `FE FF 00` / `FF FE 41`: the BOM plus a fixed third byte.
    Legacy,
}

/// When the unpaired bracket rules run relative to the paired bracket rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BracketFallback {
    /// Only when the paired rule changed nothing anywhere in the text.
    #[default]
    Global,
    /// After the paired rule, unconditionally.
    Always,
}

impl PanguConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for PanguConfig {
    fn default() -> Self {
        Self {
            fallback_encoding: "windows-1252".into(),
            utf16_bom: Utf16BomCheck::Standard,
            bracket_fallback: BracketFallback::Global,
        }
    }
}
