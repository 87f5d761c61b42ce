use crate::*;

// ========== Config ==========

#[test]
fn test_config_defaults() {
    let config = PanguConfig::default();
    assert_eq!(config.fallback_encoding, "windows-1252");
    assert_eq!(config.utf16_bom, Utf16BomCheck::Standard);
    assert_eq!(config.bracket_fallback, BracketFallback::Global);
}

#[test]
fn test_config_from_json_partial() {
    let config = PanguConfig::from_json(r#"{"fallback_encoding":"gbk"}"#).unwrap();
    assert_eq!(config.fallback_encoding, "gbk");
    assert_eq!(config.utf16_bom, Utf16BomCheck::Standard);
}

#[test]
fn test_config_from_json_full() {
    let json = r#"{"fallback_encoding":"shift_jis","utf16_bom":"legacy","bracket_fallback":"always"}"#;
    let config = PanguConfig::from_json(json).unwrap();
    assert_eq!(config.fallback_encoding, "shift_jis");
    assert_eq!(config.utf16_bom, Utf16BomCheck::Legacy);
    assert_eq!(config.bracket_fallback, BracketFallback::Always);
}

#[test]
fn test_config_from_json_empty_object() {
    assert_eq!(PanguConfig::from_json("{}").unwrap(), PanguConfig::default());
}

#[test]
fn test_config_invalid_json() {
    let err = PanguConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, PanguError::Config(_)));
}

#[test]
fn test_config_unknown_variant() {
    assert!(PanguConfig::from_json(r#"{"utf16_bom":"sometimes"}"#).is_err());
}

#[test]
fn test_config_serialize_roundtrip() {
    let config = PanguConfig { utf16_bom: Utf16BomCheck::Legacy, ..Default::default() };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"legacy\""));
    assert_eq!(PanguConfig::from_json(&json).unwrap(), config);
}

// ========== EncodingTag ==========

#[test]
fn test_tag_bom() {
    assert!(EncodingTag::Utf8NoBom.bom().is_empty());
    assert_eq!(EncodingTag::Utf8Bom.bom(), &[0xEF, 0xBB, 0xBF]);
    assert_eq!(EncodingTag::Utf16BigEndian.bom(), &[0xFE, 0xFF]);
    assert_eq!(EncodingTag::Utf16LittleEndian.bom(), &[0xFF, 0xFE]);
    assert!(EncodingTag::PlatformDefault.bom().is_empty());
}

#[test]
fn test_tag_display() {
    assert_eq!(EncodingTag::Utf16LittleEndian.to_string(), "UTF-16LE");
}

// ========== Errors ==========

#[test]
fn test_error_display() {
    let err = PanguError::MalformedEncoding { offset: 7 };
    assert!(err.to_string().contains("byte 7"));
    let err = PanguError::Unmappable { encoding: "windows-1252".into(), ch: '中' };
    assert!(err.to_string().contains("windows-1252"));
    assert!(PanguError::NotTextFile.to_string().contains("NUL"));
}
