//! Tests for character set resolution and line decoding

use super::*;
use crate::app::services::kof_reader::encoding::resolve_encoding;
use crate::app::services::kof_reader::{CharsetDetector, Detection, Utf8Probe};
use crate::config::{EncodingConfig, ParseOptions};
use crate::Error;

fn latin1_kof() -> Vec<u8> {
    let text = kof_text(&[
        admin_line("22", "$21100000000"),
        coordinate_line("BRØNN1", "2413", "100.000", "200.000", "3.000"),
    ]);
    let (bytes, _, had_errors) = encoding_rs::ISO_8859_15.encode(&text);
    assert!(!had_errors);
    bytes.into_owned()
}

#[test]
fn test_utf8_probe() {
    assert_eq!(
        Utf8Probe.detect(b" 05 BH1"),
        Some(Detection::new("ascii", 1.0))
    );
    assert_eq!(
        Utf8Probe.detect("BRØNN".as_bytes()).map(|d| d.encoding),
        Some("utf-8".to_string())
    );
    assert_eq!(Utf8Probe.detect(&[0x42, 0xD8, 0x4E]), None);
}

#[test]
fn test_latin1_input_uses_fallback() {
    let reader = create_test_reader();
    let locations = reader
        .parse_bytes(&latin1_kof(), &ParseOptions::new(25832))
        .unwrap();

    assert_eq!(locations[0].name, "BRØNN1");
    assert_eq!(locations[0].position(), Some((100.0, 200.0)));
}

#[test]
fn test_utf8_input_counts_columns_in_characters() {
    let reader = create_test_reader();
    let text = kof_text(&[coordinate_line("BRØNN1", "2413", "100.000", "200.000", "3.000")]);

    let locations = reader
        .parse_bytes(text.as_bytes(), &ParseOptions::new(25832))
        .unwrap();

    assert_eq!(locations[0].name, "BRØNN1");
    assert_eq!(locations[0].point_z, Some(3.0));
}

#[test]
fn test_byte_order_mark_is_honoured_and_stripped() {
    let reader = create_test_reader();
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(
        kof_text(&[admin_line("22", "$11100000000")]).as_bytes(),
    );
    bytes.extend_from_slice(
        kof_text(&[coordinate_line("BH1", "2418", "2.000", "1.000", "")]).as_bytes(),
    );

    let locations = reader
        .parse_bytes(&bytes, &ParseOptions::new(25832))
        .unwrap();

    // The admin block on line 1 was recognised, so the columns were swapped
    assert_eq!(locations[0].position(), Some((1.0, 2.0)));
}

#[test]
fn test_low_confidence_detection_falls_back() {
    let reader = create_test_reader()
        .with_detector(Arc::new(|_: &[u8]| Some(Detection::new("utf-8", 0.5))));

    let locations = reader
        .parse_bytes(&latin1_kof(), &ParseOptions::new(25832))
        .unwrap();

    assert_eq!(locations[0].name, "BRØNN1");
}

#[test]
fn test_confident_wrong_detection_fails_on_line() {
    let reader = create_test_reader()
        .with_detector(Arc::new(|_: &[u8]| Some(Detection::new("utf-8", 0.95))));

    let err = reader
        .parse_bytes(&latin1_kof(), &ParseOptions::new(25832))
        .unwrap_err();

    assert_eq!(err.line(), Some(2));
    assert!(matches!(err.root_cause(), Error::Encoding { .. }));
}

#[test]
fn test_skipped_lines_are_never_decoded() {
    let reader = create_test_reader()
        .with_detector(Arc::new(|_: &[u8]| Some(Detection::new("utf-8", 0.95))));

    let mut bytes = b" 00 Prosjekt \xD8st\n".to_vec();
    bytes.extend_from_slice(
        kof_text(&[coordinate_line("BH1", "2418", "1.000", "2.000", "")]).as_bytes(),
    );

    let locations = reader
        .parse_bytes(&bytes, &ParseOptions::new(25832))
        .unwrap();
    assert_eq!(locations.len(), 1);
}

#[test]
fn test_ascii_detection_widens_to_superset() {
    let config = EncodingConfig::default();
    let (encoding, body) = resolve_encoding(b" 05 BH1", &Utf8Probe, &config).unwrap();

    assert_eq!(encoding, encoding_rs::ISO_8859_15);
    assert_eq!(body, b" 05 BH1");
}

#[test]
fn test_unknown_detected_label_falls_back() {
    let config = EncodingConfig {
        fallback_encoding: "windows-1252".to_string(),
        ..Default::default()
    };
    let detector = |_: &[u8]| Some(Detection::new("no-such-charset", 0.99));

    let (encoding, _) = resolve_encoding(b"abc", &detector, &config).unwrap();
    assert_eq!(encoding, encoding_rs::WINDOWS_1252);
}

#[test]
fn test_invalid_encoding_config_is_rejected() {
    let config = EncodingConfig {
        fallback_encoding: "not-an-encoding".to_string(),
        ..Default::default()
    };

    let result = create_test_reader().with_encoding_config(config);
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

/// UTF-16LE with BOM, as written by some Windows tools
fn utf16le_kof() -> Vec<u8> {
    let text = kof_text(&[coordinate_line("BH1", "2418", "1.000", "2.000", "")]);
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

#[test]
fn test_utf16_byte_order_mark_is_rejected() {
    let err = create_test_reader()
        .parse_bytes(&utf16le_kof(), &ParseOptions::new(25832))
        .unwrap_err();

    assert!(matches!(err, Error::Encoding { .. }));
    assert_eq!(err.line(), None);
}

#[test]
fn test_utf16_detection_falls_back() {
    let config = EncodingConfig::default();
    let detector = |_: &[u8]| Some(Detection::new("utf-16be", 0.99));

    let (encoding, _) = resolve_encoding(b" 05 BH1", &detector, &config).unwrap();
    assert_eq!(encoding, encoding_rs::ISO_8859_15);
}

#[test]
fn test_utf16_fallback_encoding_is_rejected() {
    let config = EncodingConfig {
        fallback_encoding: "utf-16le".to_string(),
        ..Default::default()
    };

    assert!(matches!(config.validate(), Err(Error::Configuration { .. })));
}
