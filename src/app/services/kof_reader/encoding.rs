//! Character set handling for raw KOF input
//!
//! Detection itself is a pluggable collaborator. This module decides which
//! encoding to actually use from the detector's answer, the byte-order mark
//! and the configured fallback, and decodes single lines with it.

use crate::config::EncodingConfig;
use crate::constants::ASCII_SUPERSET_ENCODING;
use crate::{Error, Result};
use bstr::ByteSlice;
use encoding_rs::Encoding;
use std::borrow::Cow;
use tracing::{debug, warn};

/// A detector's guess for a byte buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// WHATWG encoding label, e.g. "utf-8" or "windows-1252"
    pub encoding: String,

    /// Confidence between 0.0 and 1.0
    pub confidence: f32,
}

impl Detection {
    pub fn new(encoding: impl Into<String>, confidence: f32) -> Self {
        Self {
            encoding: encoding.into(),
            confidence,
        }
    }
}

/// Guesses the character set of a byte buffer
pub trait CharsetDetector: Send + Sync {
    /// `None` when the detector has no opinion
    fn detect(&self, bytes: &[u8]) -> Option<Detection>;
}

impl<F> CharsetDetector for F
where
    F: Fn(&[u8]) -> Option<Detection> + Send + Sync,
{
    fn detect(&self, bytes: &[u8]) -> Option<Detection> {
        self(bytes)
    }
}

/// Default detector: recognises pure ASCII and valid UTF-8, nothing else
///
/// Anything that is not valid UTF-8 is left to the fallback encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Probe;

impl CharsetDetector for Utf8Probe {
    fn detect(&self, bytes: &[u8]) -> Option<Detection> {
        if bytes.is_ascii() {
            Some(Detection::new("ascii", 1.0))
        } else if bytes.to_str().is_ok() {
            Some(Detection::new("utf-8", 0.99))
        } else {
            None
        }
    }
}

/// Pick the encoding for `bytes` and return it with the BOM stripped
///
/// A byte-order mark always wins. Otherwise the detector result is used when
/// it is confident enough and names a known encoding; a detected ASCII result
/// is widened to its superset.
///
/// Record markers are matched on raw bytes, so only ASCII-compatible
/// encodings are usable. A BOM naming another one is an error; such a
/// detector result is treated like an unknown label.
pub fn resolve_encoding<'a>(
    bytes: &'a [u8],
    detector: &dyn CharsetDetector,
    config: &EncodingConfig,
) -> Result<(&'static Encoding, &'a [u8])> {
    if let Some((encoding, bom_length)) = Encoding::for_bom(bytes) {
        if !encoding.is_ascii_compatible() {
            return Err(Error::encoding(
                encoding.name(),
                "byte-order mark names an encoding that is not ASCII-compatible",
            ));
        }
        debug!("Byte-order mark selects {}", encoding.name());
        return Ok((encoding, &bytes[bom_length..]));
    }

    let fallback = config.fallback()?;

    let Some(detection) = detector.detect(bytes) else {
        debug!(
            "Character set detection failed, using {}",
            fallback.name()
        );
        return Ok((fallback, bytes));
    };

    if detection.confidence < config.min_confidence {
        debug!(
            "Detected {} with confidence {:.2} below {:.2}, using {}",
            detection.encoding,
            detection.confidence,
            config.min_confidence,
            fallback.name()
        );
        return Ok((fallback, bytes));
    }

    let label = if detection.encoding.eq_ignore_ascii_case("ascii")
        || detection.encoding.eq_ignore_ascii_case("us-ascii")
    {
        ASCII_SUPERSET_ENCODING
    } else {
        detection.encoding.as_str()
    };

    match Encoding::for_label(label.as_bytes()) {
        Some(encoding) if encoding.is_ascii_compatible() => {
            debug!(
                "Using detected encoding {} (confidence {:.2})",
                encoding.name(),
                detection.confidence
            );
            Ok((encoding, bytes))
        }
        _ => {
            warn!(
                "Detector returned unusable encoding '{}', using {}",
                detection.encoding,
                fallback.name()
            );
            Ok((fallback, bytes))
        }
    }
}

/// Decode one raw line, failing on any malformed byte sequence
pub fn decode_line<'a>(raw: &'a [u8], encoding: &'static Encoding) -> Result<Cow<'a, str>> {
    encoding
        .decode_without_bom_handling_and_without_replacement(raw)
        .ok_or_else(|| Error::encoding(encoding.name(), "malformed byte sequence in line"))
}
