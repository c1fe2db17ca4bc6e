//! Parse and encoding configuration.
//!
//! Provides option structures for reading KOF files and for choosing how raw
//! bytes are decoded, with defaults and validation.

use crate::constants::{DEFAULT_FALLBACK_ENCODING, DEFAULT_MIN_CONFIDENCE};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Options for a single parse call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// SRID the returned locations are expressed in
    pub result_srid: i32,

    /// SRID of the coordinates in the file. Overrides any coordinate system
    /// named by the file's administrative block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_srid: Option<i32>,

    /// Swap easting and northing before any transformation
    #[serde(default)]
    pub swap_easting_northing: bool,
}

impl ParseOptions {
    /// Options returning locations in `result_srid`, trusting the file for its own system
    pub fn new(result_srid: i32) -> Self {
        Self {
            result_srid,
            file_srid: None,
            swap_easting_northing: false,
        }
    }

    /// Declare the coordinate system of the file explicitly
    pub fn with_file_srid(mut self, file_srid: Option<i32>) -> Self {
        self.file_srid = file_srid;
        self
    }

    /// Request an easting/northing swap on every coordinate block
    pub fn with_swap_easting_northing(mut self, swap: bool) -> Self {
        self.swap_easting_northing = swap;
        self
    }
}

/// Character set handling for raw KOF input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodingConfig {
    /// WHATWG label of the encoding used when detection is inconclusive
    pub fallback_encoding: String,

    /// Detector confidence required before its result is trusted (0.0 - 1.0)
    pub min_confidence: f32,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            fallback_encoding: DEFAULT_FALLBACK_ENCODING.to_string(),
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

impl EncodingConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(Error::configuration(format!(
                "min_confidence must be between 0.0 and 1.0, got {}",
                self.min_confidence
            )));
        }

        self.fallback().map(|_| ())
    }

    /// The fallback encoding as an `encoding_rs` handle
    pub fn fallback(&self) -> Result<&'static encoding_rs::Encoding> {
        match encoding_rs::Encoding::for_label(self.fallback_encoding.as_bytes()) {
            Some(encoding) if encoding.is_ascii_compatible() => Ok(encoding),
            Some(encoding) => Err(Error::configuration(format!(
                "Fallback encoding '{}' is not ASCII-compatible",
                encoding.name()
            ))),
            None => Err(Error::configuration(format!(
                "Unknown fallback encoding '{}'",
                self.fallback_encoding
            ))),
        }
    }
}
