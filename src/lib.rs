//! KOF Codec Library
//!
//! A Rust library for reading and writing KOF files, the Norwegian fixed-column
//! text format used to exchange survey and geotechnical point data.
//!
//! This library provides tools for:
//! - Parsing administrative and coordinate blocks into deduplicated [`Location`]s
//! - Resolving the file coordinate system from SOSI codes through an SRID registry
//! - Normalising easting/northing column order and reprojecting through a
//!   pluggable [`CoordinateTransformer`]
//! - Writing locations back to KOF text that the reader accepts unchanged
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use kof_codec::{IdentityTransformer, KofReader, MethodCodeTable, ParseOptions, SridRegistry};
//!
//! # fn example() -> kof_codec::Result<()> {
//! let registry = Arc::new(SridRegistry::builtin()?);
//! let reader = KofReader::new(
//!     registry,
//!     Arc::new(MethodCodeTable::standard()),
//!     Arc::new(IdentityTransformer),
//! );
//!
//! let text = " 05 BH1        2418     594137.802   6589107.923 12.500  \n";
//! let locations = reader.parse_bytes(text.as_bytes(), &ParseOptions::new(25832))?;
//! assert_eq!(locations.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod kof_reader;
        pub mod kof_writer;
        pub mod method_codes;
        pub mod record_layout;
        pub mod srid_registry;
        pub mod transform;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AxisOrder, Location, MethodType};
pub use app::services::kof_reader::{
    CharsetDetector, Detection, KofReader, ParseResult, ParseStats, Source, Utf8Probe,
};
pub use app::services::kof_writer::KofWriter;
pub use app::services::method_codes::MethodCodeTable;
pub use app::services::srid_registry::SridRegistry;
pub use app::services::transform::{CoordinateTransformer, IdentityTransformer};
pub use config::{EncodingConfig, ParseOptions};

/// Result type alias for KOF codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for KOF reading and writing
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A line of a KOF file could not be interpreted
    #[error("Error parsing KOF file on line {line} - {cause}")]
    Parse {
        line: usize,
        #[source]
        cause: Box<Error>,
    },

    /// A fixed-column field could not be cast to its declared type
    #[error("Invalid value '{value}' in field {field}: {reason}")]
    FieldDecode {
        field: String,
        value: String,
        reason: String,
    },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Character set detection or decoding failed
    #[error("Encoding error ({encoding}): {message}")]
    Encoding { encoding: String, message: String },

    /// Coordinate reprojection failed for an SRID pair
    #[error("Transform from SRID {from_srid} to SRID {to_srid} failed: {message}")]
    Transform {
        from_srid: i32,
        to_srid: i32,
        message: String,
    },

    /// Coordinate system table could not be loaded
    #[error("SRID registry error: {message}")]
    Registry { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Wrap a per-line failure with its 1-based line number
    pub fn parse(line: usize, cause: Error) -> Self {
        Self::Parse {
            line,
            cause: Box::new(cause),
        }
    }

    /// Create a field decode error
    pub fn field_decode(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::FieldDecode {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create an encoding error
    pub fn encoding(encoding: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Encoding {
            encoding: encoding.into(),
            message: message.into(),
        }
    }

    /// Create a transform error for the given SRID pair
    pub fn transform(from_srid: i32, to_srid: i32, message: impl Into<String>) -> Self {
        Self::Transform {
            from_srid,
            to_srid,
            message: message.into(),
        }
    }

    /// Create an SRID registry error
    pub fn registry(message: impl Into<String>) -> Self {
        Self::Registry {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Line number of a parse failure, if this error came from a specific line
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// The innermost cause of a parse failure, or the error itself
    pub fn root_cause(&self) -> &Error {
        match self {
            Self::Parse { cause, .. } => cause.root_cause(),
            other => other,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Registry {
            message: format!("Malformed coordinate system table: {}", error),
        }
    }
}
