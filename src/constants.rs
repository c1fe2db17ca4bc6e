//! Format constants for the KOF codec
//!
//! This module contains record markers, column layout values, unit codes and
//! default settings shared by the reader and the writer.

// =============================================================================
// Record Markers
// =============================================================================

/// Prefix of an administrative block record
pub const ADMIN_BLOCK_MARKER: &[u8] = b" 01 ";

/// Prefix of a coordinate block record
pub const COORDINATE_BLOCK_MARKER: &[u8] = b" 05 ";

// =============================================================================
// Column Layout
// =============================================================================

/// Administrative block field names
pub mod admin_fields {
    pub const PROJECT: &str = "OPPDRAG";
    pub const DATE: &str = "DATO";
    pub const VERSION: &str = "VERSJON";
    pub const COORDINATE_SYSTEM: &str = "KOORDSYS";
    pub const MUNICIPALITY: &str = "KOMMUNE";
    pub const UNITS: &str = "ENHET";
    pub const OBSERVER: &str = "OBSERVATOR";
}

/// Coordinate block field names
pub mod coordinate_fields {
    pub const POINT_ID: &str = "ID";
    pub const TEMA_CODE: &str = "TEMAKODE";
    pub const FIRST_COORDINATE: &str = "x";
    pub const SECOND_COORDINATE: &str = "y";
    pub const ELEVATION: &str = "z";
}

/// Widths used by the writer; they match the reader's column layout
pub const PROJECT_NAME_WIDTH: usize = 12;
pub const POINT_ID_WIDTH: usize = 10;
pub const TEMA_CODE_WIDTH: usize = 8;
pub const FIRST_COORDINATE_WIDTH: usize = 12;
pub const SECOND_COORDINATE_WIDTH: usize = 11;
pub const ELEVATION_WIDTH: usize = 8;
pub const NATIONAL_CODE_WIDTH: usize = 7;

/// Coordinate lines are padded to this many characters before the terminator
pub const COORDINATE_LINE_WIDTH: usize = 70;

/// Fractional digits written for coordinates and elevation
pub const COORDINATE_DECIMALS: usize = 3;

// =============================================================================
// Units and Axis Order
// =============================================================================

/// Unit/direction code for files whose first coordinate column is easting
pub const UNITS_EASTING_FIRST: &str = "$21100000000";

/// Unit/direction code for files whose first coordinate column is northing
pub const UNITS_NORTHING_FIRST: &str = "$11100000000";

/// Direction digit (second character of the unit field) selecting northing first
pub const DIRECTION_NORTHING_FIRST: char = '1';

/// Direction digit selecting easting first
pub const DIRECTION_EASTING_FIRST: char = '2';

/// Version number written into the administrative block
pub const KOF_VERSION: &str = "1";

// =============================================================================
// Validation
// =============================================================================

/// Lowest accepted elevation in metres
pub const MIN_ELEVATION: f64 = -10_000.0;

/// Highest accepted elevation in metres
pub const MAX_ELEVATION: f64 = 10_000.0;

// =============================================================================
// Character Set Handling
// =============================================================================

/// Encoding used when detection fails or is not confident enough
pub const DEFAULT_FALLBACK_ENCODING: &str = "iso-8859-15";

/// Minimum detector confidence for the detected encoding to be used
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.70;

/// Superset encoding used in place of a detected ASCII result
pub const ASCII_SUPERSET_ENCODING: &str = "iso-8859-15";

// =============================================================================
// Writer Header
// =============================================================================

/// Banner written on the first header line
pub const EXPORT_BANNER: &str = "KOF Export from kof_codec";

/// Column caption line written before the administrative block
pub const ADMIN_CAPTION: &str =
    " 00 Oppdrag      Dato     Ver K.sys   Komm $21100000000 Observer    ";
