//! Coordinate block (` 05 `) interpretation

use crate::app::services::record_layout::ExtractedRecord;
use crate::constants::coordinate_fields;

/// One point observation as written in the file
///
/// `first` and `second` are the physical columns; which axis they carry
/// depends on the file's current axis order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateBlock {
    /// Trimmed point id; empty when the column is blank
    pub point_id: String,
    pub tema_code: Option<String>,
    pub first: Option<f64>,
    pub second: Option<f64>,
    pub elevation: Option<f64>,
}

impl CoordinateBlock {
    pub fn from_record(record: &ExtractedRecord) -> Self {
        Self {
            point_id: record.text(coordinate_fields::POINT_ID).unwrap_or_default(),
            tema_code: record.text(coordinate_fields::TEMA_CODE),
            first: record.float(coordinate_fields::FIRST_COORDINATE),
            second: record.float(coordinate_fields::SECOND_COORDINATE),
            elevation: record.float(coordinate_fields::ELEVATION),
        }
    }

    /// (easting, northing), swapping the two columns when asked
    pub fn oriented(&self, swap: bool) -> (Option<f64>, Option<f64>) {
        if swap {
            (self.second, self.first)
        } else {
            (self.first, self.second)
        }
    }
}
