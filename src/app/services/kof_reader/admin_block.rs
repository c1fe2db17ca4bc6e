//! Administrative block (` 01 `) interpretation

use crate::app::models::AxisOrder;
use crate::app::services::record_layout::ExtractedRecord;
use crate::constants::{DIRECTION_EASTING_FIRST, DIRECTION_NORTHING_FIRST, admin_fields};

/// File-level metadata carried by an administrative block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdministrativeBlock {
    pub project: Option<String>,
    pub date: Option<String>,
    pub version: Option<i64>,

    /// National (SOSI) coordinate system code
    pub coordinate_system: Option<i64>,

    pub municipality: Option<String>,

    /// Unit/direction code, e.g. "$21100000000"
    pub units: Option<String>,

    pub observer: Option<String>,
}

impl AdministrativeBlock {
    pub fn from_record(record: &ExtractedRecord) -> Self {
        Self {
            project: record.text(admin_fields::PROJECT),
            date: record.text(admin_fields::DATE),
            version: record.integer(admin_fields::VERSION),
            coordinate_system: record.integer(admin_fields::COORDINATE_SYSTEM),
            municipality: record.text(admin_fields::MUNICIPALITY),
            units: record.text(admin_fields::UNITS),
            observer: record.text(admin_fields::OBSERVER),
        }
    }

    /// Axis order selected by the second character of the unit field
    ///
    /// `None` when the field is absent or the digit is not a direction code,
    /// in which case the current order stays in effect.
    pub fn axis_order(&self) -> Option<AxisOrder> {
        match self.units.as_deref()?.chars().nth(1)? {
            DIRECTION_NORTHING_FIRST => Some(AxisOrder::NorthingFirst),
            DIRECTION_EASTING_FIRST => Some(AxisOrder::EastingFirst),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_units(units: &str) -> AdministrativeBlock {
        AdministrativeBlock {
            units: Some(units.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_direction_digit() {
        assert_eq!(
            with_units("$11100000000").axis_order(),
            Some(AxisOrder::NorthingFirst)
        );
        assert_eq!(
            with_units("$21100000000").axis_order(),
            Some(AxisOrder::EastingFirst)
        );
    }

    #[test]
    fn test_unrecognised_direction_leaves_order_alone() {
        assert_eq!(with_units("$31100000000").axis_order(), None);
        assert_eq!(with_units("$").axis_order(), None);
        assert_eq!(AdministrativeBlock::default().axis_order(), None);
    }
}
