//! Data models for KOF processing
//!
//! This module contains the core data structures for representing survey
//! locations and the investigation methods recorded against them.

use crate::constants::{MAX_ELEVATION, MIN_ELEVATION};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Method Type
// =============================================================================

/// Geotechnical investigation method recorded for a location
///
/// The set mirrors the method classification used by field data systems. Not
/// every method has a KOF tema code; see
/// [`MethodCodeTable`](crate::app::services::method_codes::MethodCodeTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MethodType {
    /// Rock outcrop (berg i dagen)
    Ro,
    /// Rotary weight sounding (dreiesondering)
    Rws,
    /// Sampling (prøvetaking)
    Sa,
    /// Test pit (prøvegrop)
    Tp,
    /// Simple sounding (enkelsondering)
    Ss,
    /// Rotary pressure sounding (dreietrykksondering)
    Rp,
    /// Cone penetration test (trykksondering)
    Cpt,
    /// Ram sounding (rammesondering)
    Rs,
    /// Settlement recording (setningsmåling)
    Sr,
    /// Standard penetration test
    Spt,
    /// Rock control drilling (fjellkontrollboring)
    Rcd,
    /// Piezometer / groundwater well
    Pz,
    /// In-situ permeability test
    Pt,
    /// Shear vane test (vingeboring)
    Svt,
    /// Inclinometer (helningsmåling)
    Inc,
    /// Total sounding (totalsondering)
    Tot,
    /// Core drilling (kjerneboring)
    Cd,
    /// Environmental sampling (miljøprøvetaking)
    Esa,
    /// Water loss test (vanntapsmåling)
    Wst,
    /// Dilatometer test
    Dt,
    /// Dynamic probing
    Dp,
    /// Soil/rock sounding
    Srs,
    /// Anything without a more specific classification
    Other,
}

impl MethodType {
    /// Every method type in declaration order
    pub const ALL: [MethodType; 23] = [
        MethodType::Ro,
        MethodType::Rws,
        MethodType::Sa,
        MethodType::Tp,
        MethodType::Ss,
        MethodType::Rp,
        MethodType::Cpt,
        MethodType::Rs,
        MethodType::Sr,
        MethodType::Spt,
        MethodType::Rcd,
        MethodType::Pz,
        MethodType::Pt,
        MethodType::Svt,
        MethodType::Inc,
        MethodType::Tot,
        MethodType::Cd,
        MethodType::Esa,
        MethodType::Wst,
        MethodType::Dt,
        MethodType::Dp,
        MethodType::Srs,
        MethodType::Other,
    ];

    /// Short upper-case name, e.g. "CPT"
    pub fn as_str(&self) -> &'static str {
        match self {
            MethodType::Ro => "RO",
            MethodType::Rws => "RWS",
            MethodType::Sa => "SA",
            MethodType::Tp => "TP",
            MethodType::Ss => "SS",
            MethodType::Rp => "RP",
            MethodType::Cpt => "CPT",
            MethodType::Rs => "RS",
            MethodType::Sr => "SR",
            MethodType::Spt => "SPT",
            MethodType::Rcd => "RCD",
            MethodType::Pz => "PZ",
            MethodType::Pt => "PT",
            MethodType::Svt => "SVT",
            MethodType::Inc => "INC",
            MethodType::Tot => "TOT",
            MethodType::Cd => "CD",
            MethodType::Esa => "ESA",
            MethodType::Wst => "WST",
            MethodType::Dt => "DT",
            MethodType::Dp => "DP",
            MethodType::Srs => "SRS",
            MethodType::Other => "OTHER",
        }
    }
}

impl FromStr for MethodType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        MethodType::ALL
            .iter()
            .copied()
            .find(|method| method.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::data_validation(format!("Unknown method type '{}'", s)))
    }
}

impl fmt::Display for MethodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// =============================================================================
// Axis Order
// =============================================================================

/// Which axis the first coordinate column of a KOF file carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisOrder {
    /// Column 1 is easting, column 2 is northing
    #[default]
    EastingFirst,
    /// Column 1 is northing, column 2 is easting
    NorthingFirst,
}

impl AxisOrder {
    /// Whether raw columns must be swapped to get (easting, northing)
    pub fn needs_swap(&self) -> bool {
        matches!(self, AxisOrder::NorthingFirst)
    }
}

// =============================================================================
// Location
// =============================================================================

/// One physical survey point and the methods observed at it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Point identifier, unique within a parsed file (may be empty)
    pub name: String,

    /// Methods in file order; duplicates are kept
    #[serde(default)]
    pub methods: Vec<MethodType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_easting: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_northing: Option<f64>,

    /// Elevation in metres, within [-10000, 10000]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_z: Option<f64>,

    /// SRID of `point_easting`/`point_northing`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srid: Option<i32>,
}

impl Location {
    /// Create a location with no position or methods yet
    pub fn new(name: impl Into<String>, srid: Option<i32>) -> Self {
        Self {
            name: name.into(),
            srid,
            ..Default::default()
        }
    }

    /// Overwrite the position, validating the elevation first
    pub fn set_position(
        &mut self,
        easting: Option<f64>,
        northing: Option<f64>,
        z: Option<f64>,
    ) -> Result<()> {
        validate_elevation(z)?;
        self.point_easting = easting;
        self.point_northing = northing;
        self.point_z = z;
        Ok(())
    }

    /// Validate location data for valid ranges
    pub fn validate(&self) -> Result<()> {
        validate_elevation(self.point_z)
    }

    /// Easting and northing when both are known
    pub fn position(&self) -> Option<(f64, f64)> {
        match (self.point_easting, self.point_northing) {
            (Some(easting), Some(northing)) => Some((easting, northing)),
            _ => None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn show(value: Option<f64>) -> String {
            value.map_or_else(|| "None".to_string(), |v| v.to_string())
        }

        write!(
            f,
            "<Location {} ({}, {}, {})>",
            self.name,
            show(self.point_easting),
            show(self.point_northing),
            show(self.point_z)
        )
    }
}

/// Check that an elevation lies in the accepted range
pub fn validate_elevation(z: Option<f64>) -> Result<()> {
    match z {
        Some(value) if !(MIN_ELEVATION..=MAX_ELEVATION).contains(&value) => {
            Err(Error::data_validation(format!(
                "Invalid elevation {}: must be between {} and {}",
                value, MIN_ELEVATION, MAX_ELEVATION
            )))
        }
        _ => Ok(()),
    }
}
