//! Core KOF writer implementation

use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::blocks::{admin_block, coordinate_line, header_lines, is_truncated};
use crate::app::models::Location;
use crate::app::services::method_codes::MethodCodeTable;
use crate::app::services::srid_registry::SridRegistry;
use crate::app::services::transform::CoordinateTransformer;
use crate::constants::{
    POINT_ID_WIDTH, PROJECT_NAME_WIDTH, UNITS_EASTING_FIRST, UNITS_NORTHING_FIRST,
};
use crate::Result;

/// Writer for KOF files
///
/// Like the reader it only holds shared, immutable collaborators and can be
/// reused for any number of exports.
pub struct KofWriter {
    registry: Arc<SridRegistry>,
    methods: Arc<MethodCodeTable>,
    transformer: Arc<dyn CoordinateTransformer>,
}

impl KofWriter {
    pub fn new(
        registry: Arc<SridRegistry>,
        methods: Arc<MethodCodeTable>,
        transformer: Arc<dyn CoordinateTransformer>,
    ) -> Self {
        Self {
            registry,
            methods,
            transformer,
        }
    }

    /// Serialize locations to KOF text in `srid`, stamped with the current time
    ///
    /// With `swap_easting_northing` northing is written to the first
    /// coordinate column and the unit field says so.
    pub fn write_kof(
        &self,
        project_id: &str,
        project_name: &str,
        locations: &[Location],
        srid: i32,
        swap_easting_northing: bool,
    ) -> Result<String> {
        self.write_kof_at(
            project_id,
            project_name,
            locations,
            srid,
            swap_easting_northing,
            Utc::now(),
        )
    }

    /// Serialize locations to KOF text with an explicit export timestamp
    ///
    /// # Errors
    /// * Returns `Error::DataValidation` if a location has an out-of-range elevation
    ///   or a value too wide for its column
    /// * Returns `Error::Transform` if a location cannot be reprojected to `srid`
    pub fn write_kof_at(
        &self,
        project_id: &str,
        project_name: &str,
        locations: &[Location],
        srid: i32,
        swap_easting_northing: bool,
        exported_at: DateTime<Utc>,
    ) -> Result<String> {
        info!(
            "Writing {} locations to KOF in SRID {}",
            locations.len(),
            srid
        );

        let national_code = self.registry.lookup_national_code(srid);
        if national_code.is_none() {
            warn!(
                "SRID {} has no national coordinate system code, leaving K.sys empty",
                srid
            );
        }

        if is_truncated(project_name, PROJECT_NAME_WIDTH) {
            warn!(
                "Project name '{}' is cut to {} characters in the administrative block",
                project_name, PROJECT_NAME_WIDTH
            );
        }

        let units = if swap_easting_northing {
            UNITS_NORTHING_FIRST
        } else {
            UNITS_EASTING_FIRST
        };

        let mut output = header_lines(project_id, project_name, srid, exported_at);
        output.push_str(&admin_block(project_name, national_code, units, exported_at));

        let mut lines = 0;
        for location in locations {
            location.validate()?;
            if is_truncated(&location.name, POINT_ID_WIDTH) {
                warn!(
                    "Point id '{}' is cut to {} characters, locations sharing the prefix will merge on read",
                    location.name, POINT_ID_WIDTH
                );
            }

            let (first, second) = self.output_columns(location, srid, swap_easting_northing)?;
            let z = location.point_z.unwrap_or(0.0);

            if location.methods.is_empty() {
                output.push_str(&coordinate_line(&location.name, "", first, second, z)?);
                lines += 1;
                continue;
            }

            for method in &location.methods {
                let tema_code = self.methods.method_to_tema_code(*method).unwrap_or_else(|| {
                    debug!(
                        "Method {} of '{}' has no tema code, writing empty code",
                        method, location.name
                    );
                    ""
                });
                output.push_str(&coordinate_line(
                    &location.name,
                    tema_code,
                    first,
                    second,
                    z,
                )?);
                lines += 1;
            }
        }

        debug!("Wrote {} coordinate lines", lines);
        Ok(output)
    }

    /// Values for the two coordinate columns of a location
    fn output_columns(&self, location: &Location, srid: i32, swap: bool) -> Result<(f64, f64)> {
        let mut easting = location.point_easting;
        let mut northing = location.point_northing;

        if let (Some(from_srid), Some(e), Some(n)) = (location.srid, easting, northing)
            && from_srid != srid
        {
            let (e, n) = self.transformer.transform(from_srid, srid, e, n)?;
            easting = Some(e);
            northing = Some(n);
        }

        let easting = easting.unwrap_or(0.0);
        let northing = northing.unwrap_or(0.0);

        Ok(if swap {
            (northing, easting)
        } else {
            (easting, northing)
        })
    }
}

impl fmt::Debug for KofWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KofWriter")
            .field("coordinate_systems", &self.registry.len())
            .finish_non_exhaustive()
    }
}
