//! Coordinate reprojection seam
//!
//! The codec never does projection math itself. Readers and writers hold an
//! `Arc<dyn CoordinateTransformer>` and call it whenever coordinates have to
//! move between two SRIDs. Any closure with the right signature is a
//! transformer, which keeps test doubles short.

use crate::{Error, Result};

/// Reprojects a planar coordinate pair between two SRIDs
pub trait CoordinateTransformer: Send + Sync {
    /// Transform `(easting, northing)` from `from_srid` to `to_srid`
    ///
    /// # Errors
    /// Returns `Error::Transform` when the SRID pair is unsupported or the
    /// projection fails.
    fn transform(
        &self,
        from_srid: i32,
        to_srid: i32,
        easting: f64,
        northing: f64,
    ) -> Result<(f64, f64)>;
}

impl<F> CoordinateTransformer for F
where
    F: Fn(i32, i32, f64, f64) -> Result<(f64, f64)> + Send + Sync,
{
    fn transform(
        &self,
        from_srid: i32,
        to_srid: i32,
        easting: f64,
        northing: f64,
    ) -> Result<(f64, f64)> {
        self(from_srid, to_srid, easting, northing)
    }
}

/// Transformer that only accepts a no-op reprojection
///
/// Suitable when input and output share one coordinate system. Any request
/// between two different SRIDs fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTransformer;

impl CoordinateTransformer for IdentityTransformer {
    fn transform(
        &self,
        from_srid: i32,
        to_srid: i32,
        easting: f64,
        northing: f64,
    ) -> Result<(f64, f64)> {
        if from_srid == to_srid {
            Ok((easting, northing))
        } else {
            Err(Error::transform(
                from_srid,
                to_srid,
                "no projection available; only identical SRIDs are supported",
            ))
        }
    }
}
