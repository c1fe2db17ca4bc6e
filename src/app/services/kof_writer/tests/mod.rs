//! Test utilities for the KOF writer

use chrono::{DateTime, TimeZone, Utc};
use std::sync::{Arc, Mutex};

use crate::app::models::{Location, MethodType};
use crate::app::services::kof_writer::KofWriter;
use crate::app::services::method_codes::MethodCodeTable;
use crate::app::services::srid_registry::SridRegistry;
use crate::app::services::transform::{CoordinateTransformer, IdentityTransformer};


/// Fixed export time so output is deterministic
pub fn export_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, 1, 12, 30, 0).unwrap()
}

pub fn create_test_writer() -> KofWriter {
    create_writer_with(Arc::new(IdentityTransformer))
}

pub fn create_writer_with(transformer: Arc<dyn CoordinateTransformer>) -> KofWriter {
    KofWriter::new(
        Arc::new(SridRegistry::builtin().unwrap()),
        Arc::new(MethodCodeTable::standard()),
        transformer,
    )
}

/// Location in EUREF89 UTM32 with the given methods
pub fn create_test_location(name: &str, methods: &[MethodType]) -> Location {
    let mut location = Location::new(name, Some(25832));
    location
        .set_position(Some(594137.802), Some(6589107.923), Some(12.5))
        .unwrap();
    location.methods = methods.to_vec();
    location
}

/// Coordinate lines (` 05 `) of a KOF document
pub fn coordinate_lines(kof: &str) -> Vec<&str> {
    kof.lines().filter(|line| line.starts_with(" 05 ")).collect()
}

/// Transformer that shifts coordinates by a fixed offset and records the SRID pairs
#[derive(Debug, Default)]
pub struct ShiftingTransformer {
    pub pairs: Mutex<Vec<(i32, i32)>>,
}

impl CoordinateTransformer for ShiftingTransformer {
    fn transform(
        &self,
        from_srid: i32,
        to_srid: i32,
        easting: f64,
        northing: f64,
    ) -> crate::Result<(f64, f64)> {
        self.pairs.lock().unwrap().push((from_srid, to_srid));
        Ok((easting + 1000.0, northing - 1000.0))
    }
}
