//! Test utilities for the KOF reader
//!
//! Line builders produce records with the exact column layout of the reader,
//! and a recording transformer captures every reprojection request.

use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

use crate::app::services::kof_reader::KofReader;
use crate::app::services::method_codes::MethodCodeTable;
use crate::app::services::srid_registry::SridRegistry;
use crate::app::services::transform::{CoordinateTransformer, IdentityTransformer};
use crate::Result;

// Test modules
mod encoding_tests;

/// One recorded `transform` call
pub type TransformCall = (i32, i32, f64, f64);

/// Transformer returning a fixed result and remembering its inputs
#[derive(Debug, Default)]
pub struct RecordingTransformer {
    result: (f64, f64),
    calls: Mutex<Vec<TransformCall>>,
}

impl RecordingTransformer {
    pub fn returning(easting: f64, northing: f64) -> Self {
        Self {
            result: (easting, northing),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<TransformCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl CoordinateTransformer for RecordingTransformer {
    fn transform(
        &self,
        from_srid: i32,
        to_srid: i32,
        easting: f64,
        northing: f64,
    ) -> Result<(f64, f64)> {
        self.calls
            .lock()
            .unwrap()
            .push((from_srid, to_srid, easting, northing));
        Ok(self.result)
    }
}

/// Reader with the builtin registry and the identity transformer
pub fn create_test_reader() -> KofReader {
    create_reader_with(Arc::new(IdentityTransformer))
}

/// Reader with the builtin registry and a caller-supplied transformer
pub fn create_reader_with(transformer: Arc<dyn CoordinateTransformer>) -> KofReader {
    KofReader::new(
        Arc::new(SridRegistry::builtin().unwrap()),
        Arc::new(MethodCodeTable::standard()),
        transformer,
    )
}

/// Administrative block line with the given coordinate system code and units
pub fn admin_line(coordinate_system: &str, units: &str) -> String {
    format!(
        " 01 {:<12} {:>8} {:>3} {:>7} {:>4} {:<12} {:<12}",
        "TESTPROJ", "01022024", "1", coordinate_system, "", units, ""
    )
}

/// Coordinate block line; values are inserted verbatim into their columns
pub fn coordinate_line(id: &str, tema: &str, first: &str, second: &str, z: &str) -> String {
    format!(
        " 05 {:<10} {:<8} {:<12} {:<11} {:<8}",
        id, tema, first, second, z
    )
}

/// Join lines with `\n` terminators
pub fn kof_text(lines: &[String]) -> String {
    let mut text = String::new();
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}

/// Write content to a temporary file for path-based parsing
pub fn create_temp_file(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Sample file in EUREF89 UTM32 (code 22), easting first
pub fn create_utm32_kof() -> String {
    kof_text(&[
        " 00 KOF Export from test".to_string(),
        admin_line("22", "$21100000000"),
        coordinate_line("SMPLOC1", "2418", "594137.802", "6589107.923", "12.500"),
    ])
}
