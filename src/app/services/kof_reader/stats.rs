//! Parse statistics and result structures for KOF reading

use crate::app::models::Location;

/// Parse result with locations and statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Locations in first-seen order
    pub locations: Vec<Location>,

    pub stats: ParseStats,
}

/// Counters collected during one parse call
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of lines in the input
    pub lines_read: usize,

    /// Administrative blocks processed
    pub admin_blocks: usize,

    /// Coordinate blocks processed
    pub coordinate_blocks: usize,

    /// Comment lines and lines with an unknown prefix
    pub skipped_lines: usize,

    /// Coordinate blocks passed through the transformer
    pub reprojected_blocks: usize,

    /// Coordinate blocks whose tema code did not resolve to a method
    pub unknown_tema_codes: usize,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records the reader interpreted
    pub fn records_processed(&self) -> usize {
        self.admin_blocks + self.coordinate_blocks
    }
}
