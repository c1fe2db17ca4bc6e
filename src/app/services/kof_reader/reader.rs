//! Core KOF reader implementation
//!
//! This module drives a parse: it reads the source into memory, resolves the
//! character set, walks the lines, and folds coordinate blocks into
//! locations keyed by point id. All running state (file SRID, axis order,
//! the location map) belongs to a single call.

use bstr::ByteSlice;
use encoding_rs::Encoding;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::admin_block::AdministrativeBlock;
use super::coordinate_block::CoordinateBlock;
use super::encoding::{CharsetDetector, Utf8Probe, decode_line, resolve_encoding};
use super::source::Source;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{AxisOrder, Location};
use crate::app::services::method_codes::MethodCodeTable;
use crate::app::services::record_layout::RecordLayout;
use crate::app::services::srid_registry::SridRegistry;
use crate::app::services::transform::CoordinateTransformer;
use crate::config::{EncodingConfig, ParseOptions};
use crate::constants::{ADMIN_BLOCK_MARKER, COORDINATE_BLOCK_MARKER};
use crate::{Error, Result};

/// Reader for KOF files
///
/// Holds only shared, immutable collaborators, so one instance can be reused
/// for any number of parses and shared between threads.
pub struct KofReader {
    registry: Arc<SridRegistry>,
    methods: Arc<MethodCodeTable>,
    transformer: Arc<dyn CoordinateTransformer>,
    detector: Arc<dyn CharsetDetector>,
    encoding: EncodingConfig,
    admin_layout: RecordLayout,
    coordinate_layout: RecordLayout,
}

impl KofReader {
    /// Create a reader using the default character set detector
    pub fn new(
        registry: Arc<SridRegistry>,
        methods: Arc<MethodCodeTable>,
        transformer: Arc<dyn CoordinateTransformer>,
    ) -> Self {
        Self {
            registry,
            methods,
            transformer,
            detector: Arc::new(Utf8Probe),
            encoding: EncodingConfig::default(),
            admin_layout: RecordLayout::administrative(),
            coordinate_layout: RecordLayout::coordinate(),
        }
    }

    /// Replace the character set detector
    pub fn with_detector(mut self, detector: Arc<dyn CharsetDetector>) -> Self {
        self.detector = detector;
        self
    }

    /// Replace the fallback encoding and confidence threshold
    ///
    /// # Errors
    /// Returns `Error::Configuration` if the configuration is invalid
    pub fn with_encoding_config(mut self, config: EncodingConfig) -> Result<Self> {
        config.validate()?;
        self.encoding = config;
        Ok(self)
    }

    /// Parse a KOF source into locations
    pub fn parse(&self, source: Source<'_>, options: &ParseOptions) -> Result<Vec<Location>> {
        Ok(self.parse_with_stats(source, options)?.locations)
    }

    /// Parse in-memory KOF bytes into locations
    pub fn parse_bytes(&self, bytes: &[u8], options: &ParseOptions) -> Result<Vec<Location>> {
        Ok(self.parse_buffer(bytes, options)?.locations)
    }

    /// Parse a KOF source, returning locations together with parse statistics
    pub fn parse_with_stats(
        &self,
        source: Source<'_>,
        options: &ParseOptions,
    ) -> Result<ParseResult> {
        info!("Parsing KOF source: {:?}", source);
        let bytes = source.read_all()?;
        self.parse_buffer(&bytes, options)
    }

    fn parse_buffer(&self, bytes: &[u8], options: &ParseOptions) -> Result<ParseResult> {
        let mut stats = ParseStats::new();

        if bytes.is_empty() {
            debug!("Empty KOF input");
            return Ok(ParseResult {
                locations: Vec::new(),
                stats,
            });
        }

        let (encoding, body) = resolve_encoding(bytes, self.detector.as_ref(), &self.encoding)?;
        let mut state = ParseState::new(options);

        for (index, raw) in body.lines().enumerate() {
            stats.lines_read += 1;
            self.process_line(raw, encoding, options, &mut state, &mut stats)
                .map_err(|e| Error::parse(index + 1, e))?;
        }

        info!(
            "Parsed {} locations from {} lines ({} coordinate blocks, {} reprojected, {} skipped lines)",
            state.locations.len(),
            stats.lines_read,
            stats.coordinate_blocks,
            stats.reprojected_blocks,
            stats.skipped_lines
        );

        Ok(ParseResult {
            locations: state.locations,
            stats,
        })
    }

    /// Classify one raw line by its marker and apply it to the running state
    fn process_line(
        &self,
        raw: &[u8],
        encoding: &'static Encoding,
        options: &ParseOptions,
        state: &mut ParseState,
        stats: &mut ParseStats,
    ) -> Result<()> {
        if raw.starts_with(ADMIN_BLOCK_MARKER) {
            let line = decode_line(raw, encoding)?;
            let record = self.admin_layout.extract(&line)?;
            self.apply_admin_block(&AdministrativeBlock::from_record(&record), options, state);
            stats.admin_blocks += 1;
        } else if raw.starts_with(COORDINATE_BLOCK_MARKER) {
            let line = decode_line(raw, encoding)?;
            let record = self.coordinate_layout.extract(&line)?;
            self.apply_coordinate_block(
                &CoordinateBlock::from_record(&record),
                options,
                state,
                stats,
            )?;
            stats.coordinate_blocks += 1;
        } else {
            stats.skipped_lines += 1;
        }
        Ok(())
    }

    fn apply_admin_block(
        &self,
        block: &AdministrativeBlock,
        options: &ParseOptions,
        state: &mut ParseState,
    ) {
        if let Some(code) = block.coordinate_system {
            if options.file_srid.is_some() {
                debug!(
                    "Ignoring coordinate system code {}, file SRID given explicitly",
                    code
                );
            } else {
                let srid = i32::try_from(code)
                    .ok()
                    .and_then(|code| self.registry.lookup_srid(code));
                match srid {
                    Some(srid) => debug!("Coordinate system code {} is SRID {}", code, srid),
                    None => warn!(
                        "Unknown coordinate system code {}, coordinates will not be reprojected",
                        code
                    ),
                }
                state.file_srid = srid;
            }
        }

        if let Some(axis_order) = block.axis_order() {
            debug!("Axis order set to {:?}", axis_order);
            state.axis_order = axis_order;
        }
    }

    fn apply_coordinate_block(
        &self,
        block: &CoordinateBlock,
        options: &ParseOptions,
        state: &mut ParseState,
        stats: &mut ParseStats,
    ) -> Result<()> {
        // The file's own direction and the caller's request toggle independently
        let swap = state.axis_order.needs_swap() ^ options.swap_easting_northing;
        let (mut easting, mut northing) = block.oriented(swap);

        if let (Some(file_srid), Some(e), Some(n)) = (state.file_srid, easting, northing)
            && file_srid != options.result_srid
        {
            let (e, n) = self
                .transformer
                .transform(file_srid, options.result_srid, e, n)?;
            easting = Some(e);
            northing = Some(n);
            stats.reprojected_blocks += 1;
        }

        let method = match block.tema_code.as_deref() {
            Some(code) => {
                let method = self.methods.tema_code_to_method(code);
                if method.is_none() {
                    debug!("Unknown tema code '{}' for point '{}'", code, block.point_id);
                    stats.unknown_tema_codes += 1;
                }
                method
            }
            None => None,
        };

        let location = state.location_mut(&block.point_id, options.result_srid);
        location.set_position(easting, northing, block.elevation)?;
        if let Some(method) = method {
            location.methods.push(method);
        }

        Ok(())
    }
}

impl fmt::Debug for KofReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KofReader")
            .field("coordinate_systems", &self.registry.len())
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}

/// Running state of one parse call
struct ParseState {
    file_srid: Option<i32>,
    axis_order: AxisOrder,
    locations: Vec<Location>,
    index: HashMap<String, usize>,
}

impl ParseState {
    fn new(options: &ParseOptions) -> Self {
        Self {
            file_srid: options.file_srid.or(Some(options.result_srid)),
            axis_order: AxisOrder::default(),
            locations: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Location for `name`, created in `srid` on first sight
    fn location_mut(&mut self, name: &str, srid: i32) -> &mut Location {
        let index = match self.index.get(name) {
            Some(&index) => index,
            None => {
                let index = self.locations.len();
                self.locations.push(Location::new(name, Some(srid)));
                self.index.insert(name.to_string(), index);
                index
            }
        };
        &mut self.locations[index]
    }
}
