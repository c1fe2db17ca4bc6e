//! KOF reader
//!
//! Turns raw KOF bytes into deduplicated [`Location`](crate::Location)s.
//!
//! ## Architecture
//!
//! - [`reader`] - Parse orchestration, per-line dispatch and location merging
//! - [`source`] - Path or stream input
//! - [`encoding`] - Character set detection seam and encoding resolution
//! - [`admin_block`] - Administrative block interpretation (coordinate system, axis order)
//! - [`coordinate_block`] - Coordinate block interpretation
//! - [`stats`] - Parse statistics and result structures
//!
//! Record markers are matched on raw bytes; a line is decoded only once it
//! is known to be an administrative or coordinate block.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use kof_codec::{IdentityTransformer, KofReader, MethodCodeTable, ParseOptions, Source, SridRegistry};
//!
//! # fn example(path: &std::path::Path) -> kof_codec::Result<()> {
//! let reader = KofReader::new(
//!     Arc::new(SridRegistry::builtin()?),
//!     Arc::new(MethodCodeTable::standard()),
//!     Arc::new(IdentityTransformer),
//! );
//!
//! let result = reader.parse_with_stats(Source::Path(path), &ParseOptions::new(25832))?;
//! println!("{} locations from {} lines", result.locations.len(), result.stats.lines_read);
//! # Ok(())
//! # }
//! ```

pub mod admin_block;
pub mod coordinate_block;
pub mod encoding;
pub mod reader;
pub mod source;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use admin_block::AdministrativeBlock;
pub use coordinate_block::CoordinateBlock;
pub use encoding::{CharsetDetector, Detection, Utf8Probe};
pub use reader::KofReader;
pub use source::Source;
pub use stats::{ParseResult, ParseStats};
