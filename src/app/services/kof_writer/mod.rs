//! KOF writer
//!
//! Serializes [`Location`](crate::Location)s into KOF text using the same
//! column layout the reader expects, so written files parse back unchanged.
//!
//! - [`writer`] - Output orchestration, reprojection and axis order
//! - [`blocks`] - Fixed-column formatting of header, administrative and coordinate lines

pub mod blocks;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use writer::KofWriter;
