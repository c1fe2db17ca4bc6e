//! SRID registry for SOSI coordinate system code lookups
//!
//! This module maps the national (SOSI) coordinate system codes written in the
//! `KOORDSYS` column of a KOF administrative block to global spatial reference
//! identifiers, and back. The registry is built once and only read afterwards,
//! so a single instance can be shared behind an `Arc` by any number of readers
//! and writers.

use std::collections::HashMap;

pub mod loader;

#[cfg(test)]
pub mod tests;

/// One row of the coordinate system table
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct CoordinateSystem {
    /// Short name, e.g. "EUREF89 UTM32"
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// National (SOSI) coordinate system code
    pub code: i32,

    /// Global spatial reference identifier
    pub srid: i32,
}

/// Bidirectional national code <-> SRID lookup table
#[derive(Debug, Clone, Default)]
pub struct SridRegistry {
    /// Table rows in load order
    pub(crate) systems: Vec<CoordinateSystem>,

    /// National code to index into `systems`
    pub(crate) by_code: HashMap<i32, usize>,

    /// SRID to index into `systems`
    pub(crate) by_srid: HashMap<i32, usize>,
}

impl SridRegistry {
    /// SRID for a national coordinate system code
    pub fn lookup_srid(&self, national_code: i32) -> Option<i32> {
        self.by_code
            .get(&national_code)
            .map(|&index| self.systems[index].srid)
    }

    /// National coordinate system code for an SRID
    pub fn lookup_national_code(&self, srid: i32) -> Option<i32> {
        self.by_srid
            .get(&srid)
            .map(|&index| self.systems[index].code)
    }

    /// Full table row for an SRID
    pub fn system_for_srid(&self, srid: i32) -> Option<&CoordinateSystem> {
        self.by_srid.get(&srid).map(|&index| &self.systems[index])
    }

    /// All coordinate systems in table order
    pub fn systems(&self) -> &[CoordinateSystem] {
        &self.systems
    }

    /// Number of coordinate systems in the registry
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}
