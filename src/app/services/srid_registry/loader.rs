//! Coordinate system table loading
//!
//! The table is a headerless, semicolon-separated file with the columns
//! `name;description;code;srid`. A copy ships inside the crate and backs
//! [`SridRegistry::builtin`].

use super::{CoordinateSystem, SridRegistry};
use crate::{Error, Result};
use std::collections::hash_map::Entry;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Coordinate system table compiled into the crate
pub const BUILTIN_TABLE: &str = include_str!("../../../../data/KoordSys.csv");

impl SridRegistry {
    /// Load the coordinate system table that ships with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_reader(BUILTIN_TABLE.as_bytes())
    }

    /// Load a coordinate system table from a file
    ///
    /// # Errors
    /// * Returns `Error::Io` if the file cannot be opened
    /// * Returns `Error::Registry` if a row is malformed or the table is empty
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| {
            Error::io(
                format!("Failed to open coordinate system table {}", path.display()),
                e,
            )
        })?;
        Self::from_reader(file)
    }

    /// Load a coordinate system table from any reader
    ///
    /// When a code or SRID appears more than once the first row wins, so
    /// lookups in both directions stay consistent.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(b';')
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut registry = SridRegistry::default();

        for (row, record) in csv_reader.deserialize::<CoordinateSystem>().enumerate() {
            let system = record.map_err(|e| {
                Error::registry(format!(
                    "Malformed coordinate system table at row {}: {}",
                    row + 1,
                    e
                ))
            })?;
            registry.insert(system);
        }

        if registry.is_empty() {
            return Err(Error::registry("Coordinate system table is empty"));
        }

        info!("Loaded {} coordinate systems", registry.len());
        Ok(registry)
    }

    fn insert(&mut self, system: CoordinateSystem) {
        let index = self.systems.len();

        let code_free = !self.by_code.contains_key(&system.code);
        let srid_free = !self.by_srid.contains_key(&system.srid);
        if !code_free || !srid_free {
            warn!(
                "Duplicate coordinate system '{}' (code {}, SRID {}), keeping existing",
                system.name, system.code, system.srid
            );
        }

        if let Entry::Vacant(e) = self.by_code.entry(system.code) {
            e.insert(index);
        }
        if let Entry::Vacant(e) = self.by_srid.entry(system.srid) {
            e.insert(index);
        }

        debug!(
            "Registered {} (code {} <-> SRID {})",
            system.name, system.code, system.srid
        );
        self.systems.push(system);
    }
}
