//! Input sources for the KOF reader

use crate::{Error, Result};
use std::fmt;
use std::io::Read;
use std::path::Path;

/// Where KOF bytes come from
pub enum Source<'a> {
    /// A file on disk, opened and closed by the reader
    Path(&'a Path),

    /// An already-open byte stream owned by the caller
    Stream(&'a mut dyn Read),
}

impl Source<'_> {
    /// Read the whole input into memory
    pub fn read_all(self) -> Result<Vec<u8>> {
        match self {
            Source::Path(path) => std::fs::read(path).map_err(|e| {
                Error::io(format!("Failed to read KOF file {}", path.display()), e)
            }),
            Source::Stream(stream) => {
                let mut buffer = Vec::new();
                stream
                    .read_to_end(&mut buffer)
                    .map_err(|e| Error::io("Failed to read KOF stream", e))?;
                Ok(buffer)
            }
        }
    }
}

impl fmt::Debug for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Source::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}
