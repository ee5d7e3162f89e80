//! Multi-file import: one parse task per session source, joined once.

use std::collections::BTreeMap;
use std::io;

use rayon::prelude::*;
use tracing::{info, warn};

use crate::errors::ParseError;
use crate::session::{parse_session_bytes, HandImport};

/// A name-addressable collection of session logs.
///
/// Either call may fail for an individual source; failures are reported per
/// source and never stop the others.
pub trait SessionSource: Sync {
    fn names(&self) -> io::Result<Vec<String>>;
    fn read(&self, name: &str) -> io::Result<Vec<u8>>;
}

/// In-memory sources keyed by name, listed in name order.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.files.insert(name.into(), data.into());
        self
    }
}

impl SessionSource for MemorySource {
    fn names(&self) -> io::Result<Vec<String>> {
        Ok(self.files.keys().cloned().collect())
    }

    fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, name.to_string()))
    }
}

/// Reads and parses one named source.
pub fn import_session<S: SessionSource + ?Sized>(source: &S, name: &str) -> HandImport {
    match source.read(name) {
        Ok(bytes) => parse_session_bytes(&bytes),
        Err(e) => {
            warn!(source = name, error = %e, "failed to read session");
            HandImport::from_error(ParseError::filesystem(name, &e))
        }
    }
}

/// Imports every listed file concurrently, keeping each file's result apart.
///
/// Results are in listing order. Runs on the current rayon pool; install a
/// custom pool to bound parallelism.
pub fn import_files<S: SessionSource + ?Sized>(
    source: &S,
) -> io::Result<Vec<(String, HandImport)>> {
    let names = source.names()?;

    let per_file: Vec<(String, HandImport)> = names
        .into_par_iter()
        .map(|name| {
            let import = import_session(source, &name);
            (name, import)
        })
        .collect();

    info!(
        files = per_file.len(),
        hands = per_file.iter().map(|(_, i)| i.hands.len()).sum::<usize>(),
        errors = per_file.iter().map(|(_, i)| i.errors.len()).sum::<usize>(),
        "import finished"
    );
    Ok(per_file)
}

/// Imports every source concurrently and merges the results in listing order.
///
/// A listing failure becomes a single `Filesystem` error.
pub fn import_source<S: SessionSource + ?Sized>(source: &S) -> HandImport {
    match import_files(source) {
        Ok(per_file) => per_file.into_iter().map(|(_, import)| import).collect(),
        Err(e) => {
            warn!(error = %e, "failed to list sessions");
            HandImport::from_error(ParseError::filesystem(".", &e))
        }
    }
}
