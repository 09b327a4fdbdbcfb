//! Error types for parsing, ingest and export

use derive_more::{Display, Error};
use std::io;
use std::path::PathBuf;

/// A malformed segment on one input line
///
/// Parse failures are local: the driver skips the offending line and keeps
/// the tree built so far.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// A `name:level` segment with nothing before the colon
    #[display(fmt = "segment {:?} has an empty name", segment)]
    EmptyName { segment: String },
    /// A level suffix that is not a finite number
    #[display(fmt = "segment {:?} has an invalid level {:?}", segment, level)]
    InvalidLevel { segment: String, level: String },
    /// A line whose bytes are not UTF-8
    #[display(fmt = "line is not valid UTF-8 (first bad byte at offset {})", valid_up_to)]
    InvalidEncoding { valid_up_to: usize },
}

/// Fatal failures of a run
#[derive(Debug, Display, Error)]
pub enum Error {
    /// The run configuration is unusable
    #[display(fmt = "invalid configuration: {}", reason)]
    Config { reason: String },
    /// The code listing could not be opened or read
    #[display(fmt = "failed to read {:?}", path)]
    Read { path: PathBuf, source: io::Error },
    /// An output file could not be created or written
    #[display(fmt = "failed to write {:?}", path)]
    Write { path: PathBuf, source: io::Error },
}

impl Error {
    /// Whether the failure stems from configuration rather than I/O
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
