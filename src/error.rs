use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A syntactically invalid piece of input.
///
/// Any of these aborts the run before geometry starts; there is no
/// recovery and no partial result.
#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("invalid binary string: expected 64 characters, got {0}")]
    BadLength(usize),
    #[error("invalid binary string: unexpected character {0:?}")]
    BadDigit(char),
    #[error("record is missing the {0} field")]
    MissingField(&'static str),
    #[error("invalid header: expected \"x1;y1;x2;y2\", got {0:?}")]
    BadHeader(String),
}

/// Errors surfaced while building a [`SegmentStore`] from input.
///
/// [`SegmentStore`]: crate::SegmentStore
#[derive(Debug, Error)]
pub enum BenchError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("could not open file {}", .path.display())]
    Resource {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to read input")]
    Csv(#[from] csv::Error),
}

/// Host memory sampling was unavailable or failed.
///
/// Non-fatal: the report degrades to printing this message in place of
/// the memory-delta line.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Failed to get memory usage")]
pub struct MeasurementError;
