//! Error handling for svgr
//!
//! Provides error types for each stage of a conversion:
//! - Document errors (locating and parsing the input document)
//! - Path errors (malformed point/type arrays)
//! - Output errors (output path validation and slot assembly)
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Document error type
///
/// Raised while locating or reading the input document, before any
/// geometry is processed.
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    /// The input file does not exist
    #[error("Input file not found: {}", path.display())]
    InputNotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The document could not be parsed by the path source
    #[error("Failed to parse document: {reason}")]
    ParseFailure {
        /// Parser-supplied description of the failure.
        reason: String,
    },
}

/// Path error type
///
/// Represents structural problems in a point/type array.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A curve triple runs past the end of the array or range
    #[error("Malformed path: curve at index {index} needs points up to {} but the range ends at {end}", index + 2)]
    MalformedPath {
        /// Index of the first point of the truncated triple.
        index: usize,
        /// Exclusive end of the range being walked.
        end: usize,
    },

    /// The point and type arrays differ in length
    #[error("Point/type length mismatch: {points} points, {types} types")]
    LengthMismatch {
        /// Number of points supplied.
        points: usize,
        /// Number of type codes supplied.
        types: usize,
    },

    /// A range does not lie within the path
    #[error("Range {start}..={stop} is outside a path of {len} points")]
    RangeOutOfBounds {
        /// First index of the range.
        start: usize,
        /// Last index of the range.
        stop: usize,
        /// Number of points in the path.
        len: usize,
    },
}

/// Output error type
///
/// Represents problems producing the output document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutputError {
    /// The output path is empty or whitespace
    #[error("Invalid output file: {path}")]
    InvalidOutputPath {
        /// The rejected path as given.
        path: String,
    },

    /// A slot rank does not exist
    #[error("Output slot {rank} does not exist ({count} slots reserved)")]
    UnknownSlot {
        /// Rank that was addressed.
        rank: usize,
        /// Number of reserved slots.
        count: usize,
    },

    /// A slot was written twice
    #[error("Output slot {rank} was already filled")]
    SlotAlreadyFilled {
        /// Rank that was addressed.
        rank: usize,
    },

    /// A slot was never written
    #[error("Output slot {rank} was never filled")]
    SlotNotFilled {
        /// Rank that was left empty.
        rank: usize,
    },
}

/// Main error type for svgr
#[derive(Error, Debug)]
pub enum Error {
    /// Document error
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Path error
    #[error(transparent)]
    Path(#[from] PathError),

    /// Output error
    #[error(transparent)]
    Output(#[from] OutputError),

    /// A worker task failed to run to completion
    #[error("Worker failed: {0}")]
    Worker(String),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a document parse failure
    pub fn parse_failure(reason: impl Into<String>) -> Self {
        Error::Document(DocumentError::ParseFailure {
            reason: reason.into(),
        })
    }

    /// Check if this is a malformed path error
    pub fn is_malformed_path(&self) -> bool {
        matches!(self, Error::Path(PathError::MalformedPath { .. }))
    }

    /// Check if this is a document error
    pub fn is_document_error(&self) -> bool {
        matches!(self, Error::Document(_))
    }

    /// Check if this is an output error
    pub fn is_output_error(&self) -> bool {
        matches!(self, Error::Output(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
