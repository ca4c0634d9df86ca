//! Error types for RPS operations
//!
//! Errors fall into four categories:
//! - Domain errors (projection pole, non-finite phase) are recoverable:
//!   callers can drop the offending index and carry on.
//! - Configuration errors mean a curated index table is wrong. They are
//!   raised while a [`SolidSelector`](crate::SolidSelector) is being built
//!   and are never retried.
//! - Input errors come from user-supplied identifiers and coordinate files.
//! - External errors wrap I/O and serialization failures during export.
//!
//! # Example
//!
//! ```rust
//! use rps_core::error::{ErrorCategory, RpsError};
//!
//! let err: RpsError = "heptahedron".parse::<rps_core::PlatonicSolid>().unwrap_err();
//! assert_eq!(err.category(), ErrorCategory::Input);
//! assert_eq!(err.error_code(), "UNKNOWN_SOLID");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for RPS operations
pub type Result<T> = std::result::Result<T, RpsError>;

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Numeric domain violation (pole, non-finite input)
    Domain,
    /// Curated data is inconsistent
    Configuration,
    /// Invalid user input
    Input,
    /// I/O or serialization failure
    External,
}

/// Errors that can occur in RPS operations
#[derive(Error, Debug)]
pub enum RpsError {
    // ═══════════════════════════════════════════════════════════════════════
    // Domain errors
    // ═══════════════════════════════════════════════════════════════════════

    /// Stereographic projection hit the pole at w = 1
    #[error("Stereographic projection undefined at the pole (w = {w}){}", index_suffix(.index))]
    ProjectionPole { index: Option<u32>, w: f64 },

    /// A phase or coordinate was NaN or infinite
    #[error("Non-finite input: {what} = {value}")]
    NonFiniteInput { what: &'static str, value: f64 },

    // ═══════════════════════════════════════════════════════════════════════
    // Configuration errors (curated index tables)
    // ═══════════════════════════════════════════════════════════════════════

    /// Index set produced the wrong number of vertices
    #[error("Index set for {solid} yields {actual} vertices, expected {expected}")]
    VertexCountMismatch {
        solid: String,
        expected: usize,
        actual: usize,
    },

    /// Two indices of one solid project to the same point
    #[error("Index set for {solid} has coincident vertices: n={first} and n={second} are {distance:e} apart")]
    CoincidentVertices {
        solid: String,
        first: u32,
        second: u32,
        distance: f64,
    },

    /// Edge structure does not match the solid's combinatorics
    #[error("Index set for {solid} has irregular edges: {reason}")]
    IrregularEdges { solid: String, reason: String },

    /// Index is outside the rotor source
    #[error("Index {index} out of range for rotor source '{source_name}' (len {len})")]
    IndexOutOfRange {
        source_name: String,
        index: u32,
        len: usize,
    },

    // ═══════════════════════════════════════════════════════════════════════
    // Input errors
    // ═══════════════════════════════════════════════════════════════════════

    /// Solid identifier not recognised
    #[error("Unknown solid '{name}'. Valid solids: {}", .valid.join(", "))]
    UnknownSolid {
        name: String,
        valid: Vec<&'static str>,
    },

    /// Malformed row in a coordinate CSV
    #[error("CSV parse error on line {line}: {reason}")]
    CsvParse { line: usize, reason: String },

    // ═══════════════════════════════════════════════════════════════════════
    // External errors
    // ═══════════════════════════════════════════════════════════════════════

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O failed while exporting
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn index_suffix(index: &Option<u32>) -> String {
    match index {
        Some(n) => format!(" for index {}", n),
        None => String::new(),
    }
}

impl RpsError {
    /// Returns true if the caller can continue by excluding the offending index
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RpsError::ProjectionPole { .. } | RpsError::NonFiniteInput { .. }
        )
    }

    /// Returns true if this error indicates broken curated data
    pub fn is_fatal(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }

    /// Returns the error category for grouping
    pub fn category(&self) -> ErrorCategory {
        match self {
            RpsError::ProjectionPole { .. } | RpsError::NonFiniteInput { .. } => {
                ErrorCategory::Domain
            }

            RpsError::VertexCountMismatch { .. }
            | RpsError::CoincidentVertices { .. }
            | RpsError::IrregularEdges { .. }
            | RpsError::IndexOutOfRange { .. } => ErrorCategory::Configuration,

            RpsError::UnknownSolid { .. } | RpsError::CsvParse { .. } => ErrorCategory::Input,

            RpsError::Json(_) | RpsError::Io(_) => ErrorCategory::External,
        }
    }

    /// Returns the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            RpsError::ProjectionPole { .. } => "PROJECTION_POLE",
            RpsError::NonFiniteInput { .. } => "NON_FINITE_INPUT",
            RpsError::VertexCountMismatch { .. } => "VERTEX_COUNT_MISMATCH",
            RpsError::CoincidentVertices { .. } => "COINCIDENT_VERTICES",
            RpsError::IrregularEdges { .. } => "IRREGULAR_EDGES",
            RpsError::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            RpsError::UnknownSolid { .. } => "UNKNOWN_SOLID",
            RpsError::CsvParse { .. } => "CSV_PARSE_ERROR",
            RpsError::Json(_) => "JSON_ERROR",
            RpsError::Io(_) => "IO_ERROR",
        }
    }

    /// Process exit code for command-line front ends
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 2,
            ErrorCategory::Domain => 3,
            ErrorCategory::Configuration => 70,
            ErrorCategory::External => 74,
        }
    }
}
