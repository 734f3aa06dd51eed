//! Input-shape errors.
//!
//! These are the only fatal conditions in an analysis. Too few contact events,
//! empty feet or missing runs are reported through [`crate::metrics::Computed`]
//! instead.

use thiserror::Error;

/// Errors that abort an analysis before any metric is computed.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The recording has no frames at all
    #[error("recording contains no frames")]
    EmptyRecording,

    /// A pressure matrix with zero rows or zero columns
    #[error("frame {index} has an empty pressure matrix")]
    EmptyMatrix { index: usize },

    /// Rows of one pressure matrix have different lengths
    #[error("frame {index}: row {row} has {len} columns, expected {expected}")]
    RaggedMatrix {
        index: usize,
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A frame whose grid differs from the first frame's grid
    #[error("frame {index} is {rows}x{cols}, expected {expected_rows}x{expected_cols}")]
    DimensionMismatch {
        index: usize,
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },

    /// Negative, NaN or infinite pressure reading
    #[error("frame {index} contains invalid reading {value}")]
    InvalidReading { index: usize, value: f64 },

    /// Timestamp string that does not fit the expected ISO-8601 shape
    #[error("invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    /// Timestamps must be non-decreasing
    #[error("timestamp of frame {index} is earlier than the frame before it")]
    NonMonotonicTimestamps { index: usize },

    /// Invalid analysis settings
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for the analysis core.
pub type Result<T> = std::result::Result<T, AnalysisError>;
