//! Error types for pixgrid-core
//!
//! Every failure in this crate is an invalid-argument condition: a missing
//! or empty input, a malformed sample matrix, or a coordinate outside the
//! grid. Errors are reported at the violated precondition and never leave a
//! partially built value behind.

use thiserror::Error;

/// pixgrid error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Absent or empty input (label, sample matrix, or bitmap)
    #[error("null or empty input: {0}")]
    NullInput(&'static str),

    /// Invalid grid dimensions
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Sample matrix rows differ in length
    #[error("jagged sample matrix: row {row} has {actual} samples, expected {expected}")]
    JaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Flat sample buffer does not match the declared dimensions
    #[error("sample count mismatch: expected {expected}, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },

    /// Pixel coordinate outside the grid
    #[error("pixel coordinate ({x}, {y}) out of bounds for {width}x{height} grid")]
    IndexOutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    /// Channel value outside [0, 255]
    #[error("{channel} channel value {value} out of range [0, 255]")]
    ChannelOutOfRange { channel: &'static str, value: i32 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl Error {
    /// Whether this error is an invalid-argument condition.
    ///
    /// Always `true`: the crate has no other failure kind. Callers that
    /// only care about the category can match on this instead of the
    /// individual variants.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::NullInput(_)
                | Error::InvalidDimension { .. }
                | Error::JaggedRows { .. }
                | Error::SampleCountMismatch { .. }
                | Error::IndexOutOfBounds { .. }
                | Error::ChannelOutOfRange { .. }
                | Error::InvalidParameter(_)
        )
    }
}

/// Result type alias for pixgrid operations
pub type Result<T> = std::result::Result<T, Error>;
