//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while preparing regression fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to build a fixture grid
    #[error("failed to build fixture '{name}': {source}")]
    Fixture {
        name: String,
        #[source]
        source: pixgrid_core::Error,
    },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
