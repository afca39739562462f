use std::io;
use thiserror::Error;

use protrans_core::PipelineError;

/// Error type for protrans-io operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// IO error occurred during file operations.
    #[error("{0}")]
    Io(#[from] io::Error),

    /// Input path does not exist.
    #[error("file does not exist")]
    NotFound,

    /// Failed to create parent directories for file.
    #[error("Failed to create parent directories for file: {0}")]
    ParentDirectoryCreation(io::Error),

    /// Content could not be buffered in memory.
    #[error("Unable to allocate {0} bytes for file content")]
    Allocation(usize),
}

/// Result type alias for protrans-io operations.
pub type Result<T> = std::result::Result<T, IoError>;

impl IoError {
    ///
    /// Map a read failure to the pipeline's error kinds.
    ///
    pub fn into_source_error(self, identifier: &str) -> PipelineError {
        match self {
            IoError::Allocation(requested) => PipelineError::AllocationFailure {
                buffer: "sequence",
                requested,
            },
            other => PipelineError::source_unavailable(identifier, other),
        }
    }

    ///
    /// Map a write failure to the pipeline's error kinds.
    ///
    pub fn into_sink_error(self, identifier: &str) -> PipelineError {
        PipelineError::sink_unavailable(identifier, self)
    }
}
