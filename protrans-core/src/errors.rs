use std::fmt::Display;

use thiserror::Error;

///
/// Coarse classification of a [PipelineError], stable across error messages.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidInput,
    SourceUnavailable,
    SinkUnavailable,
    AllocationFailure,
    UnknownCodon,
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Can't read sequence from {identifier}: {reason}")]
    SourceUnavailable { identifier: String, reason: String },

    #[error("Can't write protein to {identifier}: {reason}")]
    SinkUnavailable { identifier: String, reason: String },

    #[error("Unable to allocate {requested} bytes for the {buffer} buffer")]
    AllocationFailure { buffer: &'static str, requested: usize },

    #[error("Unrecognized codon {codon:?} at codon index {index}")]
    UnknownCodon { index: usize, codon: String },
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            PipelineError::InvalidInput(_) => ErrorKind::InvalidInput,
            PipelineError::SourceUnavailable { .. } => ErrorKind::SourceUnavailable,
            PipelineError::SinkUnavailable { .. } => ErrorKind::SinkUnavailable,
            PipelineError::AllocationFailure { .. } => ErrorKind::AllocationFailure,
            PipelineError::UnknownCodon { .. } => ErrorKind::UnknownCodon,
        }
    }

    pub fn source_unavailable(identifier: impl Into<String>, reason: impl Display) -> Self {
        PipelineError::SourceUnavailable {
            identifier: identifier.into(),
            reason: reason.to_string(),
        }
    }

    pub fn sink_unavailable(identifier: impl Into<String>, reason: impl Display) -> Self {
        PipelineError::SinkUnavailable {
            identifier: identifier.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for protrans-core operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

///
/// Reserve exactly `additional` slots in `buf`, reporting failure as
/// [PipelineError::AllocationFailure] instead of aborting.
///
pub(crate) fn reserve_exact<T>(
    buf: &mut Vec<T>,
    additional: usize,
    buffer: &'static str,
) -> Result<()> {
    buf.try_reserve_exact(additional)
        .map_err(|_| PipelineError::AllocationFailure {
            buffer,
            requested: additional.saturating_mul(std::mem::size_of::<T>()),
        })
}
