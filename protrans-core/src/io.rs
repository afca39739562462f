//! Collaborator seams for reading sequences and writing proteins.
//!
//! Concrete file, gzip and stdio implementations live in `protrans-io`.
use crate::errors::Result;

pub trait SequenceSource {
    ///
    /// Read the whole content behind `identifier`.
    ///
    /// Failures are reported as [crate::errors::PipelineError::SourceUnavailable].
    fn read_all(&self, identifier: &str) -> Result<Vec<u8>>;
}

pub trait SequenceSink {
    ///
    /// Replace whatever is stored at `identifier` with `content`.
    ///
    /// Failures are reported as [crate::errors::PipelineError::SinkUnavailable].
    fn write_all(&self, identifier: &str, content: &[u8]) -> Result<()>;
}
