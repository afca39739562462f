//! # Input/Output for protrans.
//!
//! File-backed implementations of the [protrans_core::SequenceSource] and
//! [protrans_core::SequenceSink] seams. Paths ending in `.gz` are read and
//! written gzip compressed, and `-` stands for stdin or stdout.
//!
pub mod consts;
pub mod error;
pub mod sink;
pub mod source;

// re-expose core functions
pub use consts::*;
pub use error::*;
pub use sink::*;
pub use source::*;
