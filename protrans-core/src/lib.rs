//! # Nucleotide to protein translation.
//!
//! `protrans-core` holds the sequence-processing pipeline: normalization of raw
//! nucleotide text, fixed-width codon chunking, and codon translation against a
//! genetic code with early termination at the first stop codon.
//!
//! File handling lives in `protrans-io`; this crate only sees the
//! [io::SequenceSource] and [io::SequenceSink] seams.
//!
//! ```
//! use protrans_core::{GeneticCode, NormalizeRules, UnknownCodonPolicy, translate_sequence};
//!
//! let protein = translate_sequence(
//!     b"ATG AAA TAA",
//!     &GeneticCode::standard(),
//!     UnknownCodonPolicy::Stop,
//!     &NormalizeRules::default(),
//! )
//! .unwrap();
//! assert_eq!(protein.as_string(), "MK");
//! ```
pub mod chunk;
pub mod config;
pub mod errors;
pub mod io;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod table;
pub mod translate;

// re-expose core functions
pub use chunk::{CODON_WIDTH, chunk};
pub use config::{ConfigError, TranslateConfig};
pub use errors::{ErrorKind, PipelineError, Result};
pub use io::{SequenceSink, SequenceSource};
pub use models::{Chunk, ChunkSet, Protein, Sequence, StopReason, Symbol};
pub use normalize::{NormalizeRules, Substitution, normalize, remove, substitute};
pub use pipeline::{PipelineState, TranslationPipeline, translate_sequence};
pub use table::{CodonTable, GeneticCode};
pub use translate::{CodonTranslator, UnknownCodonPolicy};
