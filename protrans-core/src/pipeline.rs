//! Load, normalize, chunk, translate and emit as one run.
//!
//! A [TranslationPipeline] walks through
//! `Pending → Loaded → Normalized → Chunked → Translating → Done`. Any error
//! moves it to `Failed`. Both `Done` and `Failed` are terminal; a new run
//! needs a new pipeline.
use std::fmt::{self, Display};

use log::{debug, info};

use crate::chunk::{CODON_WIDTH, chunk};
use crate::errors::{PipelineError, Result};
use crate::io::{SequenceSink, SequenceSource};
use crate::models::{Protein, Sequence};
use crate::normalize::{NormalizeRules, normalize};
use crate::table::CodonTable;
use crate::translate::{CodonTranslator, UnknownCodonPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Pending,
    Loaded,
    Normalized,
    Chunked,
    Translating,
    Done,
    Failed,
}

impl PipelineState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Failed)
    }
}

impl Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineState::Pending => "pending",
            PipelineState::Loaded => "loaded",
            PipelineState::Normalized => "normalized",
            PipelineState::Chunked => "chunked",
            PipelineState::Translating => "translating",
            PipelineState::Done => "done",
            PipelineState::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

pub struct TranslationPipeline<'t, T: CodonTable + ?Sized> {
    translator: CodonTranslator<'t, T>,
    rules: NormalizeRules,
    state: PipelineState,
    sequence: Option<Sequence>,
    protein: Option<Protein>,
}

impl<'t, T: CodonTable + ?Sized> TranslationPipeline<'t, T> {
    ///
    /// A pipeline using `table` with the default normalization rules and
    /// unknown codon policy.
    ///
    pub fn new(table: &'t T) -> Self {
        TranslationPipeline {
            translator: CodonTranslator::new(table, UnknownCodonPolicy::default()),
            rules: NormalizeRules::default(),
            state: PipelineState::Pending,
            sequence: None,
            protein: None,
        }
    }

    pub fn with_policy(mut self, policy: UnknownCodonPolicy) -> Self {
        self.translator = CodonTranslator::new(self.translator.table(), policy);
        self
    }

    pub fn with_rules(mut self, rules: NormalizeRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn sequence(&self) -> Option<&Sequence> {
        self.sequence.as_ref()
    }

    pub fn protein(&self) -> Option<&Protein> {
        self.protein.as_ref()
    }

    fn expect_state(&self, expected: PipelineState, stage: &str) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(PipelineError::InvalidInput(format!(
                "cannot {} a pipeline that is {}",
                stage, self.state
            )))
        }
    }

    fn enter(&mut self, next: PipelineState) {
        debug!("pipeline {} -> {}", self.state, next);
        self.state = next;
    }

    fn settle<R>(&mut self, result: Result<R>) -> Result<R> {
        if result.is_err() {
            self.enter(PipelineState::Failed);
        }
        result
    }

    ///
    /// Read the raw sequence from `source`.
    ///
    pub fn load<S: SequenceSource + ?Sized>(&mut self, source: &S, identifier: &str) -> Result<()> {
        let result = self.try_load(source, identifier);
        self.settle(result)
    }

    fn try_load<S: SequenceSource + ?Sized>(&mut self, source: &S, identifier: &str) -> Result<()> {
        self.expect_state(PipelineState::Pending, "load")?;
        let content = source.read_all(identifier)?;
        debug!("read {} bytes from {}", content.len(), identifier);
        self.sequence = Some(Sequence::from(content));
        self.enter(PipelineState::Loaded);
        Ok(())
    }

    ///
    /// Apply the normalization rules to the loaded sequence.
    ///
    pub fn normalize(&mut self) -> Result<()> {
        let result = self.try_normalize();
        self.settle(result)
    }

    fn try_normalize(&mut self) -> Result<()> {
        self.expect_state(PipelineState::Loaded, "normalize")?;
        let sequence = self
            .sequence
            .as_mut()
            .ok_or_else(|| PipelineError::InvalidInput("no sequence loaded".to_string()))?;
        normalize(sequence.as_mut_vec(), &self.rules)?;
        self.enter(PipelineState::Normalized);
        Ok(())
    }

    fn normalized_sequence(&self) -> Result<&Sequence> {
        self.sequence
            .as_ref()
            .ok_or_else(|| PipelineError::InvalidInput("no sequence loaded".to_string()))
    }

    ///
    /// Split the normalized sequence into codons.
    ///
    /// Chunks are views into the sequence and are not kept; [Self::translate]
    /// splits it again the same way.
    ///
    pub fn chunk(&mut self) -> Result<()> {
        let result = self.try_chunk();
        self.settle(result)
    }

    fn try_chunk(&mut self) -> Result<()> {
        self.expect_state(PipelineState::Normalized, "chunk")?;
        let chunks = chunk(self.normalized_sequence()?.as_bytes(), CODON_WIDTH)?;
        debug!("{} codons", chunks.len());
        self.enter(PipelineState::Chunked);
        Ok(())
    }

    ///
    /// Translate the codons up to the first stop.
    ///
    pub fn translate(&mut self) -> Result<()> {
        let result = self.try_translate();
        self.settle(result)
    }

    fn try_translate(&mut self) -> Result<()> {
        self.expect_state(PipelineState::Chunked, "translate")?;
        self.enter(PipelineState::Translating);

        let chunks = chunk(self.normalized_sequence()?.as_bytes(), CODON_WIDTH)?;
        let protein = self.translator.translate_all(&chunks)?;
        info!(
            "{} codons in, {} residues out ({})",
            chunks.len(),
            protein.len(),
            protein.stop_reason()
        );

        self.protein = Some(protein);
        Ok(())
    }

    ///
    /// Write the translated protein to `sink`.
    ///
    pub fn emit<K: SequenceSink + ?Sized>(&mut self, sink: &K, identifier: &str) -> Result<()> {
        let result = self.try_emit(sink, identifier);
        self.settle(result)
    }

    fn try_emit<K: SequenceSink + ?Sized>(&mut self, sink: &K, identifier: &str) -> Result<()> {
        self.expect_state(PipelineState::Translating, "emit")?;
        let protein = self
            .protein
            .as_ref()
            .ok_or_else(|| PipelineError::InvalidInput("nothing translated".to_string()))?;
        sink.write_all(identifier, protein.as_bytes())?;
        debug!("wrote {} residues to {}", protein.len(), identifier);
        self.enter(PipelineState::Done);
        Ok(())
    }

    ///
    /// Run every stage, from reading `input` to writing `output`.
    ///
    /// # Arguments
    /// - source: where the nucleotide sequence is read from
    /// - input: identifier handed to the source
    /// - sink: where the protein is written
    /// - output: identifier handed to the sink
    ///
    /// # Returns
    /// - the emitted protein
    pub fn run<S, K>(mut self, source: &S, input: &str, sink: &K, output: &str) -> Result<Protein>
    where
        S: SequenceSource + ?Sized,
        K: SequenceSink + ?Sized,
    {
        self.load(source, input)?;
        self.normalize()?;
        self.chunk()?;
        self.translate()?;
        self.emit(sink, output)?;

        self.protein
            .take()
            .ok_or_else(|| PipelineError::InvalidInput("nothing translated".to_string()))
    }
}

///
/// Normalize, chunk and translate in-memory content without any collaborators.
///
pub fn translate_sequence<T: CodonTable + ?Sized>(
    content: &[u8],
    table: &T,
    policy: UnknownCodonPolicy,
    rules: &NormalizeRules,
) -> Result<Protein> {
    let mut sequence = Sequence::from_content(content)?;
    normalize(sequence.as_mut_vec(), rules)?;
    let chunks = chunk(sequence.as_bytes(), CODON_WIDTH)?;
    CodonTranslator::new(table, policy).translate_all(&chunks)
}
