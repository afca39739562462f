//! Codon to residue translation with early termination.
use std::fmt::{self, Display};
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{PipelineError, Result};
use crate::models::{Chunk, ChunkSet, Protein, StopReason, Symbol};
use crate::table::CodonTable;

/// Residue written for an unrecognized codon under [UnknownCodonPolicy::Mark].
pub const UNKNOWN_RESIDUE: u8 = b'X';

///
/// What the translation loop does when the table returns [Symbol::Unknown].
///
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnknownCodonPolicy {
    /// End translation, keeping the residues so far.
    #[default]
    Stop,
    /// Fail the run with [PipelineError::UnknownCodon].
    Error,
    /// Emit [UNKNOWN_RESIDUE] and keep going.
    Mark,
}

impl Display for UnknownCodonPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownCodonPolicy::Stop => write!(f, "stop"),
            UnknownCodonPolicy::Error => write!(f, "error"),
            UnknownCodonPolicy::Mark => write!(f, "mark"),
        }
    }
}

impl FromStr for UnknownCodonPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "stop" => Ok(UnknownCodonPolicy::Stop),
            "error" => Ok(UnknownCodonPolicy::Error),
            "mark" => Ok(UnknownCodonPolicy::Mark),
            _ => Err(format!(
                "Invalid unknown codon policy: {} (expected stop, error or mark)",
                s
            )),
        }
    }
}

pub struct CodonTranslator<'t, T: CodonTable + ?Sized> {
    table: &'t T,
    policy: UnknownCodonPolicy,
}

impl<'t, T: CodonTable + ?Sized> CodonTranslator<'t, T> {
    pub fn new(table: &'t T, policy: UnknownCodonPolicy) -> Self {
        CodonTranslator { table, policy }
    }

    pub fn table(&self) -> &'t T {
        self.table
    }

    ///
    /// Look one chunk up. No width check happens here; a short chunk is
    /// whatever the table says it is.
    ///
    pub fn translate(&self, chunk: &Chunk) -> Symbol {
        self.table.lookup(chunk.symbols)
    }

    ///
    /// Translate chunks in order until the first stop.
    ///
    /// Chunks after a stop are never looked at.
    ///
    pub fn translate_all(&self, chunks: &ChunkSet) -> Result<Protein> {
        let mut protein = Protein::with_capacity(chunks.len())?;

        for chunk in chunks.iter() {
            match self.translate(chunk) {
                Symbol::Residue(aa) => protein.push(aa),
                Symbol::Stop => {
                    debug!("stop codon {} at index {}", chunk, chunk.index);
                    protein.finish(StopReason::StopCodon(chunk.index));
                    return Ok(protein);
                }
                Symbol::Unknown => match self.policy {
                    UnknownCodonPolicy::Stop => {
                        debug!("unrecognized codon {} at index {}", chunk, chunk.index);
                        protein.finish(StopReason::UnknownCodon(chunk.index));
                        return Ok(protein);
                    }
                    UnknownCodonPolicy::Error => {
                        return Err(PipelineError::UnknownCodon {
                            index: chunk.index,
                            codon: chunk.as_string(),
                        });
                    }
                    UnknownCodonPolicy::Mark => protein.push(UNKNOWN_RESIDUE),
                },
            }
        }

        protein.finish(StopReason::Exhausted);
        Ok(protein)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::chunk::{CODON_WIDTH, chunk};
    use crate::errors::ErrorKind;
    use crate::table::GeneticCode;

    fn toy_table(codon: &[u8]) -> Symbol {
        match codon {
            b"AUG" => Symbol::Residue(b'M'),
            b"AAA" => Symbol::Residue(b'K'),
            b"GGG" => Symbol::Residue(b'G'),
            b"UAA" => Symbol::Stop,
            _ => Symbol::Unknown,
        }
    }

    fn run(seq: &[u8], policy: UnknownCodonPolicy) -> Result<Protein> {
        let chunks = chunk(seq, CODON_WIDTH).unwrap();
        CodonTranslator::new(&toy_table, policy).translate_all(&chunks)
    }

    #[rstest]
    fn test_translates_until_stop() {
        let protein = run(b"AUGAAAUAA", UnknownCodonPolicy::Stop).unwrap();
        assert_eq!(protein.as_string(), "MK");
        assert_eq!(protein.stop_reason(), StopReason::StopCodon(2));
    }

    #[rstest]
    fn test_chunks_after_stop_are_ignored() {
        let protein = run(b"AUGAAAUAAGGGAUGAAA", UnknownCodonPolicy::Error).unwrap();
        assert_eq!(protein.len(), 2);
        assert_eq!(protein.as_string(), "MK");
    }

    #[rstest]
    fn test_no_stop_translates_everything() {
        let protein = run(b"AUGGGGAAA", UnknownCodonPolicy::Stop).unwrap();
        assert_eq!(protein.as_string(), "MGK");
        assert_eq!(protein.stop_reason(), StopReason::Exhausted);
    }

    #[rstest]
    fn test_empty_chunk_set() {
        let protein = run(b"", UnknownCodonPolicy::Error).unwrap();
        assert!(protein.is_empty());
        assert_eq!(protein.stop_reason(), StopReason::Exhausted);
    }

    // An unrecognized codon ends translation silently by default, the same
    // way a stop codon does. The other policies are opt-in.
    #[rstest]
    fn test_unknown_codon_stops_by_default() {
        let protein = run(b"AUGCCCAAA", UnknownCodonPolicy::default()).unwrap();
        assert_eq!(protein.as_string(), "M");
        assert_eq!(protein.stop_reason(), StopReason::UnknownCodon(1));
    }

    #[rstest]
    fn test_unknown_codon_error_policy() {
        let err = run(b"AUGCCCAAA", UnknownCodonPolicy::Error).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownCodon);
        assert_eq!(
            err.to_string(),
            "Unrecognized codon \"CCC\" at codon index 1"
        );
    }

    #[rstest]
    fn test_unknown_codon_mark_policy() {
        let protein = run(b"AUGCCCAAA", UnknownCodonPolicy::Mark).unwrap();
        assert_eq!(protein.as_string(), "MXK");
        assert_eq!(protein.stop_reason(), StopReason::Exhausted);
    }

    #[rstest]
    #[case(UnknownCodonPolicy::Stop, Some("MK"))]
    #[case(UnknownCodonPolicy::Mark, Some("MKX"))]
    #[case(UnknownCodonPolicy::Error, None)]
    fn test_trailing_partial_codon(
        #[case] policy: UnknownCodonPolicy,
        #[case] expected: Option<&str>,
    ) {
        let code = GeneticCode::standard();
        let chunks = chunk(b"AUGAAAUG", CODON_WIDTH).unwrap();
        let result = CodonTranslator::new(&code, policy).translate_all(&chunks);
        assert_eq!(result.ok().map(|p| p.as_string()), expected.map(String::from));
    }

    #[rstest]
    #[case("stop", UnknownCodonPolicy::Stop)]
    #[case("error", UnknownCodonPolicy::Error)]
    #[case("mark", UnknownCodonPolicy::Mark)]
    fn test_policy_from_str(#[case] input: &str, #[case] expected: UnknownCodonPolicy) {
        assert_eq!(input.parse::<UnknownCodonPolicy>().unwrap(), expected);
    }

    #[rstest]
    fn test_policy_from_str_rejects_garbage() {
        assert!("skip".parse::<UnknownCodonPolicy>().is_err());
    }

    #[rstest]
    #[case("stop")]
    #[case("error")]
    #[case("mark")]
    #[case("Mark")]
    #[case("STOP")]
    fn test_policy_spellings_match_config(#[case] input: &str) {
        let from_flag = input.parse::<UnknownCodonPolicy>().ok();
        let from_toml = toml::from_str::<toml::Value>(&format!("unknown = {:?}", input))
            .unwrap()
            .get("unknown")
            .cloned()
            .and_then(|v| v.try_into::<UnknownCodonPolicy>().ok());
        assert_eq!(from_flag, from_toml);
    }
}
