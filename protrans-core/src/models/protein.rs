use std::fmt::{self, Display};

use crate::errors::{Result, reserve_exact};

///
/// Why translation stopped consuming codons.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every chunk was translated.
    Exhausted,
    /// A termination codon was reached at this codon index.
    StopCodon(usize),
    /// An unrecognized codon at this codon index ended translation.
    UnknownCodon(usize),
}

impl Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Exhausted => write!(f, "end of sequence"),
            StopReason::StopCodon(i) => write!(f, "stop codon at index {}", i),
            StopReason::UnknownCodon(i) => write!(f, "unrecognized codon at index {}", i),
        }
    }
}

///
/// Protein struct, the translated residues of one pipeline run.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Protein {
    residues: Vec<u8>,
    stop: StopReason,
}

impl Protein {
    ///
    /// An empty protein able to hold `capacity` residues without regrowing.
    ///
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self> {
        let mut residues = Vec::new();
        reserve_exact(&mut residues, capacity, "protein")?;
        Ok(Protein {
            residues,
            stop: StopReason::Exhausted,
        })
    }

    pub(crate) fn push(&mut self, residue: u8) {
        self.residues.push(residue);
    }

    pub(crate) fn finish(&mut self, stop: StopReason) {
        self.stop = stop;
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.residues
    }

    pub fn stop_reason(&self) -> StopReason {
        self.stop
    }

    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.residues).into_owned()
    }
}

impl Display for Protein {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
