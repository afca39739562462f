use std::fmt::{self, Display};

use crate::errors::{Result, reserve_exact};

///
/// Sequence struct, the owned nucleotide buffer of one pipeline run.
///
/// Symbols are stored as raw ASCII bytes, the way they arrive from the source.
/// Normalization rewrites the buffer in place.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Default)]
pub struct Sequence {
    bases: Vec<u8>,
}

impl Sequence {
    ///
    /// Copy raw content into a buffer sized exactly to it.
    ///
    pub fn from_content(content: &[u8]) -> Result<Self> {
        let mut bases = Vec::new();
        reserve_exact(&mut bases, content.len(), "sequence")?;
        bases.extend_from_slice(content);
        Ok(Sequence { bases })
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bases
    }

    pub fn as_mut_vec(&mut self) -> &mut Vec<u8> {
        &mut self.bases
    }
}

impl From<Vec<u8>> for Sequence {
    fn from(bases: Vec<u8>) -> Self {
        Sequence { bases }
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bases))
    }
}
