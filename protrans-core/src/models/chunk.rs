use std::fmt::{self, Display};

///
/// Chunk struct, one fixed-width window over a sequence.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub struct Chunk<'a> {
    pub index: usize,
    pub symbols: &'a [u8],
}

impl Chunk<'_> {
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(self.symbols).into_owned()
    }
}

impl Display for Chunk<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

///
/// ChunkSet struct, the ordered chunks covering a whole sequence.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSet<'a> {
    pub chunks: Vec<Chunk<'a>>,
}

impl<'a> ChunkSet<'a> {
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chunk<'a>> {
        self.chunks.iter()
    }

    pub fn last(&self) -> Option<&Chunk<'a>> {
        self.chunks.last()
    }

    ///
    /// Concatenate all chunks back into one buffer.
    ///
    pub fn join(&self) -> Vec<u8> {
        self.chunks
            .iter()
            .flat_map(|c| c.symbols.iter().copied())
            .collect()
    }
}

impl<'a> IntoIterator for &'a ChunkSet<'a> {
    type Item = &'a Chunk<'a>;
    type IntoIter = std::slice::Iter<'a, Chunk<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}
