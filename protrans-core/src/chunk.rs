//! Fixed-width partitioning of a sequence into codons.
use crate::errors::{PipelineError, Result, reserve_exact};
use crate::models::{Chunk, ChunkSet};

/// Width of a codon in nucleotides.
pub const CODON_WIDTH: usize = 3;

///
/// Number of chunks `chunk` produces for a sequence of `len` symbols.
///
pub fn chunk_count(len: usize, width: usize) -> usize {
    len.div_ceil(width)
}

///
/// Width of the final chunk: the remainder, or a full `width` when the
/// sequence divides evenly.
///
pub fn last_chunk_width(len: usize, width: usize) -> usize {
    match len % width {
        0 => width.min(len),
        rem => rem,
    }
}

///
/// Split `sequence` into contiguous, non-overlapping chunks of `width` symbols.
///
/// Every chunk but the last is exactly `width` long. A sequence no longer than
/// `width` comes back as a single chunk of its own length, and an empty
/// sequence yields no chunks at all.
///
/// # Arguments
/// - sequence: symbols to split
/// - width: target chunk width, at least 1
pub fn chunk(sequence: &[u8], width: usize) -> Result<ChunkSet<'_>> {
    if width == 0 {
        return Err(PipelineError::InvalidArgument(
            "chunk width must be at least 1".to_string(),
        ));
    }

    let mut chunks = Vec::new();

    if sequence.is_empty() {
        return Ok(ChunkSet { chunks });
    }

    if sequence.len() <= width {
        reserve_exact(&mut chunks, 1, "chunk")?;
        chunks.push(Chunk {
            index: 0,
            symbols: sequence,
        });
        return Ok(ChunkSet { chunks });
    }

    let count = chunk_count(sequence.len(), width);
    reserve_exact(&mut chunks, count, "chunk")?;

    for index in 0..count - 1 {
        let start = index * width;
        chunks.push(Chunk {
            index,
            symbols: &sequence[start..start + width],
        });
    }

    let start = (count - 1) * width;
    let end = start + last_chunk_width(sequence.len(), width);
    chunks.push(Chunk {
        index: count - 1,
        symbols: &sequence[start..end],
    });

    Ok(ChunkSet { chunks })
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::errors::ErrorKind;

    fn lengths(set: &ChunkSet) -> Vec<usize> {
        set.iter().map(|c| c.len()).collect()
    }

    #[rstest]
    fn test_codon_split() {
        let set = chunk(b"AUGAAAUAA", CODON_WIDTH).unwrap();
        let codons: Vec<String> = set.iter().map(|c| c.as_string()).collect();
        assert_eq!(codons, vec!["AUG", "AAA", "UAA"]);
    }

    #[rstest]
    #[case(7, 3, vec![3, 3, 1])]
    #[case(9, 3, vec![3, 3, 3])]
    #[case(8, 3, vec![3, 3, 2])]
    #[case(2, 3, vec![2])]
    #[case(3, 3, vec![3])]
    #[case(5, 1, vec![1, 1, 1, 1, 1])]
    #[case(4, 10, vec![4])]
    fn test_chunk_lengths(#[case] len: usize, #[case] width: usize, #[case] expected: Vec<usize>) {
        let seq = vec![b'A'; len];
        let set = chunk(&seq, width).unwrap();
        assert_eq!(lengths(&set), expected);
    }

    #[rstest]
    fn test_even_split_keeps_full_last_chunk() {
        let seq = b"ACGUACGUACGU";
        let set = chunk(seq, 4).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.last().unwrap().len(), 4);
    }

    #[rstest]
    fn test_empty_sequence_has_no_chunks() {
        let set = chunk(b"", CODON_WIDTH).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.join(), Vec::<u8>::new());
    }

    #[rstest]
    fn test_zero_width_is_rejected() {
        let err = chunk(b"ACG", 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[rstest]
    fn test_indexes_are_positional() {
        let set = chunk(b"ACGUACG", 2).unwrap();
        let indexes: Vec<usize> = set.iter().map(|c| c.index).collect();
        assert_eq!(indexes, vec![0, 1, 2, 3]);
    }

    #[rstest]
    fn test_join_and_count_over_many_shapes() {
        let source = b"ACGUUGCAAUGCCGAUAGCUAGGCAUUACG";
        for len in 0..source.len() {
            let seq = &source[..len];
            for width in 1..=len + 2 {
                let set = chunk(seq, width).unwrap();

                assert_eq!(set.join(), seq.to_vec(), "len {} width {}", len, width);
                assert_eq!(set.iter().map(|c| c.len()).sum::<usize>(), len);

                let expected = if len == 0 { 0 } else { chunk_count(len, width).max(1) };
                assert_eq!(set.len(), expected, "len {} width {}", len, width);

                for c in set.iter().take(set.len().saturating_sub(1)) {
                    assert_eq!(c.len(), width);
                }
            }
        }
    }
}
