///
/// Outcome of looking a codon up in a [crate::table::CodonTable].
///
/// `Stop` and `Unknown` are kept apart so callers can decide whether an
/// unrecognized codon ends translation, fails it, or is marked and skipped.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A one-letter amino acid code.
    Residue(u8),
    /// A termination codon.
    Stop,
    /// A codon outside the table's alphabet, or a partial codon.
    Unknown,
}

