//! Codon lookup tables.
//!
//! The translator only needs something implementing [CodonTable]. Built-in
//! NCBI genetic codes are provided by [GeneticCode]; any closure of type
//! `Fn(&[u8]) -> Symbol` works as well.
use std::fmt::{self, Display};

use crate::errors::{PipelineError, Result};
use crate::models::Symbol;

pub trait CodonTable {
    ///
    /// Translate one codon.
    ///
    /// Must be total: anything the table does not recognize, including a
    /// codon of the wrong length, is [Symbol::Unknown].
    fn lookup(&self, codon: &[u8]) -> Symbol;

    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> CodonTable for F
where
    F: Fn(&[u8]) -> Symbol,
{
    fn lookup(&self, codon: &[u8]) -> Symbol {
        self(codon)
    }
}

// 64 residues per table in TCAG order over the three codon positions,
// '*' marks termination codons.
const TABLE_1: &[u8; 64] = b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";
const TABLE_2: &[u8; 64] = b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG";
const TABLE_3: &[u8; 64] = b"FFLLSSSSYY**CCWWTTTTPPPPHHQQRRRRIIMMTTTTNNKKSSRRVVVVAAAADDEEGGGG";
const TABLE_4: &[u8; 64] = b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";
const TABLE_5: &[u8; 64] = b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSSSVVVVAAAADDEEGGGG";
const TABLE_6: &[u8; 64] = b"FFLLSSSSYYQQCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";
const TABLE_11: &[u8; 64] = b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

const STOP: u8 = b'*';

/// NCBI table ids with a built-in [GeneticCode].
pub const SUPPORTED_TABLES: [u8; 7] = [1, 2, 3, 4, 5, 6, 11];

///
/// One NCBI genetic code.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneticCode {
    id: u8,
    name: &'static str,
    residues: &'static [u8; 64],
}

impl GeneticCode {
    ///
    /// The standard code (NCBI table 1).
    ///
    pub fn standard() -> Self {
        GeneticCode {
            id: 1,
            name: "Standard",
            residues: TABLE_1,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        let (name, residues) = match id {
            1 => ("Standard", TABLE_1),
            2 => ("Vertebrate Mitochondrial", TABLE_2),
            3 => ("Yeast Mitochondrial", TABLE_3),
            4 => ("Mold, Protozoan, and Coelenterate Mitochondrial", TABLE_4),
            5 => ("Invertebrate Mitochondrial", TABLE_5),
            6 => ("Ciliate, Dasycladacean and Hexamita Nuclear", TABLE_6),
            11 => ("Bacterial, Archaeal and Plant Plastid", TABLE_11),
            _ => return None,
        };
        Some(GeneticCode { id, name, residues })
    }

    pub fn id(&self) -> u8 {
        self.id
    }
}

impl TryFrom<u8> for GeneticCode {
    type Error = PipelineError;

    fn try_from(value: u8) -> Result<Self> {
        GeneticCode::from_id(value).ok_or_else(|| {
            PipelineError::InvalidArgument(format!(
                "unsupported genetic code {}, expected one of {:?}",
                value, SUPPORTED_TABLES
            ))
        })
    }
}

impl Default for GeneticCode {
    fn default() -> Self {
        GeneticCode::standard()
    }
}

impl Display for GeneticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (table {})", self.name, self.id)
    }
}

fn base_index(base: u8) -> Option<usize> {
    match base {
        b'T' | b'U' => Some(0),
        b'C' => Some(1),
        b'A' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}

fn codon_index(codon: &[u8]) -> Option<usize> {
    match codon {
        [b1, b2, b3] => Some(base_index(*b1)? * 16 + base_index(*b2)? * 4 + base_index(*b3)?),
        _ => None,
    }
}

impl CodonTable for GeneticCode {
    fn lookup(&self, codon: &[u8]) -> Symbol {
        match codon_index(codon).map(|i| self.residues[i]) {
            Some(STOP) => Symbol::Stop,
            Some(aa) => Symbol::Residue(aa),
            None => Symbol::Unknown,
        }
    }

    fn name(&self) -> &str {
        self.name
    }
}
