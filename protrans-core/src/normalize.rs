//! In-place canonicalization of raw nucleotide text.
//!
//! Normalization runs the configured substitutions first, then the removals,
//! each in the order given. The default rules turn DNA into RNA (`T` to `U`)
//! and strip spaces and line breaks.
use serde::{Deserialize, Serialize};

use crate::errors::{PipelineError, Result};

///
/// Replace every `from` byte in `buffer` with `to`.
///
/// The buffer's length is unchanged and the call never fails.
///
pub fn substitute(buffer: &mut [u8], from: u8, to: u8) {
    for byte in buffer.iter_mut() {
        if *byte == from {
            *byte = to;
        }
    }
}

///
/// Drop every `target` byte from `buffer`, keeping the order of the rest.
///
pub fn remove(buffer: &mut Vec<u8>, target: u8) {
    buffer.retain(|&b| b != target);
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    pub from: char,
    pub to: char,
}

///
/// Ordered normalization steps: all substitutions, then all removals.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct NormalizeRules {
    pub substitutions: Vec<Substitution>,
    pub removals: Vec<char>,
}

impl Default for NormalizeRules {
    fn default() -> Self {
        NormalizeRules {
            substitutions: vec![Substitution { from: 'T', to: 'U' }],
            // '\r' so CRLF files normalize the same as LF files
            removals: vec![' ', '\n', '\r'],
        }
    }
}

fn ascii_byte(c: char) -> Result<u8> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(PipelineError::InvalidArgument(format!(
            "normalization characters must be ASCII, got {:?}",
            c
        )))
    }
}

impl NormalizeRules {
    ///
    /// Check that every character can be applied to a byte buffer.
    ///
    pub fn validate(&self) -> Result<()> {
        for sub in &self.substitutions {
            ascii_byte(sub.from)?;
            ascii_byte(sub.to)?;
        }
        for &c in &self.removals {
            ascii_byte(c)?;
        }
        Ok(())
    }
}

///
/// Apply `rules` to `buffer` in place.
///
/// # Arguments
/// - buffer: raw sequence content
/// - rules: substitutions and removals to apply
///
/// # Returns
/// - `InvalidArgument` if a rule names a non-ASCII character; the buffer is
///   left untouched in that case.
pub fn normalize(buffer: &mut Vec<u8>, rules: &NormalizeRules) -> Result<()> {
    rules.validate()?;

    for sub in &rules.substitutions {
        substitute(buffer, sub.from as u8, sub.to as u8);
    }
    for &c in &rules.removals {
        remove(buffer, c as u8);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::errors::ErrorKind;

    fn count(buffer: &[u8], c: u8) -> usize {
        buffer.iter().filter(|&&b| b == c).count()
    }

    #[rstest]
    fn test_substitute_replaces_every_occurrence() {
        let mut buf = b"TTAGCT".to_vec();
        substitute(&mut buf, b'T', b'U');
        assert_eq!(buf, b"UUAGCU".to_vec());
    }

    #[rstest]
    #[case(b"ATGCATGC".as_slice())]
    #[case(b"TTTT".as_slice())]
    #[case(b"".as_slice())]
    #[case(b"AC G\nT".as_slice())]
    fn test_substitute_preserves_other_counts(#[case] input: &[u8]) {
        let mut buf = input.to_vec();
        substitute(&mut buf, b'T', b'U');

        assert_eq!(buf.len(), input.len());
        assert_eq!(count(&buf, b'T'), 0);
        assert_eq!(count(&buf, b'U'), count(input, b'T') + count(input, b'U'));
        for c in [b'A', b'C', b'G', b' ', b'\n'] {
            assert_eq!(count(&buf, c), count(input, c));
        }
    }

    #[rstest]
    #[case(b"ATG AAA TAA".as_slice(), b"ATGAAATAA".as_slice())]
    #[case(b"ACGT".as_slice(), b"ACGT".as_slice())]
    #[case(b"    ".as_slice(), b"".as_slice())]
    #[case(b" A  C ".as_slice(), b"AC".as_slice())]
    fn test_remove(#[case] input: &[u8], #[case] expected: &[u8]) {
        let mut buf = input.to_vec();
        remove(&mut buf, b' ');
        assert_eq!(buf, expected.to_vec());
    }

    #[rstest]
    fn test_remove_is_idempotent() {
        let mut once = b"A T\nG  C\n".to_vec();
        remove(&mut once, b'\n');
        let mut twice = once.clone();
        remove(&mut twice, b'\n');
        assert_eq!(once, twice);
    }

    #[rstest]
    fn test_default_rules() {
        let mut buf = b"ATG AAA\r\nTAA\n".to_vec();
        normalize(&mut buf, &NormalizeRules::default()).unwrap();
        assert_eq!(buf, b"AUGAAAUAA".to_vec());
    }

    #[rstest]
    fn test_substitution_runs_before_removal() {
        let rules = NormalizeRules {
            substitutions: vec![Substitution { from: 'N', to: ' ' }],
            removals: vec![' '],
        };
        let mut buf = b"ANNC".to_vec();
        normalize(&mut buf, &rules).unwrap();
        assert_eq!(buf, b"AC".to_vec());
    }

    #[rstest]
    fn test_non_ascii_rule_is_rejected() {
        let rules = NormalizeRules {
            substitutions: vec![Substitution { from: 'T', to: 'Ü' }],
            removals: vec![],
        };
        let mut buf = b"ATG".to_vec();
        let err = normalize(&mut buf, &rules).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(buf, b"ATG".to_vec());
    }
}
