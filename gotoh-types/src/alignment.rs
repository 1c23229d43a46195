use crate::{to_string, Score, Sequence, GAP};
use std::fmt;

/// The result of a local alignment: two equal-length gapped rows over the
/// input alphabet plus `-`, and the score of the aligned region.
///
/// Stripping the gaps from `a` yields a contiguous substring of the first
/// input sequence, and likewise for `b`. No position holds a gap in both
/// rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Alignment {
    pub a: Sequence,
    pub b: Sequence,
    pub score: Score,
}

impl Alignment {
    /// Number of columns in the alignment.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.a.len(), self.b.len());
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Number of columns where both rows hold the same symbol.
    pub fn matches(&self) -> usize {
        std::iter::zip(&self.a, &self.b)
            .filter(|(x, y)| x == y && **x != GAP)
            .count()
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", to_string(&self.a))?;
        writeln!(f, "{}", to_string(&self.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_skip_gaps_and_mismatches() {
        let alignment = Alignment {
            a: b"AC-GT".to_vec(),
            b: b"ACCGA".to_vec(),
            score: 4.,
        };
        assert_eq!(alignment.len(), 5);
        assert_eq!(alignment.matches(), 3);
    }

    #[test]
    fn display_renders_one_row_per_line() {
        let alignment = Alignment {
            a: b"ACGT".to_vec(),
            b: b"AC-T".to_vec(),
            score: 0.,
        };
        assert_eq!(alignment.to_string(), "ACGT\nAC-T\n");
    }
}
