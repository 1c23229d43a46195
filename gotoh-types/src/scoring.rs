//! This module contains the `Scoring` model for local alignment.

use crate::{Base, Score};
use serde::{Deserialize, Serialize};

/// Scoring for local alignment with affine gap penalties.
///
/// All four values are added to a running score, so penalties are negative.
/// A gap of length `l` contributes `gap_open + (l - 1) * gap_extend`. The
/// model imposes no sign constraint; callers that want biologically sound
/// results pass a positive match reward and negative penalties.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scoring {
    pub match_score: Score,
    pub mismatch: Score,
    pub gap_open: Score,
    pub gap_extend: Score,
}

impl Scoring {
    pub fn new(match_score: Score, mismatch: Score, gap_open: Score, gap_extend: Score) -> Self {
        Self {
            match_score,
            mismatch,
            gap_open,
            gap_extend,
        }
    }

    /// Score for aligning symbol `a` against symbol `b`.
    #[inline]
    pub fn substitution(&self, a: Base, b: Base) -> Score {
        if a == b {
            self.match_score
        } else {
            self.mismatch
        }
    }
}

impl Default for Scoring {
    fn default() -> Self {
        // The sample parameter file shipped with the tool.
        Self::new(1., -1., -2., -1.)
    }
}
