//! Optimal local alignment with affine gap penalties: Gotoh's extension of
//! Smith-Waterman, distinguishing the cost of opening a gap from the cost of
//! extending one.
//!
//! Three score layers are filled over the `(n+1) x (m+1)` grid:
//! - `M[i][j]`: best alignment ending in a (mis)match at `(i, j)`,
//! - `Ix[i][j]`: best alignment ending in a gap in `b` (a residue of `a`
//!   consumed unmatched),
//! - `Iy[i][j]`: best alignment ending in a gap in `a`.
//!
//! Every layer is floored at 0, so an alignment restarts rather than going
//! negative. The single best cell over all layers is tracked during the fill
//! and the alignment is reconstructed by walking trace labels backward from
//! it until a zero-score cell or the grid boundary.

mod grid;


use grid::{Cell, Grid};
use gotoh_types::*;

/// Position and layer of the best score seen during the fill.
struct Best {
    score: Score,
    i: usize,
    j: usize,
    layer: Layer,
}

/// Computes the optimal local alignment of `a` and `b` under `scoring`.
///
/// A pure function of its inputs: `O(n*m)` time and space, no retained
/// state, no failure path. Inputs without any positive-scoring region (in
/// particular empty inputs) yield an empty alignment with score 0.
pub fn align(a: Seq, b: Seq, scoring: &Scoring) -> Alignment {
    let (n, m) = (a.len(), b.len());
    if n == 0 || m == 0 {
        // No interior cells; skip the fill and traceback entirely.
        return Alignment::default();
    }

    let mut lm = Grid::new(n + 1, m + 1);
    let mut lx = Grid::new(n + 1, m + 1);
    let mut ly = Grid::new(n + 1, m + 1);

    // Strict `>` below: the first cell (row-major, M before Ix before Iy)
    // to reach the maximum wins and is never displaced by a later tie. This
    // pins one deterministic traceback start even when several cells share
    // the maximum.
    let mut best = Best {
        score: 0.,
        i: 0,
        j: 0,
        layer: Layer::M,
    };

    for i in 1..=n {
        for j in 1..=m {
            let s = scoring.substitution(a[i - 1], b[j - 1]);

            let m_cell = best_candidate([
                (0., None),
                (lm[(i - 1, j - 1)].score + s, Some(Layer::M)),
                (lx[(i - 1, j - 1)].score + s, Some(Layer::Ix)),
                (ly[(i - 1, j - 1)].score + s, Some(Layer::Iy)),
            ]);
            let x_cell = best_candidate([
                (0., None),
                (lm[(i - 1, j)].score + scoring.gap_open, Some(Layer::M)),
                (lx[(i - 1, j)].score + scoring.gap_extend, Some(Layer::Ix)),
            ]);
            let y_cell = best_candidate([
                (0., None),
                (lm[(i, j - 1)].score + scoring.gap_open, Some(Layer::M)),
                (ly[(i, j - 1)].score + scoring.gap_extend, Some(Layer::Iy)),
            ]);
            lm[(i, j)] = m_cell;
            lx[(i, j)] = x_cell;
            ly[(i, j)] = y_cell;

            for (layer, score) in [
                (Layer::M, m_cell.score),
                (Layer::Ix, x_cell.score),
                (Layer::Iy, y_cell.score),
            ] {
                if score > best.score {
                    best = Best { score, i, j, layer };
                }
            }
        }
    }

    traceback(a, b, &lm, &lx, &ly, best)
}

/// Candidates earlier in the list win ties, so the comparison is strict.
/// The restart candidate `(0, None)` is always listed first.
fn best_candidate<const K: usize>(candidates: [(Score, FromLayer); K]) -> Cell {
    let (mut score, mut from) = candidates[0];
    for &(s, f) in &candidates[1..] {
        if s > score {
            (score, from) = (s, f);
        }
    }
    Cell { score, from }
}

/// Walks trace labels backward from the best cell, emitting one column per
/// step, until a zero-score cell or the grid boundary. Each step decreases
/// `i + j`, so the walk takes at most `n + m` steps.
fn traceback(a: Seq, b: Seq, lm: &Grid, lx: &Grid, ly: &Grid, best: Best) -> Alignment {
    let Best {
        score,
        mut i,
        mut j,
        mut layer,
    } = best;

    // Columns are emitted back to front; reverse once at the end.
    let mut row_a = Sequence::new();
    let mut row_b = Sequence::new();

    while i > 0 && j > 0 {
        let cell = match layer {
            Layer::M => lm[(i, j)],
            Layer::Ix => lx[(i, j)],
            Layer::Iy => ly[(i, j)],
        };
        if cell.score == 0. {
            break;
        }
        match layer {
            Layer::M => {
                row_a.push(a[i - 1]);
                row_b.push(b[j - 1]);
                i -= 1;
                j -= 1;
            }
            Layer::Ix => {
                row_a.push(a[i - 1]);
                row_b.push(GAP);
                i -= 1;
            }
            Layer::Iy => {
                row_a.push(GAP);
                row_b.push(b[j - 1]);
                j -= 1;
            }
        }
        // A `None` label means the alignment restarted here.
        let Some(from) = cell.from else { break };
        layer = from;
    }

    row_a.reverse();
    row_b.reverse();
    Alignment {
        a: row_a,
        b: row_b,
        score,
    }
}
