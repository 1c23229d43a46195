use gotoh_types::{FromLayer, Score};
use std::ops::{Index, IndexMut};

/// One DP cell: the layer score and the layer that produced it.
///
/// The default cell is `{score: 0, from: None}`, which is exactly the local
/// alignment boundary condition for row 0 and column 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cell {
    pub score: Score,
    pub from: FromLayer,
}

/// A flat `(n+1) x (m+1)` arena of cells, indexed by `(i, j)`.
pub struct Grid {
    cells: Vec<Cell>,
    cols: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![Cell::default(); rows * cols],
            cols,
        }
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Cell {
        &self.cells[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Cell {
        &mut self.cells[i * self.cols + j]
    }
}
