//! Index coordinates of a surface.
use itertools::Itertools;
use ndarray::Array2;

/// Integer coordinate axes `0..d0` and `0..d1` of a `(d0, d1)` dataset.
///
/// The first axis follows the row index of the dataset and the second axis the column index, so
/// grid point `(i, j)` sits below value `[i, j]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mesh {
    d0: usize,
    d1: usize,
}

impl Mesh {
    pub fn new(d0: usize, d1: usize) -> Mesh {
        Mesh { d0, d1 }
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.d0, self.d1)
    }

    /// Coordinate matrices `(X, Y)` with `X[[i, j]] == i` and `Y[[i, j]] == j`.
    pub fn grid(&self) -> (Array2<usize>, Array2<usize>) {
        let x = Array2::from_shape_fn((self.d0, self.d1), |(i, _)| i);
        let y = Array2::from_shape_fn((self.d0, self.d1), |(_, j)| j);
        (x, y)
    }

    /// Number of quads spanned by the grid.
    pub fn n_cells(&self) -> usize {
        self.d0.saturating_sub(1) * self.d1.saturating_sub(1)
    }

    /// Lower corners `(i, j)` of the quads spanned by the grid, row-major.
    ///
    /// A quad covers `(i, j)`, `(i + 1, j)`, `(i + 1, j + 1)` and `(i, j + 1)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        (0..self.d0.saturating_sub(1)).cartesian_product(0..self.d1.saturating_sub(1))
    }
}
