//! A dense square bit matrix for adjacency storage.
//!
//! This module provides a compact V×V bit table used as the edge storage of
//! [`LabeledDigraph`](crate::graph::LabeledDigraph). Bits are packed 64 per word in
//! row-major order. Dense storage is the right trade for this domain: basic-block
//! counts per function are small (tens to low hundreds) and the kernel favors O(1)
//! edge-existence checks and trivial transpose/equality semantics over asymptotic
//! edge-set efficiency.

/// A dense square bit matrix.
///
/// Cell `(row, col)` is set iff the corresponding edge exists. Index validation is the
/// caller's responsibility; out-of-range access is an internal invariant violation and
/// panics.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitMatrix {
    /// The bits, row-major, 64 per word.
    words: Vec<u64>,
    /// The side length of the matrix.
    dim: usize,
}

impl BitMatrix {
    /// Creates a new all-zero matrix with the given side length.
    ///
    /// Returns `None` if `dim * dim` bits cannot be represented in `usize`.
    #[must_use]
    pub fn new(dim: usize) -> Option<Self> {
        let bits = dim.checked_mul(dim)?;
        let num_words = bits.div_ceil(64);
        Some(Self {
            words: vec![0; num_words],
            dim,
        })
    }

    /// Returns the side length of the matrix.
    #[must_use]
    pub const fn dim(&self) -> usize {
        self.dim
    }

    /// Row-major bit position of a cell.
    #[inline]
    fn bit(&self, row: usize, col: usize) -> usize {
        assert!(row < self.dim && col < self.dim, "cell out of bounds");
        row * self.dim + col
    }

    /// Sets the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is `>= dim()`.
    pub fn set(&mut self, row: usize, col: usize) {
        let bit = self.bit(row, col);
        self.words[bit / 64] |= 1u64 << (bit % 64);
    }

    /// Returns `true` if the cell at `(row, col)` is set.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is `>= dim()`.
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        let bit = self.bit(row, col);
        (self.words[bit / 64] & (1u64 << (bit % 64))) != 0
    }

    /// Returns the number of set cells.
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns an iterator over the set column indices of a row, ascending.
    ///
    /// # Panics
    ///
    /// Panics if `row >= dim()`.
    #[must_use]
    pub fn row_iter(&self, row: usize) -> RowIter<'_> {
        assert!(row < self.dim, "row out of bounds");
        RowIter {
            matrix: self,
            row,
            col: 0,
        }
    }

    /// Returns an iterator over the set row indices of a column, ascending.
    ///
    /// # Panics
    ///
    /// Panics if `col >= dim()`.
    #[must_use]
    pub fn col_iter(&self, col: usize) -> ColIter<'_> {
        assert!(col < self.dim, "column out of bounds");
        ColIter {
            matrix: self,
            row: 0,
            col,
        }
    }

    /// Returns the transposed matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut out = Self {
            words: vec![0; self.words.len()],
            dim: self.dim,
        };
        for row in 0..self.dim {
            for col in self.row_iter(row) {
                out.set(col, row);
            }
        }
        out
    }
}

impl std::fmt::Debug for BitMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for row in 0..self.dim {
            for col in self.row_iter(row) {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "({row}, {col})")?;
                first = false;
            }
        }
        write!(f, "}}")
    }
}

/// Iterator over the set columns of a single matrix row.
#[derive(Clone)]
pub struct RowIter<'a> {
    matrix: &'a BitMatrix,
    row: usize,
    col: usize,
}

impl Iterator for RowIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.col < self.matrix.dim {
            let col = self.col;
            self.col += 1;
            if self.matrix.contains(self.row, col) {
                return Some(col);
            }
        }
        None
    }
}

/// Iterator over the set rows of a single matrix column.
#[derive(Clone)]
pub struct ColIter<'a> {
    matrix: &'a BitMatrix,
    row: usize,
    col: usize,
}

impl Iterator for ColIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.row < self.matrix.dim {
            let row = self.row;
            self.row += 1;
            if self.matrix.contains(row, self.col) {
                return Some(row);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_basic() {
        let mut m = BitMatrix::new(10).unwrap();
        assert_eq!(m.dim(), 10);
        assert_eq!(m.count(), 0);

        m.set(0, 0);
        m.set(3, 7);
        m.set(9, 9);

        assert!(m.contains(0, 0));
        assert!(m.contains(3, 7));
        assert!(m.contains(9, 9));
        assert!(!m.contains(7, 3));
        assert_eq!(m.count(), 3);
    }

    #[test]
    fn test_matrix_set_is_idempotent() {
        let mut m = BitMatrix::new(4).unwrap();
        m.set(1, 2);
        m.set(1, 2);
        assert_eq!(m.count(), 1);
    }

    #[test]
    fn test_matrix_zero_dim() {
        let m = BitMatrix::new(0).unwrap();
        assert_eq!(m.dim(), 0);
        assert_eq!(m.count(), 0);
    }

    #[test]
    fn test_matrix_row_iter_ascending() {
        let mut m = BitMatrix::new(8).unwrap();
        m.set(2, 5);
        m.set(2, 0);
        m.set(2, 7);
        m.set(3, 1);

        let cols: Vec<_> = m.row_iter(2).collect();
        assert_eq!(cols, vec![0, 5, 7]);
        assert_eq!(m.row_iter(4).count(), 0);
    }

    #[test]
    fn test_matrix_col_iter_ascending() {
        let mut m = BitMatrix::new(8).unwrap();
        m.set(6, 3);
        m.set(1, 3);
        m.set(4, 3);

        let rows: Vec<_> = m.col_iter(3).collect();
        assert_eq!(rows, vec![1, 4, 6]);
    }

    #[test]
    fn test_matrix_row_iter_restartable() {
        let mut m = BitMatrix::new(4).unwrap();
        m.set(0, 1);
        m.set(0, 3);

        let iter = m.row_iter(0);
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_matrix_transpose() {
        let mut m = BitMatrix::new(3).unwrap();
        m.set(0, 1);
        m.set(1, 2);
        m.set(2, 2);

        let t = m.transpose();
        assert!(t.contains(1, 0));
        assert!(t.contains(2, 1));
        assert!(t.contains(2, 2));
        assert_eq!(t.count(), 3);

        // Transposing twice restores the original
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_matrix_crosses_word_boundary() {
        // dim 13 means rows are not word aligned
        let mut m = BitMatrix::new(13).unwrap();
        for i in 0..13 {
            m.set(i, 12 - i);
        }
        assert_eq!(m.count(), 13);
        for i in 0..13 {
            assert!(m.contains(i, 12 - i));
        }
    }
}
