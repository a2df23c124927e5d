use std::ops::{Index, IndexMut};

/// Edge length of a block, in samples.
pub const BLOCK_SIZE: usize = 8;

/// An 8×8 matrix of real values, addressed by `(row, col)`.
///
/// Holds samples before the forward transform and coefficients after it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block([[f64; BLOCK_SIZE]; BLOCK_SIZE]);

impl Default for Block {
    fn default() -> Self {
        Self::zero()
    }
}

impl Block {
    pub fn zero() -> Self {
        Block([[0.0; BLOCK_SIZE]; BLOCK_SIZE])
    }

    pub fn from_rows(rows: [[f64; BLOCK_SIZE]; BLOCK_SIZE]) -> Self {
        Block(rows)
    }

    /// Build a block by evaluating `f(row, col)` for every cell.
    pub fn from_fn<F: FnMut(usize, usize) -> f64>(mut f: F) -> Self {
        let mut block = Self::zero();
        for (row, cells) in block.0.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = f(row, col);
            }
        }
        block
    }

    pub fn rows(&self) -> &[[f64; BLOCK_SIZE]; BLOCK_SIZE] {
        &self.0
    }

    /// Largest absolute difference between two blocks, cell by cell.
    pub fn max_abs_diff(&self, other: &Block) -> f64 {
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

impl Index<(usize, usize)> for Block {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl IndexMut<(usize, usize)> for Block {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}
