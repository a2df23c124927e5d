//! Separable 2-D type-II DCT on 8×8 blocks.
//!
//! The basis matrix `T` has `T[i][j] = α(i)·cos((2j+1)·i·π / 16)` with
//! `α(0) = √(1/8)` and `α(i>0) = √(2/8)`. `T` is orthonormal, so the inverse
//! transform is the same product with `T` transposed.

use std::f64::consts::PI;
use std::sync::OnceLock;

use crate::block::{Block, BLOCK_SIZE};

type Basis = [[f64; BLOCK_SIZE]; BLOCK_SIZE];

/// Forward and inverse 8×8 DCT, all in double precision.
#[derive(Debug, Clone)]
pub struct BlockTransformer {
    basis: Basis,
}

impl Default for BlockTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockTransformer {
    /// Compute the basis matrix.
    pub fn new() -> Self {
        let n = BLOCK_SIZE as f64;
        let mut basis = [[0.0; BLOCK_SIZE]; BLOCK_SIZE];
        for (i, row) in basis.iter_mut().enumerate() {
            let scale = if i == 0 {
                (1.0 / n).sqrt()
            } else {
                (2.0 / n).sqrt()
            };
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = scale * ((2 * j + 1) as f64 * i as f64 * PI / (2.0 * n)).cos();
            }
        }
        BlockTransformer { basis }
    }

    /// Process-wide transformer, the basis is computed on first use and read-only after.
    pub fn shared() -> &'static BlockTransformer {
        static SHARED: OnceLock<BlockTransformer> = OnceLock::new();
        SHARED.get_or_init(BlockTransformer::new)
    }

    pub fn basis(&self) -> &[[f64; BLOCK_SIZE]; BLOCK_SIZE] {
        &self.basis
    }

    /// `coeffs = T · block · Tᵗ`
    pub fn forward(&self, block: &Block) -> Block {
        let t = &self.basis;
        let temp = Block::from_fn(|i, j| (0..BLOCK_SIZE).map(|k| t[i][k] * block[(k, j)]).sum());
        Block::from_fn(|i, j| (0..BLOCK_SIZE).map(|k| temp[(i, k)] * t[j][k]).sum())
    }

    /// `block = Tᵗ · coeffs · T`
    pub fn inverse(&self, coeffs: &Block) -> Block {
        let t = &self.basis;
        let temp = Block::from_fn(|i, j| (0..BLOCK_SIZE).map(|k| t[k][i] * coeffs[(k, j)]).sum());
        Block::from_fn(|i, j| (0..BLOCK_SIZE).map(|k| temp[(i, k)] * t[k][j]).sum())
    }
}
