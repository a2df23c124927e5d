//! Quantization bucket rule for one coefficient per block.
//!
//! A coefficient `c` lies in the bucket `[⌊c/Q⌋·Q, ⌊c/Q⌋·Q + Q)`. Embedding
//! moves it to the one-quarter point of that bucket for a `0` bit and to the
//! three-quarter point for a `1` bit. Extraction compares the non-negative
//! remainder `c mod Q` against `Q/2`.

use crate::block::{Block, BLOCK_SIZE};
use crate::error::{DctError, Result};

/// Nominal quantization step `Q`.
pub const DEFAULT_QUANTIZATION_STEP: f64 = 50.0;

/// Mid-frequency embedding site, zero-based `(row, col)`.
pub const DEFAULT_COEFFICIENT: (usize, usize) = (4, 1);

const ONE_OFFSET: f64 = 0.75;
const ZERO_OFFSET: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientEmbedder {
    step: f64,
    row: usize,
    col: usize,
}

impl Default for CoefficientEmbedder {
    fn default() -> Self {
        let (row, col) = DEFAULT_COEFFICIENT;
        Self {
            step: DEFAULT_QUANTIZATION_STEP,
            row,
            col,
        }
    }
}

impl CoefficientEmbedder {
    /// Create an embedder with a custom quantization step and coefficient site.
    ///
    /// # Errors
    /// * [`DctError::InvalidQuantizationStep`] if `step` is not finite and positive
    /// * [`DctError::InvalidCoefficientPosition`] if the position is outside the block
    pub fn new(step: f64, (row, col): (usize, usize)) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(DctError::InvalidQuantizationStep(step));
        }
        if row >= BLOCK_SIZE || col >= BLOCK_SIZE {
            return Err(DctError::InvalidCoefficientPosition { row, col });
        }
        Ok(Self { step, row, col })
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Re-center the embedding coefficient inside its bucket according to `bit`.
    ///
    /// Returns `true` when the coefficient value actually changed.
    pub fn embed(&self, coeffs: &mut Block, bit: bool) -> bool {
        let q = self.step;
        let c = coeffs[(self.row, self.col)];
        let offset = if bit { ONE_OFFSET } else { ZERO_OFFSET };
        let embedded = (c / q).floor() * q + offset * q;
        coeffs[(self.row, self.col)] = embedded;

        embedded != c
    }

    pub fn extract(&self, coeffs: &Block) -> bool {
        let remainder = coeffs[(self.row, self.col)].rem_euclid(self.step);
        remainder > self.step / 2.0
    }
}
