use crate::block::{Block, BLOCK_SIZE};
use crate::error::{DctError, Result};

/// A single channel of 8-bit samples, row-major.
///
/// Blocks are numbered in raster order: left to right, top to bottom. Only
/// full 8×8 blocks count, samples of a partial right or bottom edge are never
/// touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePlane {
    width: usize,
    height: usize,
    samples: Vec<u8>,
}

impl SamplePlane {
    pub fn new(width: usize, height: usize, samples: Vec<u8>) -> Result<Self> {
        let expected = width * height;
        if samples.len() != expected {
            return Err(DctError::PlaneSizeMismatch {
                width,
                height,
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Build a plane by evaluating `f(x, y)` for every sample.
    pub fn from_fn<F: FnMut(usize, usize) -> u8>(width: usize, height: usize, mut f: F) -> Self {
        let samples = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Self {
            width,
            height,
            samples,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    pub fn blocks_wide(&self) -> usize {
        self.width / BLOCK_SIZE
    }

    pub fn blocks_tall(&self) -> usize {
        self.height / BLOCK_SIZE
    }

    pub fn block_count(&self) -> usize {
        self.blocks_wide() * self.blocks_tall()
    }

    /// Copy block `index` out as real-valued samples.
    pub fn read_block(&self, index: usize) -> Result<Block> {
        let (x0, y0) = self.origin(index)?;
        Ok(self.block_at(x0, y0))
    }

    /// Write real-valued samples back into block `index`, rounded and clamped to `0..=255`.
    pub fn write_block(&mut self, index: usize, block: &Block) -> Result<()> {
        let (x0, y0) = self.origin(index)?;
        for row in 0..BLOCK_SIZE {
            let start = (y0 + row) * self.width + x0;
            for (col, sample) in self.samples[start..start + BLOCK_SIZE].iter_mut().enumerate() {
                *sample = block[(row, col)].round().clamp(0.0, 255.0) as u8;
            }
        }
        Ok(())
    }

    /// All full blocks in raster order.
    pub fn blocks(&self) -> impl Iterator<Item = Block> + '_ {
        let wide = self.blocks_wide();
        (0..self.block_count())
            .map(move |index| self.block_at((index % wide) * BLOCK_SIZE, (index / wide) * BLOCK_SIZE))
    }

    fn block_at(&self, x0: usize, y0: usize) -> Block {
        Block::from_fn(|row, col| self.samples[(y0 + row) * self.width + x0 + col] as f64)
    }

    fn origin(&self, index: usize) -> Result<(usize, usize)> {
        let blocks = self.block_count();
        if index >= blocks {
            return Err(DctError::BlockOutOfRange { index, blocks });
        }
        let wide = self.blocks_wide();
        Ok(((index % wide) * BLOCK_SIZE, (index / wide) * BLOCK_SIZE))
    }
}
