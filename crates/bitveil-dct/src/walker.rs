//! Maps a bit sequence onto successive blocks of a [`SamplePlane`].
//!
//! Block `i` carries bit `i`. Embedding transforms the block, re-centers the
//! signal coefficient, transforms back and writes the samples; extraction
//! only transforms and reads the bucket position.

use log::{debug, trace};

use crate::embedder::CoefficientEmbedder;
use crate::error::{DctError, Result};
use crate::plane::SamplePlane;
use crate::transform::BlockTransformer;

#[derive(Debug, Clone)]
pub struct BlockWalker<'t> {
    transformer: &'t BlockTransformer,
    embedder: CoefficientEmbedder,
}

impl<'t> BlockWalker<'t> {
    pub fn new(transformer: &'t BlockTransformer, embedder: CoefficientEmbedder) -> Self {
        Self {
            transformer,
            embedder,
        }
    }

    pub fn embedder(&self) -> &CoefficientEmbedder {
        &self.embedder
    }

    /// Number of bits the plane can carry, one per full block.
    pub fn capacity(&self, plane: &SamplePlane) -> usize {
        plane.block_count()
    }

    /// Embed `bits` into the first `bits.len()` blocks of `plane`.
    ///
    /// Returns the number of blocks whose signal coefficient had to move.
    ///
    /// # Errors
    /// * [`DctError::CapacityExceeded`] before any block is touched, if the plane is too small
    /// * [`DctError::UnstableBlock`] if sample clamping destroys a bit
    pub fn embed_bits(&self, plane: &mut SamplePlane, bits: &[bool]) -> Result<usize> {
        let available = self.capacity(plane);
        if bits.len() > available {
            return Err(DctError::CapacityExceeded {
                required: bits.len(),
                available,
            });
        }
        debug!(
            "embedding {} bits into {available} blocks of a {}x{} plane",
            bits.len(),
            plane.width(),
            plane.height()
        );

        let mut changed = 0;
        for (index, &bit) in bits.iter().enumerate() {
            if self.embed_at(plane, index, bit)? {
                changed += 1;
            }
        }
        Ok(changed)
    }

    /// Embed a single bit into block `index`, leaving every other block untouched.
    pub fn embed_at(&self, plane: &mut SamplePlane, index: usize, bit: bool) -> Result<bool> {
        let mut coeffs = self.transformer.forward(&plane.read_block(index)?);
        let changed = self.embedder.embed(&mut coeffs, bit);
        plane.write_block(index, &self.transformer.inverse(&coeffs))?;

        // the written samples are integers now, make sure the bit survived that
        if self.extract_at(plane, index)? != bit {
            return Err(DctError::UnstableBlock { index });
        }
        trace!("block {index} carries {}", u8::from(bit));
        Ok(changed)
    }

    pub fn extract_at(&self, plane: &SamplePlane, index: usize) -> Result<bool> {
        let coeffs = self.transformer.forward(&plane.read_block(index)?);
        Ok(self.embedder.extract(&coeffs))
    }

    /// Extract the bits of the first `count` blocks.
    pub fn extract_bits(&self, plane: &SamplePlane, count: usize) -> Result<Vec<bool>> {
        let available = self.capacity(plane);
        if count > available {
            return Err(DctError::CapacityExceeded {
                required: count,
                available,
            });
        }
        Ok(self.extract_iter(plane).take(count).collect())
    }

    /// Lazily extract one bit per block, in raster order, until the plane is exhausted.
    pub fn extract_iter<'p>(&'p self, plane: &'p SamplePlane) -> impl Iterator<Item = bool> + 'p {
        let transformer: &'p BlockTransformer = self.transformer;
        let embedder = self.embedder;
        plane
            .blocks()
            .map(move |block| embedder.extract(&transformer.forward(&block)))
    }
}
