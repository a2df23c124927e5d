//! Block DCT Steganography
//!
//! This crate hides one bit per 8×8 block of image samples. Each block is
//! forward transformed with an orthonormal type-II DCT, a single mid-frequency
//! coefficient is moved into the lower or upper quarter of its quantization
//! bucket, and the block is transformed back into samples.
//!
//! # Layer Responsibilities
//!
//! This crate handles **encoding-level** concerns only:
//! - The separable 2-D transform ([`BlockTransformer`])
//! - The quantization bucket rule ([`CoefficientEmbedder`])
//! - Walking the blocks of a sample plane in raster order ([`BlockWalker`])
//!
//! Message framing and container formats are handled by outer layers (e.g., `bitveil-core`).
//!
//! # Example
//!
//! ```
//! use bitveil_dct::{BlockTransformer, BlockWalker, CoefficientEmbedder, SamplePlane};
//!
//! let mut plane = SamplePlane::from_fn(32, 16, |x, y| (96 + (x * 7 + y * 3) % 64) as u8);
//! let walker = BlockWalker::new(BlockTransformer::shared(), CoefficientEmbedder::default());
//!
//! let bits = [true, false, true, true, false, false, true, false];
//! walker.embed_bits(&mut plane, &bits).expect("8 blocks hold 8 bits");
//!
//! let extracted: Vec<bool> = walker.extract_iter(&plane).take(bits.len()).collect();
//! assert_eq!(extracted, bits);
//! ```

mod block;
mod embedder;
mod error;
mod plane;
mod transform;
mod walker;

pub use block::{Block, BLOCK_SIZE};
pub use embedder::{CoefficientEmbedder, DEFAULT_COEFFICIENT, DEFAULT_QUANTIZATION_STEP};
pub use error::{DctError, Result};
pub use plane::SamplePlane;
pub use transform::BlockTransformer;
pub use walker::BlockWalker;
