pub use bitveil_dct::{DEFAULT_COEFFICIENT, DEFAULT_QUANTIZATION_STEP};
use bitveil_dct::CoefficientEmbedder;

use crate::result::Result;

/// Codec configuration for hiding and unveiling.
///
/// The carrier media decides which codec runs:
/// - BMP → signal bit codec on the raw pixel bytes, no tunables
/// - PNG / JPEG → block DCT codec, tuned by [`DctCodecOptions`]
#[derive(Debug, Default, Clone)]
pub struct CodecOptions {
    pub dct: DctCodecOptions,
}

/// Default JPEG quality when a transform codec result is stored as JPEG (1-100)
pub const DEFAULT_JPEG_QUALITY: u8 = 100;

/// Options for the block DCT codec
#[derive(Debug, Clone)]
pub struct DctCodecOptions {
    /// Width `Q` of a quantization bucket. Larger steps survive more noise and distort more.
    /// Hiding and unveiling must use the same value.
    pub quantization_step: f64,

    /// Zero-based `(row, col)` of the coefficient that carries the bit in every block
    pub coefficient: (usize, usize),

    /// JPEG quality used when the output file is a JPEG
    pub jpeg_quality: u8,
}

impl Default for DctCodecOptions {
    fn default() -> Self {
        Self {
            quantization_step: DEFAULT_QUANTIZATION_STEP,
            coefficient: DEFAULT_COEFFICIENT,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl DctCodecOptions {
    pub fn with_quantization_step(mut self, step: f64) -> Self {
        self.quantization_step = step;
        self
    }

    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }

    pub(crate) fn embedder(&self) -> Result<CoefficientEmbedder> {
        Ok(CoefficientEmbedder::new(
            self.quantization_step,
            self.coefficient,
        )?)
    }
}
