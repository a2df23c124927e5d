//! Decoded raster carriers.
//!
//! The transform codec only sees a luminance plane. For colour images the
//! luma is `Y = (299 R + 587 G + 114 B + 500) / 1000` in integers, and a new
//! plane is applied by adding the per pixel luma delta to R, G and B alike.
//! The weights sum to 1000, so the stored luma equals the embedded one and
//! both chroma differences stay untouched, unless a channel clips at 0 or 255.

use bitveil_dct::SamplePlane;
use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};

use crate::error::SteganoError;
use crate::result::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterImage {
    Gray(GrayImage),
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

impl From<DynamicImage> for RasterImage {
    fn from(image: DynamicImage) -> Self {
        let color = image.color();
        match image {
            DynamicImage::ImageLuma8(gray) => RasterImage::Gray(gray),
            DynamicImage::ImageRgb8(rgb) => RasterImage::Rgb(rgb),
            DynamicImage::ImageRgba8(rgba) => RasterImage::Rgba(rgba),
            other if !color.has_color() && !color.has_alpha() => RasterImage::Gray(other.to_luma8()),
            other if color.has_alpha() => RasterImage::Rgba(other.to_rgba8()),
            other => RasterImage::Rgb(other.to_rgb8()),
        }
    }
}

/// Integer luma of an RGB(A) pixel, the alpha channel is ignored.
#[inline]
fn luma(px: &[u8]) -> u8 {
    let sum = 299 * u32::from(px[0]) + 587 * u32::from(px[1]) + 114 * u32::from(px[2]);
    ((sum + 500) / 1000) as u8
}

fn luma_samples(raw: &[u8], channels: usize) -> Vec<u8> {
    raw.chunks_exact(channels).map(luma).collect()
}

fn shift_luma(raw: &mut [u8], channels: usize, plane: &[u8]) {
    for (px, &target) in raw.chunks_exact_mut(channels).zip(plane) {
        let delta = i16::from(target) - i16::from(luma(px));
        if delta == 0 {
            continue;
        }
        for c in &mut px[..3] {
            *c = (i16::from(*c) + delta).clamp(0, 255) as u8;
        }
    }
}

impl RasterImage {
    pub fn width(&self) -> u32 {
        match self {
            RasterImage::Gray(i) => i.width(),
            RasterImage::Rgb(i) => i.width(),
            RasterImage::Rgba(i) => i.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            RasterImage::Gray(i) => i.height(),
            RasterImage::Rgb(i) => i.height(),
            RasterImage::Rgba(i) => i.height(),
        }
    }

    pub fn is_color(&self) -> bool {
        !matches!(self, RasterImage::Gray(_))
    }

    /// The luminance plane the transform codec works on.
    pub fn luma_plane(&self) -> Result<SamplePlane> {
        let samples = match self {
            RasterImage::Gray(i) => i.as_raw().clone(),
            RasterImage::Rgb(i) => luma_samples(i.as_raw(), 3),
            RasterImage::Rgba(i) => luma_samples(i.as_raw(), 4),
        };
        Ok(SamplePlane::new(
            self.width() as usize,
            self.height() as usize,
            samples,
        )?)
    }

    /// A copy of this image whose luminance is replaced by `plane`.
    pub fn with_luma(&self, plane: &SamplePlane) -> Result<RasterImage> {
        if plane.width() != self.width() as usize || plane.height() != self.height() as usize {
            return Err(SteganoError::ImageEncodingError);
        }
        let mut image = self.clone();
        match &mut image {
            RasterImage::Gray(i) => i.copy_from_slice(plane.samples()),
            RasterImage::Rgb(i) => shift_luma(i, 3, plane.samples()),
            RasterImage::Rgba(i) => shift_luma(i, 4, plane.samples()),
        }
        Ok(image)
    }

    pub fn to_dynamic(&self) -> DynamicImage {
        match self {
            RasterImage::Gray(i) => DynamicImage::ImageLuma8(i.clone()),
            RasterImage::Rgb(i) => DynamicImage::ImageRgb8(i.clone()),
            RasterImage::Rgba(i) => DynamicImage::ImageRgba8(i.clone()),
        }
    }
}
