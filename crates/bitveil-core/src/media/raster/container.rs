//! Raster images are decoded with their colour channels, the block codec works
//! on the luminance derived from them.

use std::io::{Seek, Write};
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageOutputFormat};
use log::{error, warn};

use super::carrier::RasterImage;
use crate::error::SteganoError;
use crate::media::DctCodecOptions;
use crate::result::Result;

pub struct RasterContainer;

impl RasterContainer {
    pub fn open(file: &Path) -> Result<RasterImage> {
        let image = image::open(file).map_err(|e| {
            error!("Error decoding image {file:?}: {e}");
            SteganoError::InvalidImageMedia
        })?;
        Ok(RasterImage::from(image))
    }

    /// The output format is chosen by the extension of `target`, PNG or JPEG.
    pub fn output_format(target: &Path, opts: &DctCodecOptions) -> Result<ImageOutputFormat> {
        match ImageFormat::from_path(target) {
            Ok(ImageFormat::Png) => Ok(ImageOutputFormat::Png),
            Ok(ImageFormat::Jpeg) => {
                warn!(
                    "{target:?} is stored as JPEG at quality {}, lossy re-encoding may disturb the hidden bits",
                    opts.jpeg_quality
                );
                Ok(ImageOutputFormat::Jpeg(opts.jpeg_quality))
            }
            _ => Err(SteganoError::UnsupportedMedia),
        }
    }

    /// JPEG has no alpha channel, it is dropped for JPEG outputs.
    pub fn write_to<W: Write + Seek>(
        image: &RasterImage,
        writer: &mut W,
        format: ImageOutputFormat,
    ) -> Result<()> {
        let mut image = image.to_dynamic();
        if matches!(format, ImageOutputFormat::Jpeg(_)) && image.color().has_alpha() {
            image = DynamicImage::ImageRgb8(image.to_rgb8());
        }
        image.write_to(writer, format).map_err(|e| {
            error!("Error saving image: {e}");
            SteganoError::ImageEncodingError
        })
    }
}
