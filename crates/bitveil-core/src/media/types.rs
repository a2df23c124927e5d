use std::fs;
use std::io::Write;
use std::path::Path;

use log::{debug, error};

use super::bitmap::Lsb2Codec;
use super::persist::{write_atomically, Persist};
use super::raster::{DctCodec, RasterContainer, RasterImage};
use crate::error::SteganoError;
use crate::media::CodecOptions;
use crate::report::HideReport;
use crate::result::Result;

/// a media container for steganography
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    /// the complete bytes of a bitmap file, carried by the signal bit codec
    Bitmap(Vec<u8>),
    /// a decoded PNG or JPEG image, its luminance is carried by the block DCT codec
    Raster(RasterImage),
}

impl Media {
    pub fn from_bitmap(bytes: Vec<u8>) -> Self {
        Self::Bitmap(bytes)
    }

    pub fn from_raster(image: RasterImage) -> Self {
        Self::Raster(image)
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        let ext = f
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .ok_or(SteganoError::UnsupportedMedia)?;

        match ext.as_str() {
            "bmp" => {
                let bytes = fs::read(f).map_err(|source| {
                    error!("Error reading bitmap {f:?}: {source}");
                    SteganoError::ReadError { source }
                })?;
                Ok(Self::Bitmap(bytes))
            }
            "png" | "jpg" | "jpeg" => Ok(Self::Raster(RasterContainer::open(f)?)),
            _ => Err(SteganoError::UnsupportedMedia),
        }
    }

    /// Hide `message`, leaving `self` untouched and returning the carrier with the secret.
    pub fn hide_data(&self, message: &[u8], opts: &CodecOptions) -> Result<(Media, HideReport)> {
        match self {
            Media::Bitmap(bytes) => {
                let (secret, report) = Lsb2Codec::hide(bytes, message)?;
                Ok((Media::Bitmap(secret), report))
            }
            Media::Raster(image) => {
                let (secret, report) = DctCodec::hide_image(image, message, &opts.dct)?;
                Ok((Media::Raster(secret), report))
            }
        }
    }

    pub fn unveil_data(&self, opts: &CodecOptions) -> Result<Vec<u8>> {
        match self {
            Media::Bitmap(bytes) => Lsb2Codec::unveil(bytes),
            Media::Raster(image) => DctCodec::unveil_image(image, &opts.dct),
        }
    }

    /// How many message bytes fit into this carrier.
    pub fn capacity(&self) -> Result<usize> {
        let bits = match self {
            Media::Bitmap(bytes) => Lsb2Codec::capacity_bits(bytes)?,
            Media::Raster(image) => DctCodec::capacity_bits(&image.luma_plane()?),
        };
        Ok(bits / 8)
    }

    /// Write the media to `file`, with options relevant to the output format.
    pub fn save_with_options(&self, file: &Path, opts: &CodecOptions) -> Result<()> {
        debug!("saving media to {file:?}");
        match self {
            Media::Bitmap(bytes) => write_atomically(file, |w| {
                w.write_all(bytes)
                    .map_err(|source| SteganoError::WriteError { source })
            }),
            Media::Raster(image) => {
                let format = RasterContainer::output_format(file, &opts.dct)?;
                write_atomically(file, |w| RasterContainer::write_to(image, w, format))
            }
        }
    }
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        self.save_with_options(file, &CodecOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extension_is_unsupported() {
        assert!(matches!(
            Media::from_file(Path::new("Cargo.toml")),
            Err(SteganoError::UnsupportedMedia)
        ));
        assert!(matches!(
            Media::from_file(Path::new("no_extension")),
            Err(SteganoError::UnsupportedMedia)
        ));
    }

    #[test]
    fn missing_bitmap_is_a_read_error() {
        assert!(matches!(
            Media::from_file(Path::new("does/not/exist.bmp")),
            Err(SteganoError::ReadError { .. })
        ));
    }

    #[test]
    fn missing_image_is_invalid_media() {
        assert!(matches!(
            Media::from_file(Path::new("does/not/exist.png")),
            Err(SteganoError::InvalidImageMedia)
        ));
    }

    #[test]
    fn capacity_in_bytes() {
        let mut bitmap = vec![0u8; 54 + 4 + 80];
        bitmap[10] = 54;
        assert_eq!(Media::from_bitmap(bitmap).capacity().unwrap(), 10);

        let image = image::RgbImage::from_pixel(128, 64, image::Rgb([128, 90, 60]));
        // 128 blocks - 32 length bits
        assert_eq!(Media::from_raster(RasterImage::Rgb(image)).capacity().unwrap(), 12);
    }

    #[test]
    fn hide_leaves_the_source_media_untouched() {
        let mut bitmap: Vec<u8> = (0..200u8).collect();
        bitmap[10..14].copy_from_slice(&[54, 0, 0, 0]);
        let media = Media::from_bitmap(bitmap.clone());

        let (secret, _) = media.hide_data(b"abc", &CodecOptions::default()).unwrap();

        assert_eq!(media, Media::Bitmap(bitmap));
        assert_ne!(secret, media);
        assert_eq!(
            secret.unveil_data(&CodecOptions::default()).unwrap(),
            b"abc"
        );
    }

    #[test]
    fn persisted_bitmaps_keep_every_byte() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("copy.bmp");
        let mut bitmap: Vec<u8> = (0..100u8).collect();
        bitmap[10..14].copy_from_slice(&[54, 0, 0, 0]);

        Media::from_bitmap(bitmap.clone()).save_as(&target).unwrap();

        assert_eq!(fs::read(&target).unwrap(), bitmap);
    }
}
