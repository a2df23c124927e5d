//! Transform codec for raster images.
//!
//! The frame (32 length bits, then the payload bits) is spread one bit per
//! 8×8 block over the luminance plane, in raster block order.

use bitveil_dct::{BlockTransformer, BlockWalker, DctError, SamplePlane};
use log::debug;

use super::carrier::RasterImage;
use crate::error::SteganoError;
use crate::framing::{MessageFramer, LENGTH_FIELD_BITS};
use crate::media::DctCodecOptions;
use crate::report::HideReport;
use crate::result::Result;

/// Hides and unveils messages in the block DCT coefficients of a sample plane.
pub struct DctCodec;

impl DctCodec {
    /// Number of payload bits the plane can hold after the length prefix.
    pub fn capacity_bits(plane: &SamplePlane) -> usize {
        plane.block_count().saturating_sub(LENGTH_FIELD_BITS)
    }

    /// Produce a copy of `plane` with `message` hidden inside.
    pub fn hide(
        plane: &SamplePlane,
        message: &[u8],
        opts: &DctCodecOptions,
    ) -> Result<(SamplePlane, HideReport)> {
        let walker = BlockWalker::new(BlockTransformer::shared(), opts.embedder()?);
        let frame = MessageFramer::frame(message)?;
        let available = walker.capacity(plane);
        if frame.len() > available {
            return Err(SteganoError::CapacityExceeded {
                required: frame.len(),
                available,
            });
        }
        debug!(
            "hiding {} bytes as {} bits in a {}x{} plane with {available} blocks",
            message.len(),
            frame.len(),
            plane.width(),
            plane.height()
        );

        let mut secret = plane.clone();
        let changes = walker.embed_bits(&mut secret, &frame)?;

        let squared_error = HideReport::sum_squared_error(plane.samples(), secret.samples());
        Ok((
            secret,
            HideReport {
                changes,
                carrier_units: available,
                squared_error,
                samples: plane.samples().len(),
            },
        ))
    }

    /// Hide `message` in the luminance of `image`, keeping its colour.
    ///
    /// Applying the luminance to clipped colour channels can move it away from
    /// the embedded plane, the frame is read back from the result and the first
    /// block that lost its bit is reported as [`DctError::UnstableBlock`].
    pub fn hide_image(
        image: &RasterImage,
        message: &[u8],
        opts: &DctCodecOptions,
    ) -> Result<(RasterImage, HideReport)> {
        let plane = image.luma_plane()?;
        let (secret_plane, report) = Self::hide(&plane, message, opts)?;
        let secret = image.with_luma(&secret_plane)?;

        let stored = secret.luma_plane()?;
        if stored != secret_plane {
            let walker = BlockWalker::new(BlockTransformer::shared(), opts.embedder()?);
            let frame = MessageFramer::frame(message)?;
            let mismatch = walker
                .extract_iter(&stored)
                .zip(&frame)
                .position(|(read, &written)| read != written);
            if let Some(index) = mismatch {
                debug!("colour clipping destroyed the bit of block {index}");
                return Err(DctError::UnstableBlock { index }.into());
            }
        }

        Ok((secret, report))
    }

    pub fn unveil_image(image: &RasterImage, opts: &DctCodecOptions) -> Result<Vec<u8>> {
        Self::unveil(&image.luma_plane()?, opts)
    }

    /// Recover the message hidden by [`DctCodec::hide`].
    pub fn unveil(plane: &SamplePlane, opts: &DctCodecOptions) -> Result<Vec<u8>> {
        let walker = BlockWalker::new(BlockTransformer::shared(), opts.embedder()?);
        let mut bits = walker.extract_iter(plane);

        let length = MessageFramer::read_length_bits(&mut bits)?;
        let available = Self::capacity_bits(plane);
        debug!("length prefix declares {length} bytes, {available} payload blocks available");

        MessageFramer::unframe(bits, length, available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textured_plane(width: usize, height: usize) -> SamplePlane {
        let mut rng = fastrand::Rng::with_seed(2024);
        SamplePlane::from_fn(width, height, |_, _| rng.u8(70..186))
    }

    #[test]
    fn hide_and_unveil_hi() {
        // 48 bits => 48 blocks
        let plane = textured_plane(64, 48);
        let opts = DctCodecOptions::default();

        let (secret, report) = DctCodec::hide(&plane, b"Hi", &opts).unwrap();

        assert_eq!(report.carrier_units, 48);
        assert_eq!(DctCodec::unveil(&secret, &opts).unwrap(), b"Hi");
    }

    #[test]
    fn source_plane_is_not_modified() {
        let plane = textured_plane(64, 64);
        let copy = plane.clone();

        DctCodec::hide(&plane, b"Hello", &DctCodecOptions::default()).unwrap();

        assert_eq!(plane, copy);
    }

    #[test]
    fn too_few_blocks_is_a_capacity_error() {
        let plane = textured_plane(64, 40);
        let result = DctCodec::hide(&plane, b"Hi", &DctCodecOptions::default());

        assert!(matches!(
            result,
            Err(SteganoError::CapacityExceeded {
                required: 48,
                available: 40
            })
        ));
    }

    #[test]
    fn custom_quantization_step_roundtrip() {
        let plane = textured_plane(128, 64);
        let opts = DctCodecOptions::default().with_quantization_step(80.0);

        let (secret, _) = DctCodec::hide(&plane, b"step 80", &opts).unwrap();

        assert_eq!(DctCodec::unveil(&secret, &opts).unwrap(), b"step 80");
    }

    #[test]
    fn invalid_quantization_step_is_reported() {
        let plane = textured_plane(64, 48);
        let opts = DctCodecOptions::default().with_quantization_step(-1.0);

        let result = DctCodec::hide(&plane, b"Hi", &opts);

        assert!(matches!(result, Err(SteganoError::Dct(_))));
    }

    #[test]
    fn report_measures_the_luma_distortion() {
        let plane = textured_plane(64, 48);
        let (secret, report) = DctCodec::hide(&plane, b"Hi", &DctCodecOptions::default()).unwrap();

        assert_eq!(report.samples, 64 * 48);
        assert_eq!(
            report.squared_error,
            HideReport::sum_squared_error(plane.samples(), secret.samples())
        );
        assert!(report.squared_error > 0);
    }

    #[test]
    fn colour_images_keep_their_colour() {
        let mut rng = fastrand::Rng::with_seed(31);
        let rgb = image::RgbImage::from_fn(64, 48, |x, _| {
            let noise = rng.u8(0..40);
            if x < 32 {
                image::Rgb([180 + noise / 2, 40 + noise, 40])
            } else {
                image::Rgb([40, 40 + noise, 180 + noise / 2])
            }
        });
        let image = RasterImage::Rgb(rgb);
        let opts = DctCodecOptions::default();

        let (secret, _) = DctCodec::hide_image(&image, b"Hi", &opts).unwrap();

        let RasterImage::Rgb(out) = &secret else {
            panic!("colour image came back as {secret:?}");
        };
        let left = out.get_pixel(3, 3);
        let right = out.get_pixel(60, 3);
        assert!(left[0] > left[2] + 80, "left half must stay red, got {left:?}");
        assert!(right[2] > right[0] + 80, "right half must stay blue, got {right:?}");
        assert_eq!(DctCodec::unveil_image(&secret, &opts).unwrap(), b"Hi");
    }

    #[test]
    fn saturated_images_fail_instead_of_corrupting() {
        let white = RasterImage::Gray(image::GrayImage::from_pixel(128, 128, image::Luma([255])));

        let result = DctCodec::hide_image(&white, b"Hi", &DctCodecOptions::default());

        assert!(matches!(
            result,
            Err(SteganoError::Dct(DctError::UnstableBlock { .. }))
        ));
    }

    #[test]
    fn clipped_colour_channels_never_yield_a_wrong_message() {
        // magenta clips red and blue as soon as the luma rises
        let magenta = RasterImage::Rgb(image::RgbImage::from_fn(64, 48, |x, y| {
            image::Rgb([255, ((x * 7 + y * 3) % 60) as u8 + 60, 255])
        }));
        let opts = DctCodecOptions::default();

        match DctCodec::hide_image(&magenta, b"Hi", &opts) {
            Ok((secret, _)) => {
                assert_eq!(DctCodec::unveil_image(&secret, &opts).unwrap(), b"Hi")
            }
            Err(e) => assert!(
                matches!(e, SteganoError::Dct(DctError::UnstableBlock { .. })),
                "unexpected error {e:?}"
            ),
        }
    }

    #[test]
    fn capacity_excludes_the_length_prefix() {
        assert_eq!(DctCodec::capacity_bits(&textured_plane(64, 64)), 32);
        assert_eq!(DctCodec::capacity_bits(&textured_plane(16, 16)), 0);
    }
}
