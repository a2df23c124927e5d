//! Spatial codec for bitmap files.
//!
//! Layout of a carrier after hiding:
//!
//! ```text
//! | header (verbatim) | length (4 raw bytes, BE) | 8 signal bits per message byte | rest (verbatim) |
//! ^ 0                 ^ pixel data offset
//! ```
//!
//! The length field overwrites the first 4 pixel data bytes, so the file keeps its size.
//! Those 4 bytes carry no signal bits, a carrier of `n` pixel bytes holds `n - 4`
//! message bits. The bytes are replaced outright and can move by up to 255 levels,
//! [`HideReport::squared_error`] accounts for that.

use log::debug;

use super::container::BitmapContainer;
use super::walker::CarrierWalker;
use crate::error::SteganoError;
use crate::framing::{MessageFramer, LENGTH_FIELD_BYTES};
use crate::report::HideReport;
use crate::result::Result;

/// Hides and unveils messages in the pixel bytes of a bitmap file.
pub struct Lsb2Codec;

impl Lsb2Codec {
    /// Number of payload bits the carrier can hold.
    pub fn capacity_bits(carrier: &[u8]) -> Result<usize> {
        let offset = BitmapContainer::pixel_data_offset(carrier)?;
        Ok((carrier.len() - offset).saturating_sub(LENGTH_FIELD_BYTES))
    }

    /// Produce a copy of `carrier` with `message` hidden inside.
    pub fn hide(carrier: &[u8], message: &[u8]) -> Result<(Vec<u8>, HideReport)> {
        let offset = BitmapContainer::pixel_data_offset(carrier)?;
        let available = (carrier.len() - offset).saturating_sub(LENGTH_FIELD_BYTES);
        let required = message.len().saturating_mul(8);
        if required > available {
            return Err(SteganoError::CapacityExceeded {
                required,
                available,
            });
        }
        debug!(
            "hiding {} bytes after pixel data offset {offset}, {available} carrier bytes available",
            message.len()
        );

        let mut out = Vec::with_capacity(carrier.len());
        out.extend_from_slice(&carrier[..offset]);

        let mut walker = CarrierWalker::new(carrier, offset);
        walker.take_raw(LENGTH_FIELD_BYTES)?;
        out.extend_from_slice(&MessageFramer::length_field(message)?);

        let changes = walker.embed(MessageFramer::payload_bits(message), &mut out)?;
        walker.pass_through(&mut out)?;
        debug!("{changes} of {required} pixel bytes changed");

        let squared_error = HideReport::sum_squared_error(&carrier[offset..], &out[offset..]);
        Ok((
            out,
            HideReport {
                changes,
                carrier_units: carrier.len() - offset,
                squared_error,
                samples: carrier.len() - offset,
            },
        ))
    }

    /// Recover the message hidden by [`Lsb2Codec::hide`].
    pub fn unveil(carrier: &[u8]) -> Result<Vec<u8>> {
        let offset = BitmapContainer::pixel_data_offset(carrier)?;
        let mut walker = CarrierWalker::new(carrier, offset);
        let field = walker.take_raw(LENGTH_FIELD_BYTES).map_err(|_| {
            SteganoError::MalformedHeader("no room for a length field after the header".to_string())
        })?;
        let length = MessageFramer::read_length_field(field)?;
        debug!("length field at offset {offset} declares {length} bytes");

        let available = walker.remaining();
        MessageFramer::unframe(walker.signal_bits(), length, available)
    }
}
