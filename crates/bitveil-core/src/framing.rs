//! Length-prefixed framing of a message into a bit stream.
//!
//! The frame is a 32-bit big-endian length followed by the message bytes,
//! every byte serialized most significant bit first. The spatial codec writes
//! the length field as 4 raw bytes, the transform codec embeds it as the first
//! 32 bits of the stream.

use std::io::Read;

use bitstream_io::{BitWrite, BitWriter};
use byteorder::{BigEndian, ByteOrder, ReadBytesExt};

use crate::bit_iterator::BitIterator;
use crate::error::SteganoError;
use crate::result::Result;

pub const LENGTH_FIELD_BYTES: usize = 4;
pub const LENGTH_FIELD_BITS: usize = LENGTH_FIELD_BYTES * 8;

pub struct MessageFramer;

impl MessageFramer {
    /// The raw length prefix of `message`.
    pub fn length_field(message: &[u8]) -> Result<[u8; LENGTH_FIELD_BYTES]> {
        let len = u32::try_from(message.len()).map_err(|_| SteganoError::CapacityExceeded {
            required: message.len().saturating_mul(8),
            available: (u32::MAX as usize).saturating_mul(8),
        })?;
        let mut field = [0; LENGTH_FIELD_BYTES];
        BigEndian::write_u32(&mut field, len);

        Ok(field)
    }

    pub fn read_length_field(mut field: impl Read) -> Result<u32> {
        field
            .read_u32::<BigEndian>()
            .map_err(|_| SteganoError::MalformedHeader("length field is truncated".to_string()))
    }

    /// Message bits only, without the length prefix.
    pub fn payload_bits(message: &[u8]) -> BitIterator<&[u8]> {
        BitIterator::new(message)
    }

    /// Length prefix bits followed by the payload bits.
    pub fn frame(message: &[u8]) -> Result<Vec<bool>> {
        let field = Self::length_field(message)?;

        Ok(BitIterator::new(&field[..])
            .chain(Self::payload_bits(message))
            .collect())
    }

    /// Pull the 32-bit length prefix out of a bit source.
    pub fn read_length_bits<I: Iterator<Item = bool>>(bits: &mut I) -> Result<u32> {
        let mut read = 0;
        let length = bits.take(LENGTH_FIELD_BITS).fold(0u32, |acc, bit| {
            read += 1;
            (acc << 1) | u32::from(bit)
        });
        if read < LENGTH_FIELD_BITS {
            return Err(SteganoError::MalformedHeader(format!(
                "carrier ended after {read} of {LENGTH_FIELD_BITS} length bits"
            )));
        }

        Ok(length)
    }

    /// Rebuild `length` bytes from a bit source, most significant bit first.
    ///
    /// `available` is the number of bits the source can still deliver. A declared
    /// length beyond it is rejected before anything is allocated.
    pub fn unframe<I: Iterator<Item = bool>>(
        bits: I,
        length: u32,
        available: usize,
    ) -> Result<Vec<u8>> {
        let required = (length as usize).saturating_mul(8);
        if required > available {
            return Err(SteganoError::CapacityExceeded {
                required,
                available,
            });
        }

        let mut message = Vec::with_capacity(length as usize);
        let mut read = 0;
        {
            let mut writer = BitWriter::endian(&mut message, bitstream_io::BigEndian);
            for bit in bits.take(required) {
                writer.write_bit(bit)?;
                read += 1;
            }
        }
        if read < required {
            return Err(SteganoError::CapacityExceeded {
                required,
                available: read,
            });
        }

        Ok(message)
    }
}
