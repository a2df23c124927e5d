use bitstream_io::{BigEndian, BitRead, BitReader};
use std::io::{ErrorKind, Read};

/// Iterates over the bits of a byte source, most significant bit of each byte first.
///
/// Stops at the end of the source, a trailing partial byte never occurs.
pub struct BitIterator<R: Read> {
    reader: BitReader<R, BigEndian>,
}

impl<R: Read> BitIterator<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: BitReader::endian(source, BigEndian),
        }
    }
}

impl<R: Read> Iterator for BitIterator<R> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            return match self.reader.read_bit() {
                Ok(bit) => Some(bit),
                Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(_) => None,
            };
        }
    }
}
