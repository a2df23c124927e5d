//! Minimal view onto a bitmap file: only the pixel data offset is interpreted.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::SteganoError;
use crate::result::Result;

/// Size of the bitmap file header; the pixel data offset lives at its end.
pub const FILE_HEADER_LEN: usize = 14;
const PIXEL_DATA_OFFSET_POS: usize = 10;

pub struct BitmapContainer;

impl BitmapContainer {
    /// Offset of the pixel data section, read from the little-endian field at bytes 10..14.
    pub fn pixel_data_offset(file: &[u8]) -> Result<usize> {
        if file.len() < FILE_HEADER_LEN {
            return Err(SteganoError::MalformedHeader(format!(
                "bitmap needs at least {FILE_HEADER_LEN} header bytes, got {}",
                file.len()
            )));
        }
        let offset = LittleEndian::read_u32(&file[PIXEL_DATA_OFFSET_POS..FILE_HEADER_LEN]) as usize;
        if offset < FILE_HEADER_LEN || offset > file.len() {
            return Err(SteganoError::MalformedHeader(format!(
                "pixel data offset {offset} lies outside of a {} byte file",
                file.len()
            )));
        }

        Ok(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_with_offset(offset: u32, len: usize) -> Vec<u8> {
        let mut file = vec![0; len];
        file[0..2].copy_from_slice(b"BM");
        LittleEndian::write_u32(&mut file[PIXEL_DATA_OFFSET_POS..FILE_HEADER_LEN], offset);
        file
    }

    #[test]
    fn reads_the_little_endian_offset() {
        assert_eq!(
            BitmapContainer::pixel_data_offset(&header_with_offset(54, 100)).unwrap(),
            54
        );
        assert_eq!(
            BitmapContainer::pixel_data_offset(&header_with_offset(0x0102, 0x0200)).unwrap(),
            0x0102
        );
    }

    #[test]
    fn too_short_for_a_header() {
        let result = BitmapContainer::pixel_data_offset(&[b'B', b'M', 0, 0]);
        assert!(matches!(result, Err(SteganoError::MalformedHeader(_))));
    }

    #[test]
    fn offset_beyond_the_file() {
        let result = BitmapContainer::pixel_data_offset(&header_with_offset(500, 100));
        assert!(matches!(result, Err(SteganoError::MalformedHeader(_))));
    }

    #[test]
    fn offset_inside_the_file_header() {
        let result = BitmapContainer::pixel_data_offset(&header_with_offset(3, 100));
        assert!(matches!(result, Err(SteganoError::MalformedHeader(_))));
    }
}
