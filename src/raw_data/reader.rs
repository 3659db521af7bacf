// src/raw_data/reader.rs
use crate::error::{SonarError, Result};
use byteorder::{ByteOrder, LittleEndian};

/// Helper functions for reading little-endian values out of a byte buffer
///
/// Both sonar log variants store every multi-byte value little-endian.
/// All reads are positional: the caller passes the byte offset of the
/// value and gets a `TruncatedFile` error instead of a panic when the
/// buffer is too short.
pub struct RawDataReader;

impl RawDataReader {
    /// Borrow `len` bytes starting at `offset`
    ///
    /// # Example
    ///
    /// ```
    /// use sonarlog_rs::raw_data::RawDataReader;
    ///
    /// let data = [1u8, 2, 3, 4];
    /// assert_eq!(RawDataReader::slice_at(&data, 1, 2).unwrap(), &[2, 3]);
    /// assert!(RawDataReader::slice_at(&data, 3, 2).is_err());
    /// ```
    pub fn slice_at(buf: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
        let end = offset.checked_add(len).ok_or(SonarError::TruncatedFile {
            needed: usize::MAX,
            available: buf.len(),
        })?;

        buf.get(offset..end).ok_or(SonarError::TruncatedFile {
            needed: end,
            available: buf.len(),
        })
    }

    /// Read a single u8 value
    pub fn read_u8(buf: &[u8], offset: usize) -> Result<u8> {
        Ok(Self::slice_at(buf, offset, 1)?[0])
    }

    /// Read a single little-endian u16 value
    pub fn read_u16(buf: &[u8], offset: usize) -> Result<u16> {
        Ok(LittleEndian::read_u16(Self::slice_at(buf, offset, 2)?))
    }

    /// Read a single little-endian i16 value
    pub fn read_i16(buf: &[u8], offset: usize) -> Result<i16> {
        Ok(LittleEndian::read_i16(Self::slice_at(buf, offset, 2)?))
    }

    /// Read a single little-endian u32 value
    pub fn read_u32(buf: &[u8], offset: usize) -> Result<u32> {
        Ok(LittleEndian::read_u32(Self::slice_at(buf, offset, 4)?))
    }

    /// Read a single little-endian i32 value
    pub fn read_i32(buf: &[u8], offset: usize) -> Result<i32> {
        Ok(LittleEndian::read_i32(Self::slice_at(buf, offset, 4)?))
    }

    /// Read a single little-endian f32 value
    pub fn read_f32(buf: &[u8], offset: usize) -> Result<f32> {
        Ok(LittleEndian::read_f32(Self::slice_at(buf, offset, 4)?))
    }

    /// Read `count` consecutive little-endian i16 values starting at `offset`
    pub fn read_i16_values(buf: &[u8], offset: usize, count: usize) -> Result<Vec<i16>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let bytes = Self::slice_at(buf, offset, count * 2)?;
        let mut values = vec![0i16; count];
        LittleEndian::read_i16_into(bytes, &mut values);
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_integers_little_endian() {
        let data = vec![
            0xFF,        // padding
            1, 0,        // u16 1
            2, 0, 0, 0,  // u32 2
            0xFE, 0xFF, 0xFF, 0xFF, // i32 -2
        ];

        assert_eq!(RawDataReader::read_u8(&data, 0).unwrap(), 0xFF);
        assert_eq!(RawDataReader::read_u16(&data, 1).unwrap(), 1);
        assert_eq!(RawDataReader::read_u32(&data, 3).unwrap(), 2);
        assert_eq!(RawDataReader::read_i32(&data, 7).unwrap(), -2);
    }

    #[test]
    fn test_read_floats() {
        let data: Vec<u8> = vec![
            0, 0, 128, 63,  // 1.0 in f32 little-endian
            0, 0, 0, 64,    // 2.0 in f32 little-endian
        ];

        assert_eq!(RawDataReader::read_f32(&data, 0).unwrap(), 1.0);
        assert_eq!(RawDataReader::read_f32(&data, 4).unwrap(), 2.0);
    }

    #[test]
    fn test_read_i16_values() {
        let data = vec![2, 0, 3, 0, 0xFF, 0xFF, 0, 0];
        let values = RawDataReader::read_i16_values(&data, 0, 4).unwrap();
        assert_eq!(values, vec![2, 3, -1, 0]);

        assert!(RawDataReader::read_i16_values(&data, 0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_out_of_bounds_is_error() {
        let data = vec![1u8, 2, 3];

        match RawDataReader::read_u32(&data, 0) {
            Err(SonarError::TruncatedFile { needed, available }) => {
                assert_eq!(needed, 4);
                assert_eq!(available, 3);
            }
            other => panic!("Expected TruncatedFile, got {:?}", other),
        }

        assert!(RawDataReader::read_u16(&data, 2).is_err());
        assert!(RawDataReader::read_u8(&data, usize::MAX).is_err());
    }
}
