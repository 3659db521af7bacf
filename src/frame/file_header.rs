// src/frame/file_header.rs
use crate::error::{SonarError, Result};
use crate::raw_data::RawDataReader;
use bytemuck::{Pod, Zeroable};

/// File-level preamble preceding the frame stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct FileHeader {
    /// Log format version (2 for `.sl2`, 3 for `.sl3`)
    pub version: i16,
    pub device_id: i16,
    pub block_size: i16,
    pub reserved: i16,
}

impl FileHeader {
    pub const SIZE: usize = 8;

    /// Read the preamble from the first [`FileHeader::SIZE`] bytes of `buf`
    pub fn read(buf: &[u8]) -> Result<Self> {
        if buf.len() < Self::SIZE {
            return Err(SonarError::TruncatedFile {
                needed: Self::SIZE,
                available: buf.len(),
            });
        }

        let values = RawDataReader::read_i16_values(buf, 0, 4)?;
        Ok(FileHeader {
            version: values[0],
            device_id: values[1],
            block_size: values[2],
            reserved: values[3],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_file_header() {
        let buf = [2u8, 0, 1, 0, 0xB2, 0x0C, 0, 0, 0xAA, 0xBB];
        let header = FileHeader::read(&buf).unwrap();

        assert_eq!(header.version, 2);
        assert_eq!(header.device_id, 1);
        assert_eq!(header.block_size, 3250);
        assert_eq!(header.reserved, 0);
    }

    #[test]
    fn test_negative_fields() {
        let buf = [0xFF, 0xFF, 0, 0, 0, 0, 0, 0x80];
        let header = FileHeader::read(&buf).unwrap();
        assert_eq!(header.version, -1);
        assert_eq!(header.reserved, i16::MIN);
    }

    #[test]
    fn test_truncated_file_header() {
        match FileHeader::read(&[3, 0, 1]) {
            Err(SonarError::TruncatedFile { needed, available }) => {
                assert_eq!(needed, 8);
                assert_eq!(available, 3);
            }
            other => panic!("Expected TruncatedFile, got {:?}", other),
        }
        assert!(FileHeader::read(&[]).is_err());
    }

    #[test]
    fn test_pod_size() {
        assert_eq!(std::mem::size_of::<FileHeader>(), FileHeader::SIZE);
        let zero: FileHeader = bytemuck::Zeroable::zeroed();
        assert_eq!(zero, FileHeader::default());
    }
}
