// src/raw_data/mod.rs
//! Raw byte access for sonar log buffers
//!
//! [`RawDataReader`] reads little-endian scalars at fixed byte offsets,
//! which is all the header layouts and the file preamble need.
//!
//! # Example
//!
//! ```
//! use sonarlog_rs::raw_data::RawDataReader;
//!
//! let data = [2u8, 0, 10, 0, 0, 0];
//! assert_eq!(RawDataReader::read_u16(&data, 0).unwrap(), 2);
//! assert_eq!(RawDataReader::read_u32(&data, 2).unwrap(), 10);
//! ```

mod reader;

pub use reader::RawDataReader;
