// src/layout/field.rs
use crate::error::Result;
use crate::raw_data::RawDataReader;

/// Numeric type of a header field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    U8,
    U16,
    U32,
    I16,
    I32,
    F32,
}

impl FieldType {
    /// Width of this field type in bytes
    pub const fn size(&self) -> usize {
        match self {
            FieldType::U8 => 1,
            FieldType::U16 | FieldType::I16 => 2,
            FieldType::U32 | FieldType::I32 | FieldType::F32 => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FieldType::U8 => "u8",
            FieldType::U16 => "u16",
            FieldType::U32 => "u32",
            FieldType::I16 => "i16",
            FieldType::I32 => "i32",
            FieldType::F32 => "f32",
        }
    }
}

/// One named slot of a frame header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub offset: usize,
    pub field_type: FieldType,
}

impl FieldSpec {
    pub const fn new(name: &'static str, offset: usize, field_type: FieldType) -> Self {
        FieldSpec { name, offset, field_type }
    }

    /// Offset one past the last byte of this field
    pub const fn end(&self) -> usize {
        self.offset + self.field_type.size()
    }

    /// Slots whose meaning has not been worked out yet
    pub fn is_unknown(&self) -> bool {
        self.name.starts_with("unknown")
    }

    /// Decode this field out of a header slice
    pub fn read(&self, header: &[u8]) -> Result<FieldValue> {
        let value = match self.field_type {
            FieldType::U8 => FieldValue::U8(RawDataReader::read_u8(header, self.offset)?),
            FieldType::U16 => FieldValue::U16(RawDataReader::read_u16(header, self.offset)?),
            FieldType::U32 => FieldValue::U32(RawDataReader::read_u32(header, self.offset)?),
            FieldType::I16 => FieldValue::I16(RawDataReader::read_i16(header, self.offset)?),
            FieldType::I32 => FieldValue::I32(RawDataReader::read_i32(header, self.offset)?),
            FieldType::F32 => FieldValue::F32(RawDataReader::read_f32(header, self.offset)?),
        };
        Ok(value)
    }
}

/// A decoded header field, kept with its on-disk type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    U8(u8),
    U16(u16),
    U32(u32),
    I16(i16),
    I32(i32),
    F32(f32),
}

impl FieldValue {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::U8(_) => FieldType::U8,
            FieldValue::U16(_) => FieldType::U16,
            FieldValue::U32(_) => FieldType::U32,
            FieldValue::I16(_) => FieldType::I16,
            FieldValue::I32(_) => FieldType::I32,
            FieldValue::F32(_) => FieldType::F32,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            FieldValue::U8(v) => v as f64,
            FieldValue::U16(v) => v as f64,
            FieldValue::U32(v) => v as f64,
            FieldValue::I16(v) => v as f64,
            FieldValue::I32(v) => v as f64,
            FieldValue::F32(v) => v as f64,
        }
    }

    /// Integer view of the value; floats are truncated toward zero
    pub fn as_i64(&self) -> i64 {
        match *self {
            FieldValue::U8(v) => v as i64,
            FieldValue::U16(v) => v as i64,
            FieldValue::U32(v) => v as i64,
            FieldValue::I16(v) => v as i64,
            FieldValue::I32(v) => v as i64,
            FieldValue::F32(v) => v as i64,
        }
    }
}
