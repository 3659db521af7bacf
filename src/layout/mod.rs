// src/layout/mod.rs
//! Static byte layouts of the two frame header variants
//!
//! Each layout is a table of [`FieldSpec`]s (name, offset, type). Slots
//! named `unknownNN` are decoded and kept like any other field so that a
//! newly understood field only needs a rename here.

mod field;
mod sl2;
mod sl3;

pub use field::{FieldSpec, FieldType, FieldValue};

use crate::error::Result;
use crate::types::FormatVariant;

/// Byte layout of one frame header variant
#[derive(Debug)]
pub struct HeaderLayout {
    pub variant: FormatVariant,
    pub size: usize,
    pub frame_size_offset: usize,
    pub fields: &'static [FieldSpec],
}

pub static SL2_LAYOUT: HeaderLayout = HeaderLayout {
    variant: FormatVariant::Sl2,
    size: 144,
    frame_size_offset: 28,
    fields: sl2::SL2_FIELDS,
};

pub static SL3_LAYOUT: HeaderLayout = HeaderLayout {
    variant: FormatVariant::Sl3,
    size: 168,
    frame_size_offset: 8,
    fields: sl3::SL3_FIELDS,
};

impl HeaderLayout {
    pub fn for_variant(variant: FormatVariant) -> &'static HeaderLayout {
        match variant {
            FormatVariant::Sl2 => &SL2_LAYOUT,
            FormatVariant::Sl3 => &SL3_LAYOUT,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|spec| spec.name == name)
    }

    /// Decode every slot of `header`, in table order
    pub fn decode(&self, header: &[u8]) -> Result<Vec<FieldValue>> {
        self.fields.iter().map(|spec| spec.read(header)).collect()
    }
}

impl FormatVariant {
    pub fn layout(&self) -> &'static HeaderLayout {
        HeaderLayout::for_variant(*self)
    }
}
