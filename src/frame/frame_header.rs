// src/frame/frame_header.rs
use crate::error::{SonarError, Result};
use crate::layout::{FieldSpec, FieldValue, HeaderLayout};
use crate::types::FormatVariant;

/// Back references to the most recent frame of each channel (`.sl3` only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelBackRefs {
    pub primary: u32,
    pub secondary: u32,
    pub downscan: u32,
    pub left_sidescan: u32,
    pub right_sidescan: u32,
    pub sidescan: u32,
    pub three_d: u32,
}

/// Decoded frame header, values in device units (feet, knots, milliseconds)
#[derive(Debug, Clone, PartialEq)]
pub struct FrameHeader {
    pub variant: FormatVariant,
    pub frame_offset: u32,
    pub frame_version: u32,
    pub frame_size: u16,
    pub prev_frame_size: u16,
    pub survey_type: u16,
    /// `packet_size` in `.sl2`, `echo_size` in `.sl3`
    pub packet_size: u32,
    pub id: u32,
    pub min_range: f32,
    pub max_range: f32,
    pub frequency_type: u16,
    pub hardware_time: u32,
    pub water_depth: f32,
    pub gps_speed: f32,
    pub water_temperature: f32,
    pub x: i32,
    pub y: i32,
    pub water_speed: f32,
    pub gps_heading: f32,
    pub gps_altitude: f32,
    pub magnetic_heading: f32,
    pub flags: u16,
    pub elapsed_ms: u32,
    pub back_refs: Option<ChannelBackRefs>,
    values: Vec<FieldValue>,
}

/// Typed lookups over one decoded slot table
struct Slots<'a> {
    layout: &'a HeaderLayout,
    values: &'a [FieldValue],
}

impl Slots<'_> {
    fn get(&self, name: &str) -> Option<FieldValue> {
        self.layout.index_of(name).map(|i| self.values[i])
    }

    fn u16(&self, name: &str) -> u16 {
        match self.get(name) {
            Some(FieldValue::U16(v)) => v,
            Some(other) => other.as_i64() as u16,
            None => 0,
        }
    }

    fn u32(&self, name: &str) -> u32 {
        match self.get(name) {
            Some(FieldValue::U32(v)) => v,
            Some(other) => other.as_i64() as u32,
            None => 0,
        }
    }

    fn i32(&self, name: &str) -> i32 {
        match self.get(name) {
            Some(FieldValue::I32(v)) => v,
            Some(other) => other.as_i64() as i32,
            None => 0,
        }
    }

    fn f32(&self, name: &str) -> f32 {
        match self.get(name) {
            Some(FieldValue::F32(v)) => v,
            Some(other) => other.as_f64() as f32,
            None => 0.0,
        }
    }
}

impl FrameHeader {
    /// Decode a header slice laid out as `variant`
    pub fn decode(header: &[u8], variant: FormatVariant) -> Result<Self> {
        let layout = variant.layout();
        if header.len() < layout.size {
            return Err(SonarError::TruncatedFile {
                needed: layout.size,
                available: header.len(),
            });
        }

        let values = layout.decode(header)?;
        let slots = Slots { layout, values: &values };

        let (packet_size, back_refs) = match variant {
            FormatVariant::Sl2 => (slots.u16("packet_size") as u32, None),
            FormatVariant::Sl3 => (
                slots.u32("echo_size"),
                Some(ChannelBackRefs {
                    primary: slots.u32("prev_primary_offset"),
                    secondary: slots.u32("prev_secondary_offset"),
                    downscan: slots.u32("prev_downscan_offset"),
                    left_sidescan: slots.u32("prev_left_sidescan_offset"),
                    right_sidescan: slots.u32("prev_right_sidescan_offset"),
                    sidescan: slots.u32("prev_sidescan_offset"),
                    three_d: slots.u32("prev_3d_offset"),
                }),
            ),
        };

        Ok(FrameHeader {
            variant,
            frame_offset: slots.u32("frame_offset"),
            frame_version: slots.u32("frame_version"),
            frame_size: slots.u16("frame_size"),
            prev_frame_size: slots.u16("prev_frame_size"),
            survey_type: slots.u16("survey_type"),
            packet_size,
            id: slots.u32("id"),
            min_range: slots.f32("min_range"),
            max_range: slots.f32("max_range"),
            frequency_type: slots.u16("frequency_type"),
            hardware_time: slots.u32("hardware_time"),
            water_depth: slots.f32("water_depth"),
            gps_speed: slots.f32("gps_speed"),
            water_temperature: slots.f32("water_temperature"),
            x: slots.i32("x"),
            y: slots.i32("y"),
            water_speed: slots.f32("water_speed"),
            gps_heading: slots.f32("gps_heading"),
            gps_altitude: slots.f32("gps_altitude"),
            magnetic_heading: slots.f32("magnetic_heading"),
            flags: slots.u16("flags"),
            elapsed_ms: slots.u32("elapsed_ms"),
            back_refs,
            values,
        })
    }

    pub fn header_size(&self) -> usize {
        self.variant.header_size()
    }

    /// Raw value of any slot, including the `unknownNN` ones
    pub fn get(&self, name: &str) -> Option<FieldValue> {
        self.variant.layout().index_of(name).map(|i| self.values[i])
    }

    /// Every slot with its spec, in layout order
    pub fn fields(&self) -> impl Iterator<Item = (&'static FieldSpec, FieldValue)> + '_ {
        self.variant.layout().fields.iter().zip(self.values.iter().copied())
    }

    /// Only the slots whose meaning is not known yet
    pub fn unknown_fields(&self) -> impl Iterator<Item = (&'static FieldSpec, FieldValue)> + '_ {
        self.fields().filter(|(spec, _)| spec.is_unknown())
    }
}
