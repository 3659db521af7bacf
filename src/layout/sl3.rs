// src/layout/sl3.rs
use super::field::{FieldSpec, FieldType::*};

/// Frame header of `.sl3` logs (168 bytes)
///
/// The trailing `prev_*_offset` slots point back to the latest frame
/// of each channel.
pub(crate) const SL3_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("frame_offset", 0, U32),
    FieldSpec::new("frame_version", 4, U32),
    FieldSpec::new("frame_size", 8, U16),
    FieldSpec::new("prev_frame_size", 10, U16),
    FieldSpec::new("survey_type", 12, U16),
    FieldSpec::new("unknown14", 14, I16),
    FieldSpec::new("id", 16, U32),
    FieldSpec::new("min_range", 20, F32),
    FieldSpec::new("max_range", 24, F32),
    FieldSpec::new("unknown28", 28, F32),
    FieldSpec::new("unknown32", 32, F32),
    FieldSpec::new("unknown36", 36, F32),
    FieldSpec::new("hardware_time", 40, U32),
    FieldSpec::new("echo_size", 44, U32),
    FieldSpec::new("water_depth", 48, F32),
    FieldSpec::new("frequency_type", 52, U16),
    FieldSpec::new("unknown54", 54, F32),
    FieldSpec::new("unknown58", 58, F32),
    FieldSpec::new("unknown62", 62, I16),
    FieldSpec::new("unknown64", 64, F32),
    FieldSpec::new("unknown68", 68, F32),
    FieldSpec::new("unknown72", 72, F32),
    FieldSpec::new("unknown76", 76, F32),
    FieldSpec::new("unknown80", 80, F32),
    FieldSpec::new("gps_speed", 84, F32),
    FieldSpec::new("water_temperature", 88, F32),
    FieldSpec::new("x", 92, I32),
    FieldSpec::new("y", 96, I32),
    FieldSpec::new("water_speed", 100, F32),
    FieldSpec::new("gps_heading", 104, F32),
    FieldSpec::new("gps_altitude", 108, F32),
    FieldSpec::new("magnetic_heading", 112, F32),
    FieldSpec::new("flags", 116, U16),
    FieldSpec::new("unknown118", 118, U16),
    FieldSpec::new("unknown120", 120, U32),
    FieldSpec::new("elapsed_ms", 124, U32),
    FieldSpec::new("prev_primary_offset", 128, U32),
    FieldSpec::new("prev_secondary_offset", 132, U32),
    FieldSpec::new("prev_downscan_offset", 136, U32),
    FieldSpec::new("prev_left_sidescan_offset", 140, U32),
    FieldSpec::new("prev_right_sidescan_offset", 144, U32),
    FieldSpec::new("prev_sidescan_offset", 148, U32),
    FieldSpec::new("unknown152", 152, U32),
    FieldSpec::new("unknown156", 156, U32),
    FieldSpec::new("unknown160", 160, U32),
    FieldSpec::new("prev_3d_offset", 164, U32),
];
