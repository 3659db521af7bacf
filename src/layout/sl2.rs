// src/layout/sl2.rs
use super::field::{FieldSpec, FieldType::*};

/// Frame header of `.sl2` logs (144 bytes)
pub(crate) const SL2_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("frame_offset", 0, U32),
    FieldSpec::new("frame_version", 4, U32),
    FieldSpec::new("unknown8", 8, F32),
    FieldSpec::new("unknown12", 12, F32),
    FieldSpec::new("unknown16", 16, F32),
    FieldSpec::new("unknown20", 20, F32),
    FieldSpec::new("unknown24", 24, F32),
    FieldSpec::new("frame_size", 28, U16),
    FieldSpec::new("prev_frame_size", 30, U16),
    FieldSpec::new("survey_type", 32, U16),
    FieldSpec::new("packet_size", 34, U16),
    FieldSpec::new("id", 36, U32),
    FieldSpec::new("min_range", 40, F32),
    FieldSpec::new("max_range", 44, F32),
    FieldSpec::new("unknown48", 48, F32),
    FieldSpec::new("unknown52", 52, U8),
    FieldSpec::new("frequency_type", 53, U16),
    FieldSpec::new("unknown55", 55, U8),
    FieldSpec::new("unknown56", 56, F32),
    FieldSpec::new("hardware_time", 60, U32),
    FieldSpec::new("water_depth", 64, F32),
    FieldSpec::new("unknown68", 68, F32),
    FieldSpec::new("unknown72", 72, F32),
    FieldSpec::new("unknown76", 76, F32),
    FieldSpec::new("unknown80", 80, F32),
    FieldSpec::new("unknown84", 84, F32),
    FieldSpec::new("unknown88", 88, F32),
    FieldSpec::new("unknown92", 92, F32),
    FieldSpec::new("unknown96", 96, F32),
    FieldSpec::new("gps_speed", 100, F32),
    FieldSpec::new("water_temperature", 104, F32),
    FieldSpec::new("x", 108, I32),
    FieldSpec::new("y", 112, I32),
    FieldSpec::new("water_speed", 116, F32),
    FieldSpec::new("gps_heading", 120, F32),
    FieldSpec::new("gps_altitude", 124, F32),
    FieldSpec::new("magnetic_heading", 128, F32),
    FieldSpec::new("flags", 132, U16),
    FieldSpec::new("unknown134", 134, U16),
    FieldSpec::new("unknown136", 136, F32),
    FieldSpec::new("elapsed_ms", 140, U32),
];
