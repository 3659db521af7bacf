// tests/common/mod.rs
#![allow(dead_code)]

use sonarlog_rs::FormatVariant;
use std::path::PathBuf;
use tempfile::TempDir;

pub const HARDWARE_TIME: u32 = 1_704_067_200;

/// Header values of one synthetic frame, in device units (feet, knots, ms)
#[derive(Debug, Clone)]
pub struct FrameSpec {
    pub survey_type: u16,
    pub frequency_type: u16,
    pub min_range: f32,
    pub max_range: f32,
    pub water_depth: f32,
    pub gps_speed: f32,
    pub gps_heading: f32,
    pub gps_altitude: f32,
    pub x: i32,
    pub y: i32,
    pub hardware_time: u32,
    pub elapsed_ms: u32,
    pub payload: Vec<u8>,
}

impl FrameSpec {
    pub fn new(survey_type: u16, payload_len: usize) -> Self {
        FrameSpec {
            survey_type,
            frequency_type: 0,
            min_range: 0.0,
            max_range: 10.0,
            water_depth: 5.0,
            gps_speed: 0.0,
            gps_heading: 0.0,
            gps_altitude: 0.0,
            x: 0,
            y: 0,
            hardware_time: HARDWARE_TIME,
            elapsed_ms: 0,
            payload: (0..payload_len).map(|i| (i % 256) as u8).collect(),
        }
    }

    pub fn depth(mut self, water_depth: f32) -> Self {
        self.water_depth = water_depth;
        self
    }

    pub fn range(mut self, min_range: f32, max_range: f32) -> Self {
        self.min_range = min_range;
        self.max_range = max_range;
        self
    }

    pub fn elapsed(mut self, elapsed_ms: u32) -> Self {
        self.elapsed_ms = elapsed_ms;
        self
    }

    pub fn position(mut self, x: i32, y: i32, heading: f32) -> Self {
        self.x = x;
        self.y = y;
        self.gps_heading = heading;
        self
    }

    pub fn encode(&self, variant: FormatVariant) -> Vec<u8> {
        let header_size = variant.header_size();
        let mut buf = vec![0u8; header_size];
        let mut put = |name: &str, bytes: &[u8]| {
            let spec = variant.layout().field(name).unwrap();
            buf[spec.offset..spec.offset + bytes.len()].copy_from_slice(bytes);
        };

        let frame_version: u32 = if variant == FormatVariant::Sl3 { 10 } else { 8 };
        put("frame_version", &frame_version.to_le_bytes());
        put("frame_size", &((header_size + self.payload.len()) as u16).to_le_bytes());
        put("survey_type", &self.survey_type.to_le_bytes());
        put("frequency_type", &self.frequency_type.to_le_bytes());
        put("min_range", &self.min_range.to_le_bytes());
        put("max_range", &self.max_range.to_le_bytes());
        put("water_depth", &self.water_depth.to_le_bytes());
        put("gps_speed", &self.gps_speed.to_le_bytes());
        put("gps_heading", &self.gps_heading.to_le_bytes());
        put("gps_altitude", &self.gps_altitude.to_le_bytes());
        put("x", &self.x.to_le_bytes());
        put("y", &self.y.to_le_bytes());
        put("hardware_time", &self.hardware_time.to_le_bytes());
        put("elapsed_ms", &self.elapsed_ms.to_le_bytes());

        buf.extend_from_slice(&self.payload);
        buf
    }
}

/// Whole synthetic log: file header plus frames
pub struct LogBuilder {
    pub variant: FormatVariant,
    pub frames: Vec<FrameSpec>,
}

impl LogBuilder {
    pub fn new(variant: FormatVariant) -> Self {
        LogBuilder { variant, frames: Vec::new() }
    }

    pub fn frame(mut self, frame: FrameSpec) -> Self {
        self.frames.push(frame);
        self
    }

    pub fn frames(mut self, frames: impl IntoIterator<Item = FrameSpec>) -> Self {
        self.frames.extend(frames);
        self
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let version: i16 = if self.variant == FormatVariant::Sl3 { 3 } else { 2 };
        let mut buf = Vec::new();
        for value in [version, 2, 3200, 0] {
            buf.extend_from_slice(&value.to_le_bytes());
        }
        for frame in &self.frames {
            buf.extend_from_slice(&frame.encode(self.variant));
        }
        buf
    }

    /// Write to `dir/name`, returning the path
    pub fn write(&self, dir: &TempDir, name: &str) -> PathBuf {
        write_bytes(dir, name, &self.to_bytes())
    }
}

pub fn write_bytes(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
