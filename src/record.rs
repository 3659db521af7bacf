// src/record.rs
//! Conversion of decoded frames into physical units
//!
//! Enrichment is a pure per-frame mapping. The only value shared across
//! frames is the anchor: the `hardware_time` of the first frame, to which
//! every frame's elapsed time is added to form its timestamp.

use crate::frame::{Frame, FrameHeader};
use crate::types::{Channel, Frequency};
use crate::utils::{x_to_longitude, y_to_latitude};
use chrono::{DateTime, Utc};
use log::{debug, warn};

/// Feet per meter, as used by the devices
pub const FEET_PER_METER: f64 = 3.2808399;

/// Meters per second in one knot, as used by the devices
pub const MPS_PER_KNOT: f64 = 0.5144;

pub fn feet_to_meters(feet: f64) -> f64 {
    feet / FEET_PER_METER
}

pub fn knots_to_mps(knots: f64) -> f64 {
    knots * MPS_PER_KNOT
}

/// Index of the first payload sample below the water column
///
/// `floor(payload_len * water_depth / (max_range - min_range))`, clamped
/// into `[0, payload_len]`. A zero range span (or any other non-finite
/// result) yields `payload_len`, i.e. no bottom region.
pub fn bottom_index(payload_len: usize, water_depth: f64, min_range: f64, max_range: f64) -> usize {
    let index = payload_len as f64 * water_depth / (max_range - min_range);
    if !index.is_finite() {
        return payload_len;
    }
    index.floor().clamp(0.0, payload_len as f64) as usize
}

/// A frame together with its values in physical units
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    /// Byte offset of the frame within the frame stream
    pub offset: usize,
    /// Header exactly as decoded, in device units
    pub header: FrameHeader,
    pub payload: Vec<u8>,
    pub channel: Channel,
    pub frequency: Frequency,
    /// meters
    pub min_range: f64,
    /// meters
    pub max_range: f64,
    /// meters
    pub water_depth: f64,
    /// meters
    pub gps_altitude: f64,
    /// m/s
    pub gps_speed: f64,
    pub gps_heading: f64,
    pub x: f64,
    pub y: f64,
    pub longitude: f64,
    pub latitude: f64,
    /// Seconds since the start of the recording
    pub elapsed: f64,
    /// Anchor hardware time plus `elapsed`, in seconds since the Unix epoch
    pub timestamp: f64,
    pub bottom_index: usize,
}

impl EnrichedRecord {
    pub fn from_frame(frame: Frame, anchor_time: u32) -> Self {
        let Frame { offset, header, payload } = frame;

        let min_range = feet_to_meters(header.min_range as f64);
        let max_range = feet_to_meters(header.max_range as f64);
        let water_depth = feet_to_meters(header.water_depth as f64);
        let elapsed = header.elapsed_ms as f64 / 1000.0;
        let x = header.x as f64;
        let y = header.y as f64;

        EnrichedRecord {
            offset,
            channel: Channel::from_code(header.survey_type),
            frequency: Frequency::from_code(header.frequency_type),
            min_range,
            max_range,
            water_depth,
            gps_altitude: feet_to_meters(header.gps_altitude as f64),
            gps_speed: knots_to_mps(header.gps_speed as f64),
            gps_heading: header.gps_heading as f64,
            x,
            y,
            longitude: x_to_longitude(x),
            latitude: y_to_latitude(y),
            elapsed,
            timestamp: anchor_time as f64 + elapsed,
            bottom_index: bottom_index(payload.len(), water_depth, min_range, max_range),
            header,
            payload,
        }
    }

    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }

    /// Payload samples above the bottom
    pub fn water_column(&self) -> &[u8] {
        &self.payload[..self.bottom_index]
    }

    /// Payload samples at and below the bottom
    pub fn bottom_region(&self) -> &[u8] {
        &self.payload[self.bottom_index..]
    }

    /// Absolute time of the ping, `None` if out of chrono's range
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        if !self.timestamp.is_finite() {
            return None;
        }
        let secs = self.timestamp.floor();
        let nanos = ((self.timestamp - secs) * 1e9).round().min(999_999_999.0) as u32;
        DateTime::from_timestamp(secs as i64, nanos)
    }
}

/// Enrich a decoded frame sequence, anchoring timestamps on the first frame
pub fn enrich_frames(frames: Vec<Frame>) -> Vec<EnrichedRecord> {
    let anchor = match frames.first() {
        Some(frame) => frame.header.hardware_time,
        None => return Vec::new(),
    };
    debug!("Enriching {} frames anchored at hardware time {}", frames.len(), anchor);

    let records: Vec<EnrichedRecord> = frames
        .into_iter()
        .map(|frame| EnrichedRecord::from_frame(frame, anchor))
        .collect();

    let degenerate = records
        .iter()
        .filter(|r| r.max_range == r.min_range)
        .count();
    if degenerate > 0 {
        warn!(
            "{} frames have max_range == min_range; treating them as having no bottom region",
            degenerate
        );
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FormatVariant;

    fn frame_with(variant: FormatVariant, set: impl FnOnce(&mut FrameHeader), payload_len: usize) -> Frame {
        let mut header = FrameHeader::decode(&vec![0u8; variant.header_size()], variant).unwrap();
        set(&mut header);
        Frame { offset: 0, header, payload: (0..payload_len).map(|i| i as u8).collect() }
    }

    #[test]
    fn test_unit_conversions() {
        assert_eq!(feet_to_meters(3.2808399), 1.0);
        assert!((knots_to_mps(10.0) - 5.144).abs() < 1e-12);
        assert_eq!(feet_to_meters(0.0), 0.0);
    }

    #[test]
    fn test_bottom_index_midpoint() {
        assert_eq!(bottom_index(100, 5.0, 0.0, 10.0), 50);
        assert_eq!(bottom_index(3072, 1.0, 0.0, 3.0), 1024);
    }

    #[test]
    fn test_bottom_index_floors_and_clamps() {
        assert_eq!(bottom_index(10, 3.33, 0.0, 10.0), 3);
        assert_eq!(bottom_index(10, 50.0, 0.0, 10.0), 10);
        assert_eq!(bottom_index(10, -5.0, 0.0, 10.0), 0);
        assert_eq!(bottom_index(10, 5.0, 10.0, 0.0), 0);
    }

    #[test]
    fn test_bottom_index_degenerate_range() {
        assert_eq!(bottom_index(64, 5.0, 2.0, 2.0), 64);
        assert_eq!(bottom_index(64, 0.0, 2.0, 2.0), 64);
        assert_eq!(bottom_index(0, 5.0, 0.0, 10.0), 0);
    }

    #[test]
    fn test_enrich_frame_fields() {
        let frame = frame_with(FormatVariant::Sl2, |h| {
            h.survey_type = 2;
            h.frequency_type = 4;
            h.min_range = 0.0;
            h.max_range = 40.0;
            h.water_depth = 10.0;
            h.gps_speed = 2.0;
            h.gps_altitude = 3.2808399;
            h.elapsed_ms = 2500;
            h.hardware_time = 1_000;
        }, 203);

        let record = EnrichedRecord::from_frame(frame, 1_600_000_000);
        assert_eq!(record.channel, Channel::Downscan);
        assert_eq!(record.frequency, Frequency::F800kHz);
        assert_eq!(record.water_depth, 10.0 / FEET_PER_METER);
        assert!((record.max_range - 12.192).abs() < 1e-3);
        assert_eq!(record.gps_speed, 2.0 * MPS_PER_KNOT);
        assert!((record.gps_altitude - 1.0).abs() < 1e-6);
        assert_eq!(record.elapsed, 2.5);
        assert_eq!(record.timestamp, 1_600_000_002.5);
        assert_eq!(record.bottom_index, 50);
        assert_eq!(record.water_column().len(), 50);
        assert_eq!(record.bottom_region().len(), 153);
    }

    #[test]
    fn test_unknown_codes_map_to_unknown() {
        let frame = frame_with(FormatVariant::Sl3, |h| {
            h.survey_type = 42;
            h.frequency_type = 99;
        }, 4);
        let record = EnrichedRecord::from_frame(frame, 0);
        assert_eq!(record.channel, Channel::Unknown);
        assert_eq!(record.frequency, Frequency::Unknown);
    }

    #[test]
    fn test_enrich_anchors_on_first_frame() {
        let frames = vec![
            frame_with(FormatVariant::Sl2, |h| { h.hardware_time = 500; h.elapsed_ms = 0; }, 8),
            frame_with(FormatVariant::Sl2, |h| { h.hardware_time = 9_999; h.elapsed_ms = 1_000; }, 8),
        ];
        let records = enrich_frames(frames);
        assert_eq!(records[0].timestamp, 500.0);
        assert_eq!(records[1].timestamp, 501.0);
        assert!(enrich_frames(Vec::new()).is_empty());
    }

    #[test]
    fn test_datetime() {
        let frame = frame_with(FormatVariant::Sl2, |h| { h.elapsed_ms = 1_250; }, 0);
        let record = EnrichedRecord::from_frame(frame, 1_704_067_200);
        let dt = record.datetime().unwrap();
        assert_eq!(dt.timestamp(), 1_704_067_201);
        assert_eq!(dt.timestamp_subsec_millis(), 250);
    }
}
