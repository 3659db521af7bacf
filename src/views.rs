// src/views.rs
//! Read-only projections over an enriched record sequence
//!
//! Every view first selects the records of one channel, failing with
//! [`SonarError::UnknownChannel`] when the catalog does not list it.
//! Rows are records in file order.

use crate::catalog::ChannelCatalog;
use crate::error::{SonarError, Result};
use crate::record::EnrichedRecord;
use crate::types::Channel;
use crate::utils::{linspace, resample_linear};
use bytemuck::{Pod, Zeroable};
use ndarray::{Array1, Array2};

/// One georeferenced side-scan sample
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct SidescanPoint {
    pub x: f64,
    pub y: f64,
    /// Raw intensity
    pub z: f64,
}

/// Records of `label`, after checking it against the catalog
pub fn select<'a>(
    records: &'a [EnrichedRecord],
    catalog: &ChannelCatalog,
    label: &str,
) -> Result<(Channel, Vec<&'a EnrichedRecord>)> {
    let channel = catalog.resolve(label)?;
    let selected = records.iter().filter(|r| r.channel == channel).collect();
    Ok((channel, selected))
}

fn stack_rows<T: Clone>(rows: Vec<Vec<T>>, width: usize) -> Result<Array2<T>> {
    let height = rows.len();
    let flat: Vec<T> = rows.into_iter().flatten().collect();
    Ok(Array2::from_shape_vec((height, width), flat)?)
}

/// Full payloads stacked into a `(frames, samples)` image
pub fn image(records: &[EnrichedRecord], catalog: &ChannelCatalog, label: &str) -> Result<Array2<u8>> {
    let (channel, selected) = select(records, catalog, label)?;
    let width = selected.first().map(|r| r.payload_len()).unwrap_or(0);

    for (row, record) in selected.iter().enumerate() {
        if record.payload_len() != width {
            return Err(SonarError::RaggedPayload {
                channel: channel.label().to_string(),
                expected: width,
                actual: record.payload_len(),
                row,
            });
        }
    }

    let rows = selected.iter().map(|r| r.payload.clone()).collect();
    stack_rows(rows, width)
}

/// Side-scan samples projected to device x/y along each ping's heading
///
/// Sample `i` of a ping lies at range `linspace(min_range, max_range)[i]`:
/// `x + range * cos(heading)`, `y - range * sin(heading)`.
pub fn points(records: &[EnrichedRecord], catalog: &ChannelCatalog, label: &str) -> Result<Vec<SidescanPoint>> {
    let (channel, selected) = select(records, catalog, label)?;
    if !channel.is_sidescan() {
        return Err(SonarError::UnsupportedChannel {
            channel: channel.label().to_string(),
            view: "point cloud",
        });
    }

    let total = selected.iter().map(|r| r.payload_len()).sum();
    let mut out = Vec::with_capacity(total);

    for record in selected {
        let (sin, cos) = record.gps_heading.sin_cos();
        let ranges = linspace(record.min_range, record.max_range, record.payload_len());
        for (range, &intensity) in ranges.iter().zip(record.payload.iter()) {
            out.push(SidescanPoint {
                x: record.x + range * cos,
                y: record.y - range * sin,
                z: intensity as f64,
            });
        }
    }

    Ok(out)
}

/// Water column of every ping resampled to `pixels` samples
pub fn water(
    records: &[EnrichedRecord],
    catalog: &ChannelCatalog,
    label: &str,
    pixels: usize,
) -> Result<Array2<f64>> {
    if pixels == 0 {
        return Err(SonarError::InvalidArgument(
            "water column pixel count must be at least 1".to_string(),
        ));
    }

    let (_, selected) = select(records, catalog, label)?;
    let rows = selected
        .iter()
        .map(|r| resample_linear(r.water_column(), pixels))
        .collect();
    stack_rows(rows, pixels)
}

/// Bottom region of every ping, cut to the shortest one
pub fn bottom(records: &[EnrichedRecord], catalog: &ChannelCatalog, label: &str) -> Result<Array2<u8>> {
    let (_, selected) = select(records, catalog, label)?;
    let width = selected
        .iter()
        .map(|r| r.bottom_region().len())
        .min()
        .unwrap_or(0);

    let rows = selected
        .iter()
        .map(|r| r.bottom_region()[..width].to_vec())
        .collect();
    stack_rows(rows, width)
}

/// Raw sample at the bottom index of every ping
///
/// The index is clamped to the last sample; an empty payload reads as 0.
pub fn bottom_intensity(records: &[EnrichedRecord], catalog: &ChannelCatalog, label: &str) -> Result<Array1<u8>> {
    let (_, selected) = select(records, catalog, label)?;
    Ok(selected
        .iter()
        .map(|r| {
            let last = r.payload_len().saturating_sub(1);
            r.payload.get(r.bottom_index.min(last)).copied().unwrap_or(0)
        })
        .collect())
}
