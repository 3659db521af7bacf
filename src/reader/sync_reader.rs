// src/reader/sync_reader.rs
use crate::catalog::{clean_records, ChannelCatalog};
use crate::error::Result;
use crate::frame::FileHeader;
use crate::reader::options::LoadOptions;
use crate::reader::streaming::FrameDecoder;
use crate::record::{enrich_frames, EnrichedRecord};
use crate::types::{Channel, FormatVariant};
use crate::views::{self, SidescanPoint};
use chrono::{DateTime, Utc};
use log::{debug, info};
use ndarray::{Array1, Array2};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "mmap")]
use memmap2::Mmap;
#[cfg(feature = "mmap")]
use std::fs::File;

/// A decoded sonar log: file header, enriched records and their channel catalog
///
/// The record sequence is immutable once built. [`SonarReader::clean`]
/// returns a new value with a recomputed catalog.
#[derive(Debug, Clone)]
pub struct SonarReader {
    path: Option<PathBuf>,
    variant: FormatVariant,
    file_header: FileHeader,
    records: Vec<EnrichedRecord>,
    catalog: ChannelCatalog,
}

impl SonarReader {
    /// Load and decode a log with default options (format from extension, cleaned)
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(path, &LoadOptions::default())
    }

    pub fn load_with(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let variant = options.variant_for(path);

        let mut reader = Self::from_bytes(&bytes, variant, options)?;
        reader.set_path(path.to_path_buf());
        Ok(reader)
    }

    /// Decode straight from a memory mapping of the file
    #[cfg(feature = "mmap")]
    pub fn open_mmap(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        let variant = options.variant_for(path);

        let mut reader = Self::from_bytes(&mmap, variant, options)?;
        reader.set_path(path.to_path_buf());
        Ok(reader)
    }

    /// Decode a complete log held in memory
    pub fn from_bytes(bytes: &[u8], variant: FormatVariant, options: &LoadOptions) -> Result<Self> {
        let file_header = FileHeader::read(bytes)?;
        debug!(
            "{} log: version {}, device {}, block size {}",
            variant, file_header.version, file_header.device_id, file_header.block_size
        );

        let frames = FrameDecoder::new(variant).decode(&bytes[FileHeader::SIZE..])?;
        let decoded = frames.len();
        let mut records = enrich_frames(frames);

        if options.clean {
            records = clean_records(&records);
            info!("Decoded {} frames, {} kept after cleaning", decoded, records.len());
        } else {
            info!("Decoded {} frames", decoded);
        }

        let catalog = ChannelCatalog::from_records(&records);
        Ok(SonarReader {
            path: None,
            variant,
            file_header,
            records,
            catalog,
        })
    }

    /// A copy without unsupported channels and zero-depth frames
    pub fn clean(&self) -> Self {
        let records = clean_records(&self.records);
        info!("Cleaning kept {} of {} frames", records.len(), self.records.len());
        let catalog = ChannelCatalog::from_records(&records);

        SonarReader {
            path: self.path.clone(),
            variant: self.variant,
            file_header: self.file_header,
            records,
            catalog,
        }
    }

    pub(crate) fn set_path(&mut self, path: PathBuf) {
        self.path = Some(path);
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn variant(&self) -> FormatVariant {
        self.variant
    }

    pub fn file_header(&self) -> &FileHeader {
        &self.file_header
    }

    pub fn records(&self) -> &[EnrichedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn catalog(&self) -> &ChannelCatalog {
        &self.catalog
    }

    /// Catalog as `(label, frame count)` pairs in canonical order
    pub fn channels(&self) -> Vec<(&'static str, usize)> {
        self.catalog.iter().map(|(c, n)| (c.label(), n)).collect()
    }

    /// Records of one channel, in file order
    pub fn channel_records(&self, channel: Channel) -> impl Iterator<Item = &EnrichedRecord> + '_ {
        self.records.iter().filter(move |r| r.channel == channel)
    }

    /// `frame_version` of the first record
    pub fn frame_version(&self) -> Option<u32> {
        self.records.first().map(|r| r.header.frame_version)
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.records.first().and_then(|r| r.datetime())
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.records.last().and_then(|r| r.datetime())
    }

    pub fn image(&self, channel: &str) -> Result<Array2<u8>> {
        views::image(&self.records, &self.catalog, channel)
    }

    pub fn points(&self, channel: &str) -> Result<Vec<SidescanPoint>> {
        views::points(&self.records, &self.catalog, channel)
    }

    pub fn sidescan_points(&self) -> Result<Vec<SidescanPoint>> {
        self.points(Channel::Sidescan.label())
    }

    pub fn water(&self, channel: &str, pixels: usize) -> Result<Array2<f64>> {
        views::water(&self.records, &self.catalog, channel, pixels)
    }

    pub fn bottom(&self, channel: &str) -> Result<Array2<u8>> {
        views::bottom(&self.records, &self.catalog, channel)
    }

    pub fn bottom_intensity(&self, channel: &str) -> Result<Array1<u8>> {
        views::bottom_intensity(&self.records, &self.catalog, channel)
    }
}

fn fmt_time(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.to_rfc3339()).unwrap_or_else(|| "n/a".to_string())
}

impl fmt::Display for SonarReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} file", self.variant)?;
        write!(f, "{}", self.catalog)?;
        writeln!(f, "Start time: {}", fmt_time(self.start_time()))?;
        writeln!(f, "End time: {}", fmt_time(self.end_time()))?;

        let frame_version = self
            .frame_version()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "n/a".to_string());
        write!(
            f,
            "File info: version {}, device {}, blocksize {}, frame version {}",
            self.file_header.version, self.file_header.device_id, self.file_header.block_size, frame_version
        )
    }
}
