// src/lib.rs
//! # sonarlog-rs
//!
//! A Rust library for decoding SL2/SL3 fish-finder sonar logs into
//! georeferenced pings and image-like views.
//!
//! ## Features
//!
//! - **Self-framing decode**: frames are split on their own declared size, a truncated trailing frame is tolerated
//! - **Physical units**: ranges and depths in meters, speed in m/s, positions in degrees, absolute timestamps
//! - **Channel catalog**: primary, secondary, downscan and sidescan channels with frame counts
//! - **Views**: raw imagery, resampled water column, bottom region, bottom intensity and side-scan point clouds as `ndarray` arrays
//! - **Loading**: from a path, from bytes, memory-mapped, async, or many files in parallel
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sonarlog_rs::*;
//!
//! fn main() -> Result<()> {
//!     let log = SonarReader::load("trip.sl2")?;
//!     println!("{}", log);
//!
//!     for (channel, frames) in log.channels() {
//!         println!("{}: {} frames", channel, frames);
//!     }
//!
//!     let water = log.water("primary", 300)?;
//!     println!("Water column image: {:?}", water.dim());
//!
//!     let cloud = log.sidescan_points()?;
//!     println!("{} side-scan points", cloud.len());
//!     Ok(())
//! }
//! ```
//!
//! ### Raw records
//!
//! ```rust,no_run
//! use sonarlog_rs::*;
//!
//! fn main() -> Result<()> {
//!     let options = LoadOptions::default().with_clean(false);
//!     let log = SonarReader::load_with("trip.sl3", &options)?;
//!
//!     for record in log.records() {
//!         println!(
//!             "{} {:.6},{:.6} depth {:.1} m",
//!             record.channel, record.latitude, record.longitude, record.water_depth
//!         );
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ### Async Loading
//!
//! ```rust,no_run
//! # #[cfg(feature = "async")]
//! use sonarlog_rs::*;
//!
//! # #[cfg(feature = "async")]
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let log = SonarReader::load_async("trip.sl2", LoadOptions::default()).await?;
//!     println!("{} records", log.len());
//!     Ok(())
//! }
//! # #[cfg(not(feature = "async"))]
//! # fn main() {}
//! ```

// Modules
pub mod error;
pub mod types;
pub mod layout;
pub mod frame;
pub mod raw_data;
pub mod reader;
pub mod record;
pub mod catalog;
pub mod views;

mod utils;

// Re-export commonly used types at the crate root for convenience
pub use error::{SonarError, Result};

pub use types::{
    Channel,
    FormatVariant,
    Frequency,
};

pub use layout::{
    FieldSpec,
    FieldType,
    FieldValue,
    HeaderLayout,
};

pub use frame::{
    ChannelBackRefs,
    FileHeader,
    Frame,
    FrameHeader,
};

pub use raw_data::RawDataReader;

pub use reader::{
    FrameDecoder,
    FrameIter,
    LoadOptions,
    SonarReader,
};

pub use record::EnrichedRecord;
pub use catalog::ChannelCatalog;
pub use views::SidescanPoint;

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use sonarlog_rs::prelude::*;
    //! ```

    pub use crate::error::{SonarError, Result};
    pub use crate::types::{Channel, FormatVariant};
    pub use crate::reader::{LoadOptions, SonarReader};
    pub use crate::record::EnrichedRecord;
    pub use crate::views::SidescanPoint;
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
