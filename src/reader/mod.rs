// src/reader/mod.rs
mod options;
mod streaming;
mod sync_reader;
mod batch;
#[cfg(feature = "async")]
mod async_reader;

pub use options::LoadOptions;
pub use streaming::{FrameDecoder, FrameIter};
pub use sync_reader::SonarReader;
