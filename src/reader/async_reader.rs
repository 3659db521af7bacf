// src/reader/async_reader.rs
use crate::error::Result;
use crate::reader::options::LoadOptions;
use crate::reader::sync_reader::SonarReader;
use std::io;
use std::path::Path;
use tokio::task;

impl SonarReader {
    /// Read a log with `tokio::fs` and decode it on a blocking task
    pub async fn load_async(path: impl AsRef<Path>, options: LoadOptions) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let bytes = tokio::fs::read(&path).await?;
        let variant = options.variant_for(&path);

        let decoded = task::spawn_blocking(move || {
            SonarReader::from_bytes(&bytes, variant, &options).map(|mut reader| {
                reader.set_path(path);
                reader
            })
        })
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

        decoded
    }
}
