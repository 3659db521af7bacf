// src/reader/batch.rs
use crate::error::{SonarError, Result};
use crate::reader::options::LoadOptions;
use crate::reader::sync_reader::SonarReader;
use log::{debug, warn};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::thread;

impl SonarReader {
    /// Load several independent logs on worker threads
    ///
    /// Each file is decoded start to finish by one worker. Results come
    /// back in the order of `paths`; a failing file does not affect the
    /// others.
    pub fn load_many<P: AsRef<Path>>(paths: &[P], options: &LoadOptions) -> Vec<Result<SonarReader>> {
        if paths.is_empty() {
            return Vec::new();
        }

        let workers = thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1)
            .min(paths.len());
        debug!("Loading {} logs on {} workers", paths.len(), workers);

        let (job_tx, job_rx) = crossbeam_channel::unbounded::<(usize, PathBuf)>();
        let (result_tx, result_rx) = crossbeam_channel::unbounded::<(usize, Result<SonarReader>)>();

        for (index, path) in paths.iter().enumerate() {
            // Receiver is alive until the scope below ends
            let _ = job_tx.send((index, path.as_ref().to_path_buf()));
        }
        drop(job_tx);

        thread::scope(|scope| {
            for _ in 0..workers {
                let job_rx = job_rx.clone();
                let result_tx = result_tx.clone();
                scope.spawn(move || {
                    for (index, path) in job_rx.iter() {
                        let result = SonarReader::load_with(&path, options);
                        if let Err(ref e) = result {
                            warn!("Failed to load {}: {}", path.display(), e);
                        }
                        if result_tx.send((index, result)).is_err() {
                            break;
                        }
                    }
                });
            }
        });
        drop(result_tx);

        let mut slots: Vec<Option<Result<SonarReader>>> = paths.iter().map(|_| None).collect();
        for (index, result) in result_rx.iter() {
            slots[index] = Some(result);
        }

        slots
            .into_iter()
            .map(|slot| {
                slot.unwrap_or_else(|| {
                    Err(SonarError::InvalidArgument("worker exited without a result".to_string()))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{file_bytes, frame_bytes};
    use crate::types::FormatVariant;
    use std::fs;

    #[test]
    fn test_load_many_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = Vec::new();
        for n in 1..=5 {
            let variant = if n % 2 == 0 { FormatVariant::Sl3 } else { FormatVariant::Sl2 };
            let frames: Vec<Vec<u8>> = (0..n).map(|_| frame_bytes(variant, 0, 16)).collect();
            let ext = if variant == FormatVariant::Sl3 { "sl3" } else { "sl2" };
            let path = dir.path().join(format!("log{}.{}", n, ext));
            fs::write(&path, file_bytes(variant, &frames)).unwrap();
            paths.push(path);
        }
        paths.insert(2, dir.path().join("missing.sl2"));

        let results = SonarReader::load_many(&paths, &LoadOptions::default());
        assert_eq!(results.len(), 6);
        assert!(matches!(results[2], Err(SonarError::Io(_))));

        let lens: Vec<usize> = results
            .iter()
            .filter_map(|r| r.as_ref().ok())
            .map(|r| r.len())
            .collect();
        assert_eq!(lens, vec![1, 2, 3, 4, 5]);
        assert_eq!(results[1].as_ref().unwrap().variant(), FormatVariant::Sl3);
    }

    #[test]
    fn test_load_many_empty() {
        let paths: Vec<PathBuf> = Vec::new();
        assert!(SonarReader::load_many(&paths, &LoadOptions::default()).is_empty());
    }
}
