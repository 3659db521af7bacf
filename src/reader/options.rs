// src/reader/options.rs
use crate::types::FormatVariant;

/// Options controlling how a log is loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Drop unsupported channels and frames without a bottom lock
    pub clean: bool,
    /// Force a format instead of inferring it from the file extension
    pub format: Option<FormatVariant>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            clean: true,
            format: None,
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    pub fn with_format(mut self, format: FormatVariant) -> Self {
        self.format = Some(format);
        self
    }

    /// Format to decode `path` with
    pub(crate) fn variant_for(&self, path: &std::path::Path) -> FormatVariant {
        self.format.unwrap_or_else(|| FormatVariant::from_path(path))
    }
}
