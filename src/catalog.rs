// src/catalog.rs
use crate::error::{SonarError, Result};
use crate::record::EnrichedRecord;
use crate::types::Channel;
use smallvec::SmallVec;
use std::fmt;

/// Supported channels present in a record sequence, with their frame counts
///
/// Entries follow the canonical order of [`Channel::SUPPORTED`]. The
/// catalog is a snapshot: rebuild it whenever the records change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelCatalog {
    entries: SmallVec<[(Channel, usize); 4]>,
}

impl ChannelCatalog {
    pub fn from_records(records: &[EnrichedRecord]) -> Self {
        let entries = Channel::SUPPORTED
            .iter()
            .filter_map(|&channel| {
                let count = records.iter().filter(|r| r.channel == channel).count();
                (count > 0).then_some((channel, count))
            })
            .collect();

        ChannelCatalog { entries }
    }

    pub fn channels(&self) -> Vec<Channel> {
        self.entries.iter().map(|(channel, _)| *channel).collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|(channel, _)| channel.label().to_string()).collect()
    }

    /// Number of frames of `channel`, 0 when absent
    pub fn count(&self, channel: Channel) -> usize {
        self.entries
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn contains(&self, channel: Channel) -> bool {
        self.entries.iter().any(|(c, _)| *c == channel)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Channel, usize)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a channel label against this catalog
    pub fn resolve(&self, label: &str) -> Result<Channel> {
        Channel::from_label(label)
            .filter(|channel| self.contains(*channel))
            .ok_or_else(|| SonarError::UnknownChannel {
                requested: label.to_string(),
                valid: self.labels(),
            })
    }
}

impl fmt::Display for ChannelCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (channel, count) in self.iter() {
            let label = channel.label();
            let mut chars = label.chars();
            let title: String = match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            };
            writeln!(f, "- {} channel with {} frames", title, count)?;
        }
        Ok(())
    }
}

/// Keep only records whose channel is in [`Channel::SUPPORTED`]
pub fn drop_unsupported_channels(records: &[EnrichedRecord]) -> Vec<EnrichedRecord> {
    records.iter().filter(|r| r.channel.is_supported()).cloned().collect()
}

/// Keep only records with a bottom lock (`water_depth > 0`)
pub fn drop_zero_depth(records: &[EnrichedRecord]) -> Vec<EnrichedRecord> {
    records.iter().filter(|r| r.water_depth > 0.0).cloned().collect()
}

/// Both cleaning filters in one pass
pub fn clean_records(records: &[EnrichedRecord]) -> Vec<EnrichedRecord> {
    records
        .iter()
        .filter(|r| r.channel.is_supported() && r.water_depth > 0.0)
        .cloned()
        .collect()
}
