// src/types.rs
use std::fmt;
use std::path::Path;

/// Binary record layout of a sonar log
///
/// Selected once from the file extension and never changed while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatVariant {
    /// `.sl2` logs, 144-byte frame header
    Sl2,
    /// `.sl3` logs, 168-byte frame header
    Sl3,
}

impl FormatVariant {
    /// Size of the per-frame header in bytes
    pub fn header_size(&self) -> usize {
        match self {
            FormatVariant::Sl2 => 144,
            FormatVariant::Sl3 => 168,
        }
    }

    /// Byte offset of the little-endian `u16` frame size inside a frame header
    pub fn frame_size_offset(&self) -> usize {
        match self {
            FormatVariant::Sl2 => 28,
            FormatVariant::Sl3 => 8,
        }
    }

    /// Infer the variant from a file extension.
    ///
    /// Any extension containing `sl3` (case-insensitive) selects [`FormatVariant::Sl3`],
    /// everything else falls back to [`FormatVariant::Sl2`].
    pub fn from_extension(extension: &str) -> Self {
        if extension.to_ascii_lowercase().contains("sl3") {
            FormatVariant::Sl3
        } else {
            FormatVariant::Sl2
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FormatVariant::Sl2)
    }

    pub fn name(&self) -> &'static str {
        match self {
            FormatVariant::Sl2 => "SL2",
            FormatVariant::Sl3 => "SL3",
        }
    }
}

impl fmt::Display for FormatVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Transducer/beam that produced a frame (the `survey_type` code)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    Primary,
    Secondary,
    Downscan,
    LeftSidescan,
    RightSidescan,
    Sidescan,
    Unknown,
}

impl Channel {
    /// Channels the catalog and the views work with, in canonical order
    pub const SUPPORTED: [Channel; 4] = [
        Channel::Primary,
        Channel::Secondary,
        Channel::Downscan,
        Channel::Sidescan,
    ];

    pub fn from_code(code: u16) -> Self {
        match code {
            0 => Channel::Primary,
            1 => Channel::Secondary,
            2 => Channel::Downscan,
            3 => Channel::LeftSidescan,
            4 => Channel::RightSidescan,
            5 => Channel::Sidescan,
            _ => Channel::Unknown,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "primary" => Some(Channel::Primary),
            "secondary" => Some(Channel::Secondary),
            "downscan" => Some(Channel::Downscan),
            "left_sidescan" => Some(Channel::LeftSidescan),
            "right_sidescan" => Some(Channel::RightSidescan),
            "sidescan" => Some(Channel::Sidescan),
            "unknown" => Some(Channel::Unknown),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Channel::Primary => "primary",
            Channel::Secondary => "secondary",
            Channel::Downscan => "downscan",
            Channel::LeftSidescan => "left_sidescan",
            Channel::RightSidescan => "right_sidescan",
            Channel::Sidescan => "sidescan",
            Channel::Unknown => "unknown",
        }
    }

    pub fn is_supported(&self) -> bool {
        Self::SUPPORTED.contains(self)
    }

    /// Whether pings of this channel look sideways and can be georeferenced
    pub fn is_sidescan(&self) -> bool {
        matches!(self, Channel::Sidescan)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Transducer frequency (the `frequency_type` code)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    F200kHz,
    F50kHz,
    F83kHz,
    F455kHz,
    F800kHz,
    F38kHz,
    F28kHz,
    F130kHz210kHz,
    F90kHz150kHz,
    F40kHz60kHz,
    F25kHz45kHz,
    Unknown,
}

impl Frequency {
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => Frequency::F200kHz,
            1 => Frequency::F50kHz,
            2 => Frequency::F83kHz,
            3 => Frequency::F455kHz,
            4 => Frequency::F800kHz,
            5 => Frequency::F38kHz,
            6 => Frequency::F28kHz,
            7 => Frequency::F130kHz210kHz,
            8 => Frequency::F90kHz150kHz,
            9 => Frequency::F40kHz60kHz,
            10 => Frequency::F25kHz45kHz,
            _ => Frequency::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::F200kHz => "200kHz",
            Frequency::F50kHz => "50kHz",
            Frequency::F83kHz => "83kHz",
            Frequency::F455kHz => "455kHz",
            Frequency::F800kHz => "800kHz",
            Frequency::F38kHz => "38kHz",
            Frequency::F28kHz => "28kHz",
            Frequency::F130kHz210kHz => "130kHz_210kHz",
            Frequency::F90kHz150kHz => "90kHz_150kHz",
            Frequency::F40kHz60kHz => "40kHz_60kHz",
            Frequency::F25kHz45kHz => "25kHz_45kHz",
            Frequency::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(FormatVariant::from_path("log.sl3"), FormatVariant::Sl3);
        assert_eq!(FormatVariant::from_path("LOG.SL3"), FormatVariant::Sl3);
        assert_eq!(FormatVariant::from_path("log.sl2"), FormatVariant::Sl2);
        assert_eq!(FormatVariant::from_path("log.bin"), FormatVariant::Sl2);
        assert_eq!(FormatVariant::from_path("no_extension"), FormatVariant::Sl2);
    }

    #[test]
    fn test_format_sizes() {
        assert_eq!(FormatVariant::Sl2.header_size(), 144);
        assert_eq!(FormatVariant::Sl3.header_size(), 168);
        assert_eq!(FormatVariant::Sl2.frame_size_offset(), 28);
        assert_eq!(FormatVariant::Sl3.frame_size_offset(), 8);
    }

    #[test]
    fn test_channel_codes() {
        assert_eq!(Channel::from_code(0), Channel::Primary);
        assert_eq!(Channel::from_code(5), Channel::Sidescan);
        assert_eq!(Channel::from_code(9), Channel::Unknown);
        assert_eq!(Channel::from_code(3).label(), "left_sidescan");

        for code in 0..=6u16 {
            let channel = Channel::from_code(code);
            assert_eq!(Channel::from_label(channel.label()), Some(channel));
        }
        assert_eq!(Channel::from_label("typo"), None);
    }

    #[test]
    fn test_supported_channels() {
        assert!(Channel::Primary.is_supported());
        assert!(Channel::Sidescan.is_supported());
        assert!(!Channel::LeftSidescan.is_supported());
        assert!(!Channel::Unknown.is_supported());
    }

    #[test]
    fn test_frequency_labels() {
        assert_eq!(Frequency::from_code(0).label(), "200kHz");
        assert_eq!(Frequency::from_code(7).label(), "130kHz_210kHz");
        assert_eq!(Frequency::from_code(10).label(), "25kHz_45kHz");
        assert_eq!(Frequency::from_code(11).label(), "unknown");
    }
}
