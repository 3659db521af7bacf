// src/reader/streaming.rs
use crate::error::{SonarError, Result};
use crate::frame::{Frame, FrameHeader};
use crate::raw_data::RawDataReader;
use crate::types::FormatVariant;
use log::{debug, trace};

/// Lazy iterator over the frames of a frame stream
///
/// The stream is the file content after the 8-byte file header. Each frame
/// declares its own size, which is the only framing signal. Iteration ends
/// when fewer than a header's worth of bytes remain or when the last frame
/// would run past the end of the buffer; both are silent. A declared size
/// smaller than the header yields [`SonarError::MalformedFrame`] once, after
/// which the iterator is exhausted.
///
/// # Example
///
/// ```no_run
/// use sonarlog_rs::reader::FrameIter;
/// use sonarlog_rs::FormatVariant;
///
/// let bytes = std::fs::read("trip.sl2").unwrap();
/// for frame in FrameIter::new(&bytes[8..], FormatVariant::Sl2) {
///     let frame = frame.unwrap();
///     println!("{} samples at offset {}", frame.payload_len(), frame.offset);
/// }
/// ```
pub struct FrameIter<'a> {
    buf: &'a [u8],
    variant: FormatVariant,
    cursor: usize,
    done: bool,
}

impl<'a> FrameIter<'a> {
    pub fn new(buf: &'a [u8], variant: FormatVariant) -> Self {
        FrameIter {
            buf,
            variant,
            cursor: 0,
            done: false,
        }
    }

    /// Offset of the next frame within the stream
    pub fn position(&self) -> usize {
        self.cursor
    }

    fn next_frame(&mut self) -> Result<Option<Frame>> {
        let header_size = self.variant.header_size();
        let remaining = self.buf.len() - self.cursor;

        if remaining < header_size {
            if remaining > 0 {
                debug!(
                    "Discarding {} trailing bytes at offset {} (shorter than a {} header)",
                    remaining, self.cursor, self.variant
                );
            }
            return Ok(None);
        }

        let offset = self.cursor;
        let frame_size = RawDataReader::read_u16(self.buf, offset + self.variant.frame_size_offset())? as usize;

        if frame_size < header_size {
            return Err(SonarError::MalformedFrame {
                offset,
                frame_size,
                header_size,
            });
        }

        if frame_size > remaining {
            debug!(
                "Dropping truncated trailing frame at offset {}: declares {} bytes, {} available",
                offset, frame_size, remaining
            );
            return Ok(None);
        }

        let header_bytes = &self.buf[offset..offset + header_size];
        let header = FrameHeader::decode(header_bytes, self.variant)?;
        let payload = self.buf[offset + header_size..offset + frame_size].to_vec();

        trace!("Frame at offset {}: {} bytes, survey type {}", offset, frame_size, header.survey_type);

        self.cursor += frame_size;
        Ok(Some(Frame { offset, header, payload }))
    }
}

impl Iterator for FrameIter<'_> {
    type Item = Result<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.next_frame() {
            Ok(Some(frame)) => Some(Ok(frame)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Eager frame stream decoder for one format variant
#[derive(Debug, Clone, Copy)]
pub struct FrameDecoder {
    variant: FormatVariant,
}

impl FrameDecoder {
    pub fn new(variant: FormatVariant) -> Self {
        FrameDecoder { variant }
    }

    pub fn variant(&self) -> FormatVariant {
        self.variant
    }

    pub fn iter<'a>(&self, buf: &'a [u8]) -> FrameIter<'a> {
        FrameIter::new(buf, self.variant)
    }

    /// Decode the whole stream, failing on the first malformed frame
    pub fn decode(&self, buf: &[u8]) -> Result<Vec<Frame>> {
        self.iter(buf).collect()
    }
}
