// src/frame/mod.rs
mod file_header;
mod frame_header;

pub use file_header::FileHeader;
pub use frame_header::{ChannelBackRefs, FrameHeader};

/// One sonar ping as stored on disk: header plus owned intensity samples
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Byte offset of this frame within the frame stream
    pub offset: usize,
    pub header: FrameHeader,
    pub payload: Vec<u8>,
}

impl Frame {
    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }
}
