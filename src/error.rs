// src/error.rs
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SonarError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Truncated file: needed {needed} bytes, found {available}")]
    TruncatedFile { needed: usize, available: usize },

    #[error("Malformed frame at offset {offset}: declared size {frame_size} is smaller than the {header_size}-byte header")]
    MalformedFrame { offset: usize, frame_size: usize, header_size: usize },

    #[error("Unknown channel '{requested}', valid channels: {}", valid.join(", "))]
    UnknownChannel { requested: String, valid: Vec<String> },

    #[error("Channel '{channel}' does not support the {view} view")]
    UnsupportedChannel { channel: String, view: &'static str },

    #[error("Ragged payload in channel '{channel}': row {row} has {actual} samples, expected {expected}")]
    RaggedPayload { channel: String, expected: usize, actual: usize, row: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

pub type Result<T> = std::result::Result<T, SonarError>;
