//! Crate-level error type and `Result` alias.
//! Wraps image decode/encode and I/O failures, and names the arithmetic faults
//! (empty source, degenerate target) that would otherwise surface as a panic
//! deep inside the resampler. Every variant is fatal to a run.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image encoding error: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: u32 },

    #[error("Source image has no pixels: {width}x{height}")]
    EmptySource { width: u32, height: u32 },

    #[error("Resizing to {target} collapses a side to zero: {width}x{height}")]
    DegenerateSize { width: u32, height: u32, target: u32 },

    #[error("{width}x{height} image does not fit a {size}x{size} canvas")]
    DoesNotFit { width: u32, height: u32, size: u32 },
}

impl Error {
    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }
}
