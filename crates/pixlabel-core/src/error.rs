//! Error types for pixlabel-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.
//!
//! Only buffer construction and checked pixel access are fallible. The
//! labeling passes treat out-of-range coordinates as programming errors
//! and panic at the point of access instead.

use thiserror::Error;

/// pixlabel error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Pixel vector length does not match the declared dimensions
    #[error("pixel count mismatch: expected {expected}, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },
}

/// Result type alias for pixlabel operations
pub type Result<T> = std::result::Result<T, Error>;
