//! Errors raised while loading or saving PNG and PPM images
//!
//! PPM is parsed by hand here, so its failures carry a short description
//! of what was wrong with the header or raster. PNG failures wrap the
//! `png` crate's own decoding and encoding errors.

use crate::ImageFormat;
use thiserror::Error;

/// Image I/O error
#[derive(Error, Debug)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The leading bytes match neither the PNG signature nor `P3`/`P6`.
    #[error("unrecognized image format")]
    UnknownFormat,

    /// The format was recognized but its cargo feature is off.
    #[error("{0:?} support not enabled")]
    FormatDisabled(ImageFormat),

    /// Truncated or unparsable PPM header or raster.
    #[error("malformed PPM: {0}")]
    MalformedPnm(String),

    /// A netpbm variant this reader does not handle: magic numbers other
    /// than `P3`/`P6`, or maxval other than 255.
    #[error("unsupported PPM: {0}")]
    UnsupportedPnm(String),

    #[cfg(feature = "png-format")]
    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[cfg(feature = "png-format")]
    #[error("PNG encode error: {0}")]
    PngEncode(#[from] png::EncodingError),

    /// Decoded PNG samples that cannot be mapped onto 8-bit RGB.
    #[error("unsupported PNG layout: {0}")]
    UnsupportedPng(String),

    /// The header declared dimensions no [`RgbImage`] can hold.
    ///
    /// [`RgbImage`]: pixlabel_core::RgbImage
    #[error("invalid image: {0}")]
    Image(#[from] pixlabel_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
