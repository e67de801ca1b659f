//! pixlabel-io - Image I/O for pixlabel
//!
//! Loads images into [`RgbImage`] buffers and saves labeled results.
//! Supported formats are selected with cargo features:
//!
//! - `png-format` (default) - PNG via the `png` crate
//! - `pnm` (default) - PPM, ASCII `P3` and binary `P6`
//!
//! # Example
//!
//! ```
//! use pixlabel_core::{Rgb, RgbImage};
//! use pixlabel_io::{ImageFormat, read_image_mem, write_image_mem};
//!
//! let img = RgbImage::filled(3, 2, Rgb::new(1, 2, 3)).unwrap();
//! let bytes = write_image_mem(&img, ImageFormat::Pnm).unwrap();
//! let back = read_image_mem(&bytes).unwrap();
//! assert!(img.same_pixels(&back));
//! ```

mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use pixlabel_core::RgbImage;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image from a file path, detecting the format from its header.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<RgbImage> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let reader = BufReader::new(File::open(path)?);
    read_with_format(reader, format)
}

/// Read an image from an in-memory byte slice.
pub fn read_image_mem(data: &[u8]) -> IoResult<RgbImage> {
    let format = detect_format_from_bytes(data)?;
    read_with_format(Cursor::new(data), format)
}

/// Write an image to a file path in the given format.
pub fn write_image<P: AsRef<Path>>(image: &RgbImage, path: P, format: ImageFormat) -> IoResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_with_format(image, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into a byte vector.
pub fn write_image_mem(image: &RgbImage, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_with_format(image, &mut buf, format)?;
    Ok(buf)
}

#[allow(unused_variables)]
fn read_with_format<R>(reader: R, format: ImageFormat) -> IoResult<RgbImage>
where
    R: std::io::BufRead + std::io::Seek,
{
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        #[allow(unreachable_patterns)]
        other => Err(IoError::FormatDisabled(other)),
    }
}

#[allow(unused_variables)]
fn write_with_format<W: Write>(image: &RgbImage, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(image, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(image, writer),
        #[allow(unreachable_patterns)]
        other => Err(IoError::FormatDisabled(other)),
    }
}
