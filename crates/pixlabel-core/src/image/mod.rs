//! RgbImage - The in-memory pixel buffer
//!
//! `RgbImage` is the concrete buffer that labeling reads from and writes
//! back into. It stores one [`Rgb`] per pixel in row-major order, so the
//! index of `(x, y)` in [`RgbImage::pixels`] is exactly its [`PixelId`].
//!
//! Dimensions are validated once, at construction. Everything downstream
//! may assume `width > 0`, `height > 0` and `width * height` fitting in a
//! [`PixelId`].
//!
//! [`PixelId`]: crate::PixelId

mod access;

pub use access::{PixelSink, PixelSource};

use crate::color::Rgb;
use crate::error::{Error, Result};
use std::collections::HashSet;

/// Owned RGB raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: u32,
    height: u32,
    data: Vec<Rgb>,
}

impl RgbImage {
    /// Create a new black image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero or
    /// the pixel count does not fit in a `u32`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Rgb::BLACK)
    }

    /// Create an image with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![color; len],
        })
    }

    /// Wrap an existing row-major pixel vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelCountMismatch`] if `pixels.len()` is not
    /// `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self> {
        let len = checked_len(width, height)?;
        if pixels.len() != len {
            return Err(Error::PixelCountMismatch {
                expected: len,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data: pixels,
        })
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Rgb,
    {
        let len = checked_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Pixel count for `width x height`, validated the same way every
    /// constructor validates it. Decoders call this before allocating.
    pub fn checked_len(width: u32, height: u32) -> Result<usize> {
        checked_len(width, height)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for a constructed image; present for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Rgb] {
        &self.data
    }

    /// Mutable row-major pixel slice.
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.data
    }

    /// One row of pixels, or `None` if `y` is out of range.
    pub fn row(&self, y: u32) -> Option<&[Rgb]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.data[start..start + self.width as usize])
    }

    /// Number of distinct colors present.
    pub fn count_colors(&self) -> usize {
        self.data.iter().copied().collect::<HashSet<_>>().len()
    }

    /// True if both images have the same size and identical pixels.
    pub fn same_pixels(&self, other: &RgbImage) -> bool {
        self.width == other.width && self.height == other.height && self.data == other.data
    }

    /// Consume the image and return its pixel vector.
    pub fn into_pixels(self) -> Vec<Rgb> {
        self.data
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

fn checked_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    width
        .checked_mul(height)
        .map(|n| n as usize)
        .ok_or(Error::InvalidDimension { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let img = RgbImage::new(3, 2).unwrap();
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 2);
        assert_eq!(img.len(), 6);
        assert!(img.pixels().iter().all(|&c| c == Rgb::BLACK));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            RgbImage::new(0, 5),
            Err(Error::InvalidDimension { width: 0, height: 5 })
        ));
        assert!(RgbImage::new(5, 0).is_err());
    }

    #[test]
    fn test_overflowing_dimension_rejected() {
        assert!(RgbImage::new(u32::MAX, 2).is_err());
    }

    #[test]
    fn test_from_pixels_length_checked() {
        let px = vec![Rgb::WHITE; 5];
        assert!(matches!(
            RgbImage::from_pixels(2, 3, px),
            Err(Error::PixelCountMismatch {
                expected: 6,
                actual: 5
            })
        ));
    }

    #[test]
    fn test_from_pixels_long_vector_reports_length() {
        let err = RgbImage::from_pixels(1, 1, vec![Rgb::BLACK; 3]).unwrap_err();
        assert_eq!(err.to_string(), "pixel count mismatch: expected 1, got 3");
    }

    #[test]
    fn test_checked_len() {
        assert_eq!(RgbImage::checked_len(7, 3).unwrap(), 21);
        assert!(RgbImage::checked_len(0, 3).is_err());
        assert!(RgbImage::checked_len(u32::MAX, u32::MAX).is_err());
        assert!(RgbImage::checked_len(65536, 65536).is_err());
    }

    #[test]
    fn test_from_fn_row_major() {
        let img = RgbImage::from_fn(3, 2, |x, y| Rgb::new(x as u8, y as u8, 0)).unwrap();
        assert_eq!(img.pixels()[4], Rgb::new(1, 1, 0));
        assert_eq!(img.row(1).unwrap()[2], Rgb::new(2, 1, 0));
        assert!(img.row(2).is_none());
    }

    #[test]
    fn test_count_colors() {
        let img = RgbImage::from_fn(4, 4, |x, _| {
            if x < 2 { Rgb::BLACK } else { Rgb::WHITE }
        })
        .unwrap();
        assert_eq!(img.count_colors(), 2);
    }
}
