//! Pixel access
//!
//! Checked and unchecked accessors on [`RgbImage`], plus the two traits
//! that labeling is written against. Any buffer that can report its size,
//! read a color and write a color can be labeled in place; `RgbImage` is
//! the implementation this workspace ships.

use super::RgbImage;
use crate::color::Rgb;
use crate::coord::{self, PixelId};
use crate::error::{Error, Result};

/// A readable pixel grid.
///
/// Implementations must report `width() > 0` and `height() > 0` and accept
/// every `(x, y)` with `x < width()` and `y < height()`. Coordinates outside
/// that range are a caller error and may panic.
pub trait PixelSource {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Color at `(x, y)`.
    fn get_color(&self, x: u32, y: u32) -> Rgb;

    /// Number of pixels in the grid.
    fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Linear id of `(x, y)` in this grid.
    fn pixel_id(&self, x: u32, y: u32) -> PixelId {
        coord::pixel_id(x, y, self.width())
    }

    /// Coordinates of a linear id in this grid.
    fn coords(&self, id: PixelId) -> (u32, u32) {
        coord::pixel_coords(id, self.width())
    }
}

/// A writable pixel grid over the same coordinate domain as [`PixelSource`].
pub trait PixelSink {
    /// Overwrite the color at `(x, y)`.
    fn set_color(&mut self, x: u32, y: u32, color: Rgb);
}

impl RgbImage {
    /// Get the color at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Get the color at (x, y) without a bounds check on `x`.
    ///
    /// # Panics
    ///
    /// Panics if the linear index falls outside the buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Rgb {
        self.data[self.index(x, y)]
    }

    /// Set the color at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) -> Result<()> {
        if x >= self.width {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width as usize,
            });
        }
        if y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height as usize,
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = color;
        Ok(())
    }

    /// Set the color at (x, y) without a bounds check on `x`.
    ///
    /// # Panics
    ///
    /// Panics if the linear index falls outside the buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, color: Rgb) {
        let idx = self.index(x, y);
        self.data[idx] = color;
    }
}

impl PixelSource for RgbImage {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn get_color(&self, x: u32, y: u32) -> Rgb {
        debug_assert!(x < self.width && y < self.height);
        self.get_pixel_unchecked(x, y)
    }

    #[inline]
    fn pixel_count(&self) -> usize {
        self.data.len()
    }
}

impl PixelSink for RgbImage {
    #[inline]
    fn set_color(&mut self, x: u32, y: u32, color: Rgb) {
        debug_assert!(x < self.width && y < self.height);
        self.set_pixel_unchecked(x, y, color);
    }
}
