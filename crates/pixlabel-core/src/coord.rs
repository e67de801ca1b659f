//! Linearized pixel coordinates
//!
//! A [`PixelId`] addresses one grid cell as `y * width + x`. For a fixed
//! width the mapping is a bijection between `[0, width) x [0, height)` and
//! `[0, width * height)`.

/// Linear index of a pixel in row-major order.
pub type PixelId = u32;

/// Compute the pixel id of `(x, y)` in a grid `width` pixels wide.
#[inline]
pub fn pixel_id(x: u32, y: u32, width: u32) -> PixelId {
    y * width + x
}

/// Recover `(x, y)` from a pixel id.
///
/// # Panics
///
/// Panics if `width` is zero.
#[inline]
pub fn pixel_coords(id: PixelId, width: u32) -> (u32, u32) {
    (id % width, id / width)
}
