//! RGB color value type
//!
//! # Pixel format
//!
//! Packed pixels use the `0x00RRGGBB` word layout (red in bits 16..24,
//! blue in the low byte). There is no alpha channel: labeling compares
//! colors by exact equality of the three channels.

/// Red channel shift in a packed pixel
pub const RED_SHIFT: u32 = 16;
/// Green channel shift in a packed pixel
pub const GREEN_SHIFT: u32 = 8;
/// Blue channel shift in a packed pixel
pub const BLUE_SHIFT: u32 = 0;

/// An 8-bit per channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_array(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Unpack a `0x00RRGGBB` word. The high byte is ignored.
    #[inline]
    pub fn from_packed(pixel: u32) -> Self {
        Self::new(
            ((pixel >> RED_SHIFT) & 0xff) as u8,
            ((pixel >> GREEN_SHIFT) & 0xff) as u8,
            ((pixel >> BLUE_SHIFT) & 0xff) as u8,
        )
    }

    /// Pack into a `0x00RRGGBB` word.
    #[inline]
    pub fn to_packed(self) -> u32 {
        ((self.r as u32) << RED_SHIFT) | ((self.g as u32) << GREEN_SHIFT) | (self.b as u32)
    }

    /// Integer squared Euclidean distance between two colors.
    ///
    /// The maximum is `3 * 255^2`, which fits comfortably in a `u32`.
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Euclidean distance between two colors in RGB space.
    ///
    /// Computed as the square root of the sum of squared per-channel
    /// differences. Labeling itself never uses this; it compares colors
    /// for exact equality.
    pub fn euclidean_distance(self, other: Rgb) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(arr: [u8; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        (c.r, c.g, c.b)
    }
}
