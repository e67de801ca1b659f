//! Progressive palette
//!
//! Maps a component label to a display color. The label's bits are dealt
//! round-robin to red, green and blue, each channel filled from its most
//! significant bit downward:
//!
//! | label | color           |
//! |-------|-----------------|
//! | 0     | (0, 0, 0)       |
//! | 1     | (128, 0, 0)     |
//! | 2     | (0, 128, 0)     |
//! | 3     | (128, 128, 0)   |
//! | 4     | (0, 0, 128)     |
//! | 8     | (64, 0, 0)      |
//!
//! Early labels therefore differ by large steps, later labels refine the
//! space between them. The map is injective on `[0, 2^24)` and wraps
//! modulo `2^24` beyond that. No component count is needed up front.

use pixlabel_core::Rgb;

/// Number of label bits that reach the output color.
pub const PALETTE_BITS: u32 = 24;

/// Color for component `label`.
pub fn progressive_color(label: u32) -> Rgb {
    let mut channels = [0u8; 3];
    for bit in 0..PALETTE_BITS {
        if (label >> bit) & 1 == 1 {
            channels[(bit % 3) as usize] |= 0x80 >> (bit / 3);
        }
    }
    Rgb::from_array(channels)
}

/// Handle on the progressive color sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressivePalette;

impl ProgressivePalette {
    pub fn color(&self, label: u32) -> Rgb {
        progressive_color(label)
    }

    /// The sequence `color(0), color(1), ...`.
    pub fn iter(&self) -> impl Iterator<Item = Rgb> {
        (0..=u32::MAX).map(progressive_color)
    }
}
