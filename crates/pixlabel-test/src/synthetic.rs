//! Deterministic synthetic test images
//!
//! Small generators for images whose component structure is known in
//! advance, plus a seeded random generator for property-style checks.

use crate::TestResult;
use pixlabel_core::{Rgb, RgbImage};

/// Two-color checkerboard with `cell`-pixel squares.
///
/// With `cell == 1` no two 4-neighbors share a color, so every pixel is
/// its own component.
pub fn checkerboard(width: u32, height: u32, cell: u32, a: Rgb, b: Rgb) -> TestResult<RgbImage> {
    let cell = cell.max(1);
    Ok(RgbImage::from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 { a } else { b }
    })?)
}

/// Vertical stripes `stripe` pixels wide cycling through `colors`.
pub fn stripes(width: u32, height: u32, stripe: u32, colors: &[Rgb]) -> TestResult<RgbImage> {
    let stripe = stripe.max(1);
    Ok(RgbImage::from_fn(width, height, |x, _| {
        colors[(x / stripe) as usize % colors.len()]
    })?)
}

/// Random image built from `block`-pixel squares, each painted with one
/// of `ncolors` colors. The same seed always yields the same image.
pub fn random_blocks(
    width: u32,
    height: u32,
    block: u32,
    ncolors: u32,
    seed: u32,
) -> TestResult<RgbImage> {
    let block = block.max(1);
    let ncolors = ncolors.max(1);
    let bw = width.div_ceil(block);
    let bh = height.div_ceil(block);

    let mut rng = SimpleRng::new(seed);
    let cells: Vec<Rgb> = (0..bw * bh)
        .map(|_| {
            let k = (rng.next() >> 33) as u32 % ncolors;
            Rgb::new((k * 37) as u8, (k * 101) as u8, (k * 13 + 7) as u8)
        })
        .collect();

    Ok(RgbImage::from_fn(width, height, |x, y| {
        cells[((y / block) * bw + x / block) as usize]
    })?)
}

/// Simple linear congruential generator for reproducible randomness
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    fn next(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }
}
