//! pixlabel-core - Basic data structures for connected-components labeling
//!
//! This crate provides the primitives the labeling engine is built on:
//!
//! - [`Rgb`] - 8-bit per channel color with Euclidean distance
//! - [`PixelId`] - linearized `y * width + x` pixel address
//! - [`PixelSource`] / [`PixelSink`] - the buffer interface labeling reads and writes
//! - [`RgbImage`] - the owned row-major buffer implementing both
//!
//! # Example
//!
//! ```
//! use pixlabel_core::{PixelSource, Rgb, RgbImage};
//!
//! let mut img = RgbImage::new(4, 3).unwrap();
//! img.set_pixel(1, 2, Rgb::new(255, 0, 0)).unwrap();
//! assert_eq!(img.get_color(1, 2), Rgb::new(255, 0, 0));
//! assert_eq!(img.pixel_id(1, 2), 9);
//! ```

pub mod color;
pub mod coord;
pub mod error;
pub mod image;

pub use color::Rgb;
pub use coord::{PixelId, pixel_coords, pixel_id};
pub use error::{Error, Result};
pub use image::{PixelSink, PixelSource, RgbImage};
