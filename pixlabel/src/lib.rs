//! pixlabel - Connected-components labeling for raster images
//!
//! Partitions an RGB image into maximal groups of 4-adjacent pixels that
//! share exactly the same color, counts them, and repaints each group with
//! its own color from a progressive palette.
//!
//! # Overview
//!
//! - colors, pixel ids and the [`RgbImage`] buffer, re-exported at the root
//! - [`region`] - the union-find forest, palette and labeler
//! - [`io`] - PNG and PPM loading and saving
//!
//! # Example
//!
//! ```
//! use pixlabel::{Rgb, RgbImage, run_labeling};
//!
//! let a = Rgb::new(0, 0, 0);
//! let b = Rgb::new(255, 255, 255);
//! let mut img = RgbImage::from_pixels(4, 1, vec![a, a, b, a]).unwrap();
//!
//! let result = run_labeling(&mut img);
//! assert_eq!(result.component_count, 3);
//! assert_eq!(result.union_count, 1);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixlabel_core::*;

// Re-export the labeling entry points at the root
pub use pixlabel_region::{
    ComponentLabeler, LabelMap, LabelOptions, LabelingResult, ScanOrder, count_components,
    progressive_color, run_labeling,
};

// Re-export domain crates as modules to avoid name conflicts
pub use pixlabel_io as io;
pub use pixlabel_region as region;
