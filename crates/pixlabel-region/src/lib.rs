//! pixlabel-region - Connected-components labeling for pixlabel
//!
//! This crate partitions an RGB raster into maximal 4-connected regions
//! of identical color and recolors each region with its own palette entry:
//!
//! - **Disjoint-set forest** - union-find over linearized pixel ids
//! - **Palette** - deterministic, unbounded label-to-color map
//! - **Labeling** - the two-pass merge and relabel driver
//!
//! # Examples
//!
//! ## Labeling in place
//!
//! ```
//! use pixlabel_core::{Rgb, RgbImage};
//! use pixlabel_region::{progressive_color, run_labeling};
//!
//! // 2x2 checkerboard: no two 4-neighbors share a color
//! let (a, b) = (Rgb::new(0, 0, 0), Rgb::new(255, 255, 255));
//! let mut img = RgbImage::from_pixels(2, 2, vec![a, b, b, a]).unwrap();
//!
//! let result = run_labeling(&mut img);
//! assert_eq!(result.component_count, 4);
//! assert_eq!(result.union_count, 0);
//! assert_eq!(img.get_pixel(1, 1), Some(progressive_color(3)));
//! ```
//!
//! ## Reading labels without recoloring
//!
//! ```
//! use pixlabel_core::{Rgb, RgbImage};
//! use pixlabel_region::ComponentLabeler;
//!
//! let img = RgbImage::filled(6, 4, Rgb::new(1, 2, 3)).unwrap();
//! let map = ComponentLabeler::new().label_map(&img);
//! assert_eq!(map.component_count(), 1);
//! assert_eq!(map.union_count(), 23);
//! ```

pub mod error;
pub mod forest;
pub mod label;
pub mod palette;

// Re-export core types
pub use pixlabel_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export forest types
pub use forest::{DisjointSetForest, ROOT};

// Re-export label types and functions
pub use label::{
    ComponentLabeler, LabelMap, LabelOptions, LabelingResult, ScanOrder, count_components,
    run_labeling,
};

// Re-export palette types and functions
pub use palette::{PALETTE_BITS, ProgressivePalette, progressive_color};
