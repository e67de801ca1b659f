//! Connected-components labeling and recoloring
//!
//! Two pixels belong to the same component when a path of 4-adjacent
//! pixels of exactly the same color joins them. Labeling runs in two
//! passes over the grid:
//!
//! 1. **Merge**: every pixel is compared with its right neighbor and the
//!    neighbor below. Equal colors in different sets are unioned. Each
//!    adjacent pair is therefore examined exactly once.
//! 2. **Relabel**: every pixel resolves its root. Roots receive sequential
//!    labels in the order they are first reached, and each pixel is
//!    written with the palette color of its label.
//!
//! The forest is reset before returning, so a single [`ComponentLabeler`]
//! can be run any number of times over buffers of any size.
//!
//! # Examples
//!
//! ```
//! use pixlabel_core::{Rgb, RgbImage};
//! use pixlabel_region::run_labeling;
//!
//! let a = Rgb::new(10, 10, 10);
//! let b = Rgb::new(200, 0, 0);
//! let mut img = RgbImage::from_pixels(4, 1, vec![a, a, b, a]).unwrap();
//!
//! let result = run_labeling(&mut img);
//! assert_eq!(result.component_count, 3);
//! assert_eq!(result.union_count, 1);
//! ```

use crate::error::{RegionError, RegionResult};
use crate::forest::DisjointSetForest;
use crate::palette::progressive_color;
use log::debug;
use pixlabel_core::{PixelId, PixelSink, PixelSource, Rgb, pixel_id};
use std::collections::HashMap;

/// Order in which both passes visit the grid.
///
/// The order decides which of two equivalent merges happens first, and
/// which root is reached first during relabeling. It never changes the
/// components themselves or the counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanOrder {
    /// Rows top to bottom, each row left to right
    #[default]
    RowMajor,
    /// Columns left to right, each column top to bottom.
    ///
    /// Labels are handed out in the order this scan first reaches each
    /// component, not in increasing root `PixelId`. A component that
    /// starts high in a later column can be labeled after one that starts
    /// lower in an earlier column.
    ColumnMajor,
}

/// Options for [`ComponentLabeler`]
#[derive(Debug, Clone, Copy)]
pub struct LabelOptions {
    /// Traversal order for both passes
    pub scan_order: ScanOrder,
    /// Maps a component label to the color written back into the buffer
    pub palette: fn(u32) -> Rgb,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            scan_order: ScanOrder::RowMajor,
            palette: progressive_color,
        }
    }
}

/// Outcome of one labeling run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelingResult {
    /// Number of maximal same-color 4-connected regions
    pub component_count: u32,
    /// Number of unions performed during the merge pass
    pub union_count: u32,
}

/// Per-pixel component labels produced by [`ComponentLabeler::label_map`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    width: u32,
    height: u32,
    labels: Vec<u32>,
    component_count: u32,
    union_count: u32,
}

impl LabelMap {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Label of the pixel at `(x, y)`, or `None` if out of bounds.
    pub fn label(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.labels[pixel_id(x, y, self.width) as usize])
    }

    /// All labels in row-major order, indexed by [`PixelId`].
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    pub fn component_count(&self) -> u32 {
        self.component_count
    }

    pub fn union_count(&self) -> u32 {
        self.union_count
    }

    /// Pixel count of each component, indexed by label.
    pub fn component_sizes(&self) -> Vec<u32> {
        let mut sizes = vec![0u32; self.component_count as usize];
        for &label in &self.labels {
            sizes[label as usize] += 1;
        }
        sizes
    }

    /// Counts in the same form [`ComponentLabeler::run`] reports them.
    pub fn result(&self) -> LabelingResult {
        LabelingResult {
            component_count: self.component_count,
            union_count: self.union_count,
        }
    }
}

/// Grid traversal yielding `(x, y)` in a [`ScanOrder`].
struct Scan {
    width: u32,
    height: u32,
    order: ScanOrder,
    next: u64,
    end: u64,
}

impl Scan {
    fn new(width: u32, height: u32, order: ScanOrder) -> Self {
        Self {
            width,
            height,
            order,
            next: 0,
            end: width as u64 * height as u64,
        }
    }
}

impl Iterator for Scan {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<(u32, u32)> {
        if self.next >= self.end {
            return None;
        }
        let i = self.next;
        self.next += 1;
        let (w, h) = (self.width as u64, self.height as u64);
        let (x, y) = match self.order {
            ScanOrder::RowMajor => (i % w, i / w),
            ScanOrder::ColumnMajor => (i / h, i % h),
        };
        Some((x as u32, y as u32))
    }
}

/// Union-find connected-components labeler.
///
/// Owns the forest that both passes share. The forest holds no state
/// between runs: it is sized for the buffer at the start of a run and
/// reset to all-roots before the run returns.
#[derive(Debug, Clone)]
pub struct ComponentLabeler {
    forest: DisjointSetForest,
    options: LabelOptions,
}

impl Default for ComponentLabeler {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentLabeler {
    pub fn new() -> Self {
        Self::with_options(LabelOptions::default())
    }

    pub fn with_options(options: LabelOptions) -> Self {
        Self {
            forest: DisjointSetForest::new(0),
            options,
        }
    }

    pub fn options(&self) -> &LabelOptions {
        &self.options
    }

    /// The forest as left by the last run (all roots).
    pub fn forest(&self) -> &DisjointSetForest {
        &self.forest
    }

    /// Label `buffer` and recolor every component in place.
    ///
    /// Each pixel is overwritten with the palette color of its component
    /// label. The buffer must not be touched by anyone else until this
    /// returns.
    ///
    /// # Panics
    ///
    /// Panics if the buffer panics on an in-range coordinate, or if it
    /// holds more than `PixelId::MAX` pixels.
    pub fn run<B>(&mut self, buffer: &mut B) -> LabelingResult
    where
        B: PixelSource + PixelSink + ?Sized,
    {
        let (width, height) = (buffer.width(), buffer.height());
        let palette = self.options.palette;
        let union_count = self.merge_pass(&*buffer);
        let component_count = self.relabel_pass(width, height, |x, y, label| {
            buffer.set_color(x, y, palette(label));
        });
        LabelingResult {
            component_count,
            union_count,
        }
    }

    /// Label `source` and write the recolored result into `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::DimensionMismatch`] if `sink` is not the
    /// same size as `source`. Nothing is written in that case.
    pub fn run_into<S, D>(&mut self, source: &S, sink: &mut D) -> RegionResult<LabelingResult>
    where
        S: PixelSource + ?Sized,
        D: PixelSource + PixelSink + ?Sized,
    {
        let (width, height) = (source.width(), source.height());
        if (sink.width(), sink.height()) != (width, height) {
            return Err(RegionError::DimensionMismatch {
                expected: (width, height),
                actual: (sink.width(), sink.height()),
            });
        }

        let palette = self.options.palette;
        let union_count = self.merge_pass(source);
        let component_count = self.relabel_pass(width, height, |x, y, label| {
            sink.set_color(x, y, palette(label));
        });
        Ok(LabelingResult {
            component_count,
            union_count,
        })
    }

    /// Label `source` without writing any colors.
    pub fn label_map<S>(&mut self, source: &S) -> LabelMap
    where
        S: PixelSource + ?Sized,
    {
        let (width, height) = (source.width(), source.height());
        let mut labels = vec![0u32; source.pixel_count()];
        let union_count = self.merge_pass(source);
        let component_count = self.relabel_pass(width, height, |x, y, label| {
            labels[pixel_id(x, y, width) as usize] = label;
        });
        LabelMap {
            width,
            height,
            labels,
            component_count,
            union_count,
        }
    }

    /// Union every pair of equal-color 4-neighbors. Returns the union count.
    fn merge_pass<S>(&mut self, source: &S) -> u32
    where
        S: PixelSource + ?Sized,
    {
        let (width, height) = (source.width(), source.height());
        self.forest.reinit(source.pixel_count());

        for (x, y) in Scan::new(width, height, self.options.scan_order) {
            let id = pixel_id(x, y, width);
            let color = source.get_color(x, y);

            if x + 1 < width && source.get_color(x + 1, y) == color {
                self.merge(id, id + 1);
            }
            if y + 1 < height && source.get_color(x, y + 1) == color {
                self.merge(id, id + width);
            }
        }

        let unions = self.forest.union_count();
        debug!("{width}x{height}: {unions} unions");
        unions
    }

    #[inline]
    fn merge(&mut self, a: PixelId, b: PixelId) {
        if self.forest.find(a) != self.forest.find(b) {
            self.forest.union(a, b);
        }
    }

    /// Assign sequential labels to roots and report `(x, y, label)` for
    /// every pixel. Resets the forest and returns the component count.
    fn relabel_pass<F>(&mut self, width: u32, height: u32, mut emit: F) -> u32
    where
        F: FnMut(u32, u32, u32),
    {
        let mut labels: HashMap<PixelId, u32> = HashMap::new();

        for (x, y) in Scan::new(width, height, self.options.scan_order) {
            let root = self.forest.find(pixel_id(x, y, width));
            let next = labels.len() as u32;
            let label = *labels.entry(root).or_insert(next);
            emit(x, y, label);
        }

        let components = labels.len() as u32;
        debug!("{width}x{height}: {components} components");
        self.forest.reset();
        components
    }
}

/// Label `buffer` in place with a fresh labeler and default options.
pub fn run_labeling<B>(buffer: &mut B) -> LabelingResult
where
    B: PixelSource + PixelSink + ?Sized,
{
    ComponentLabeler::new().run(buffer)
}

/// Count the components of `source` without recoloring it.
pub fn count_components<S>(source: &S) -> u32
where
    S: PixelSource + ?Sized,
{
    ComponentLabeler::new().label_map(source).component_count()
}
