//! Disjoint-set forest over pixel ids
//!
//! One entry per pixel. An entry is either [`ROOT`] or the id of its
//! parent. The structure deliberately does no path compression and no
//! union-by-rank:
//!
//! - [`DisjointSetForest::find`] walks the whole chain on every call.
//! - [`DisjointSetForest::union`] always hangs the root with the larger id
//!   under the root with the smaller id.
//!
//! As a consequence every class is rooted at its smallest member, and the
//! root of a class never depends on merge order. Chains can grow linearly
//! in pathological inputs (a long one-pixel snake merged from its far end),
//! making `find` O(n) in the worst case.

use log::trace;
use pixlabel_core::PixelId;

/// Parent entry of a pixel that is its own root.
pub const ROOT: PixelId = PixelId::MAX;

/// Union-find forest indexed by [`PixelId`].
#[derive(Debug, Clone)]
pub struct DisjointSetForest {
    parent: Vec<PixelId>,
    unions: u32,
}

impl DisjointSetForest {
    /// Create a forest of `len` singleton sets.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds `PixelId::MAX`, since the largest id would
    /// collide with [`ROOT`].
    pub fn new(len: usize) -> Self {
        assert!(len <= PixelId::MAX as usize, "forest too large: {len}");
        Self {
            parent: vec![ROOT; len],
            unions: 0,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Return the root of the set containing `id`.
    ///
    /// Follows parent links until an entry marked [`ROOT`] is reached. The
    /// chain is never shortened.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn find(&self, id: PixelId) -> PixelId {
        let mut cur = id;
        loop {
            let p = self.parent[cur as usize];
            if p == ROOT {
                return cur;
            }
            cur = p;
        }
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// The root with the numerically larger id becomes a child of the root
    /// with the smaller id, and the union counter is incremented. If both
    /// already share a root nothing is written, the counter is left alone
    /// and `false` is returned.
    ///
    /// # Panics
    ///
    /// Panics if either id is out of range.
    pub fn union(&mut self, a: PixelId, b: PixelId) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }

        let (keep, attach) = if ra < rb { (ra, rb) } else { (rb, ra) };
        self.parent[attach as usize] = keep;
        self.unions += 1;
        trace!("union({a}, {b}): root {attach} -> {keep}");
        true
    }

    /// Number of successful unions since the last reset.
    pub fn union_count(&self) -> u32 {
        self.unions
    }

    /// Parent of `id`, or `None` if `id` is a root.
    pub fn parent(&self, id: PixelId) -> Option<PixelId> {
        match self.parent[id as usize] {
            ROOT => None,
            p => Some(p),
        }
    }

    pub fn is_root(&self, id: PixelId) -> bool {
        self.parent[id as usize] == ROOT
    }

    /// Number of parent links between `id` and its root.
    pub fn depth(&self, id: PixelId) -> usize {
        let mut cur = id;
        let mut depth = 0;
        while let Some(p) = self.parent(cur) {
            cur = p;
            depth += 1;
        }
        depth
    }

    /// Make every entry its own root again and clear the union counter.
    pub fn reset(&mut self) {
        self.parent.fill(ROOT);
        self.unions = 0;
    }

    /// Resize to `len` entries and reset.
    pub fn reinit(&mut self, len: usize) {
        assert!(len <= PixelId::MAX as usize, "forest too large: {len}");
        self.parent.clear();
        self.parent.resize(len, ROOT);
        self.unions = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_all_roots() {
        let f = DisjointSetForest::new(5);
        assert_eq!(f.len(), 5);
        for id in 0..5 {
            assert!(f.is_root(id));
            assert_eq!(f.find(id), id);
            assert_eq!(f.parent(id), None);
        }
        assert_eq!(f.union_count(), 0);
    }

    #[test]
    fn test_union_attaches_larger_root_under_smaller() {
        let mut f = DisjointSetForest::new(10);
        assert!(f.union(7, 3));
        assert_eq!(f.parent(7), Some(3));
        assert!(f.is_root(3));

        assert!(f.union(1, 9));
        assert_eq!(f.parent(9), Some(1));

        // Roots 3 and 1: 3 goes under 1 regardless of argument order.
        assert!(f.union(7, 9));
        assert_eq!(f.parent(3), Some(1));
        assert_eq!(f.find(7), 1);
        assert_eq!(f.union_count(), 3);
    }

    #[test]
    fn test_union_same_set_is_noop() {
        let mut f = DisjointSetForest::new(4);
        assert!(f.union(0, 1));
        assert!(!f.union(1, 0));
        assert!(!f.union(2, 2));
        assert_eq!(f.union_count(), 1);
        assert!(f.is_root(0));
        assert!(f.is_root(2));
        assert_eq!(f.find(1), 0);
    }

    #[test]
    fn test_find_does_not_compress() {
        // Build a chain 4 -> 3 -> 2 -> 1 -> 0 by merging from the far end.
        let mut f = DisjointSetForest::new(5);
        for id in (0..4).rev() {
            f.union(id, id + 1);
        }
        assert_eq!(f.depth(4), 4);
        assert_eq!(f.find(4), 0);
        assert_eq!(f.depth(4), 4);
        assert_eq!(f.parent(4), Some(3));
    }

    #[test]
    fn test_root_is_class_minimum() {
        let mut f = DisjointSetForest::new(8);
        f.union(6, 5);
        f.union(4, 7);
        f.union(7, 5);
        f.union(2, 6);
        for id in [2, 4, 5, 6, 7] {
            assert_eq!(f.find(id), 2);
        }
        assert_eq!(f.find(0), 0);
    }

    #[test]
    fn test_reset_and_reinit() {
        let mut f = DisjointSetForest::new(3);
        f.union(0, 1);
        f.union(1, 2);
        f.reset();
        assert!((0..3).all(|id| f.is_root(id)));
        assert_eq!(f.union_count(), 0);

        f.union(0, 2);
        f.reinit(6);
        assert_eq!(f.len(), 6);
        assert!((0..6).all(|id| f.is_root(id)));
        assert_eq!(f.union_count(), 0);
    }

    #[test]
    #[should_panic]
    fn test_find_out_of_range_panics() {
        let f = DisjointSetForest::new(3);
        f.find(3);
    }
}
