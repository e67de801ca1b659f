//! Connected component property regression test
//!
//! Checks the labeler against an independent flood-fill labeling on
//! seeded random images, in both scan orders.

use pixlabel_core::{PixelSource, RgbImage};
use pixlabel_region::{ComponentLabeler, LabelMap, LabelOptions, ScanOrder, count_components};
use pixlabel_test::{RegParams, synthetic};
use std::collections::VecDeque;

/// Flood-fill labeling used as the reference partition.
fn flood_fill_labels(img: &RgbImage) -> (Vec<u32>, u32) {
    let (w, h) = (img.width(), img.height());
    let mut labels = vec![u32::MAX; img.len()];
    let mut next = 0u32;

    for start in 0..img.len() {
        if labels[start] != u32::MAX {
            continue;
        }
        let color = img.pixels()[start];
        labels[start] = next;
        let mut queue = VecDeque::from([start]);
        while let Some(i) = queue.pop_front() {
            let (x, y) = ((i as u32) % w, (i as u32) / w);
            let mut neighbors = Vec::with_capacity(4);
            if x > 0 {
                neighbors.push(i - 1);
            }
            if x + 1 < w {
                neighbors.push(i + 1);
            }
            if y > 0 {
                neighbors.push(i - w as usize);
            }
            if y + 1 < h {
                neighbors.push(i + w as usize);
            }
            for n in neighbors {
                if labels[n] == u32::MAX && img.pixels()[n] == color {
                    labels[n] = next;
                    queue.push_back(n);
                }
            }
        }
        next += 1;
    }
    (labels, next)
}

/// Number of 4-adjacent pixel pairs with equal colors.
fn equal_adjacent_pairs(img: &RgbImage) -> u32 {
    let mut pairs = 0;
    for y in 0..img.height() {
        for x in 0..img.width() {
            let c = img.get_color(x, y);
            if x + 1 < img.width() && img.get_color(x + 1, y) == c {
                pairs += 1;
            }
            if y + 1 < img.height() && img.get_color(x, y + 1) == c {
                pairs += 1;
            }
        }
    }
    pairs
}

fn same_partition(a: &[u32], b: &[u32]) -> bool {
    // Labels are dense, so a bijection between them is enough.
    let n = a.iter().chain(b).max().map_or(0, |&m| m as usize + 1);
    let mut fwd = vec![u32::MAX; n];
    let mut back = vec![u32::MAX; n];
    for (&la, &lb) in a.iter().zip(b) {
        if fwd[la as usize] == u32::MAX && back[lb as usize] == u32::MAX {
            fwd[la as usize] = lb;
            back[lb as usize] = la;
        } else if fwd[la as usize] != lb || back[lb as usize] != la {
            return false;
        }
    }
    true
}

fn check(rp: &mut RegParams, img: &RgbImage, map: &LabelMap) {
    let (reference, ncomp) = flood_fill_labels(img);
    rp.compare_values(ncomp as f64, map.component_count() as f64, 0.0);
    rp.compare_values(
        1.0,
        if same_partition(&reference, map.labels()) { 1.0 } else { 0.0 },
        0.0,
    );

    let npix = img.len() as u32;
    rp.compare_values(
        (npix - map.component_count()) as f64,
        map.union_count() as f64,
        0.0,
    );
    rp.compare_values(
        1.0,
        if map.union_count() <= equal_adjacent_pairs(img) { 1.0 } else { 0.0 },
        0.0,
    );
    rp.compare_values(
        1.0,
        if map.component_count() >= 1 && map.component_count() <= npix { 1.0 } else { 0.0 },
        0.0,
    );
}

#[test]
fn conncomp_reg() {
    let mut rp = RegParams::new("conncomp");

    let mut row = ComponentLabeler::new();
    let mut col = ComponentLabeler::with_options(LabelOptions {
        scan_order: ScanOrder::ColumnMajor,
        ..Default::default()
    });

    let cases = [
        (1, 1, 1, 1, 5),
        (17, 1, 1, 2, 6),
        (1, 23, 1, 2, 7),
        (31, 19, 1, 2, 8),
        (31, 19, 1, 4, 9),
        (50, 40, 3, 3, 10),
        (64, 64, 2, 6, 11),
    ];

    for (w, h, block, ncolors, seed) in cases {
        let img = synthetic::random_blocks(w, h, block, ncolors, seed).unwrap();
        let map_row = row.label_map(&img);
        let map_col = col.label_map(&img);
        eprintln!(
            "  {}x{} block={} colors={}: {} components",
            w,
            h,
            block,
            ncolors,
            map_row.component_count()
        );

        check(&mut rp, &img, &map_row);
        check(&mut rp, &img, &map_col);
        rp.compare_values(
            map_row.union_count() as f64,
            map_col.union_count() as f64,
            0.0,
        );
        rp.compare_values(
            map_row.component_count() as f64,
            count_components(&img) as f64,
            0.0,
        );

        // Same buffer, same order: identical labels.
        let again = row.label_map(&img);
        rp.compare_values(1.0, if again == map_row { 1.0 } else { 0.0 }, 0.0);
    }

    assert!(rp.cleanup(), "conncomp regression test failed");
}

#[test]
fn conncomp_stripes_reg() {
    let mut rp = RegParams::new("conncomp_stripes");

    let colors = [
        pixlabel_core::Rgb::new(255, 0, 0),
        pixlabel_core::Rgb::new(0, 255, 0),
        pixlabel_core::Rgb::new(0, 0, 255),
    ];
    let img = synthetic::stripes(30, 10, 3, &colors).unwrap();
    let map = ComponentLabeler::new().label_map(&img);
    rp.compare_values(10.0, map.component_count() as f64, 0.0);
    for size in map.component_sizes() {
        rp.compare_values(30.0, size as f64, 0.0);
    }
    // Labels increase left to right across the first row.
    for stripe in 0..10 {
        rp.compare_values(stripe as f64, map.label(stripe * 3, 0).unwrap() as f64, 0.0);
    }

    assert!(rp.cleanup(), "conncomp stripes regression test failed");
}
