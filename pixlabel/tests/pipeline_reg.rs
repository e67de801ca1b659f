//! End-to-end regression test
//!
//! Load an image, label it, save the recolored result and load it back.

use pixlabel::io::{ImageFormat, read_image_mem, write_image_mem};
use pixlabel::{ComponentLabeler, run_labeling};
use pixlabel_test::{RegParams, load_test_image};

#[test]
fn pipeline_reg() {
    let mut rp = RegParams::new("pipeline");

    let mut img = load_test_image("blobs.ppm").expect("load blobs.ppm");
    let result = run_labeling(&mut img);
    rp.compare_values(6.0, result.component_count as f64, 0.0);
    rp.compare_values(42.0, result.union_count as f64, 0.0);

    let bytes = write_image_mem(&img, ImageFormat::Png).expect("encode png");
    let mut reloaded = read_image_mem(&bytes).expect("decode png");
    rp.compare_images(&img, &reloaded);

    // The saved result labels to the same partition.
    let mut labeler = ComponentLabeler::new();
    let again = labeler.run(&mut reloaded);
    rp.compare_values(6.0, again.component_count as f64, 0.0);
    rp.compare_images(&img, &reloaded);

    assert!(rp.cleanup(), "pipeline regression test failed");
}

#[test]
fn pipeline_labeled_reg() {
    let mut rp = RegParams::new("pipeline_labeled");

    let mut img = load_test_image("blobs.ppm").expect("load blobs.ppm");
    run_labeling(&mut img);
    rp.write_image_and_check(&img, ImageFormat::Png)
        .expect("write labeled png");

    assert!(rp.cleanup(), "pipeline labeled regression test failed");
}
