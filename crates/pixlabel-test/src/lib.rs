//! pixlabel-test - Shared test support for the pixlabel workspace
//!
//! Regression tests record numbered checks on a [`RegParams`] and report
//! every failure at [`RegParams::cleanup`]. Images written with
//! [`RegParams::write_image_and_check`] land in `tests/regout/` and are
//! checked against `tests/golden/<name>_golden.<index>.<ext>`; a golden
//! file matches when its bytes or its decoded pixels agree.
//!
//! `REGTEST_MODE=generate` rewrites the golden files instead and
//! `REGTEST_MODE=display` only writes outputs. Anything else compares.
//!
//! ```ignore
//! use pixlabel_test::{RegParams, load_test_image};
//!
//! let mut rp = RegParams::new("label");
//! let img = load_test_image("blobs.ppm")?;
//! rp.compare_values(6.0, count_components(&img) as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! [`synthetic`] builds images whose components are known in advance.

mod error;
mod params;
pub mod synthetic;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Load a fixture from `tests/data/images/`.
pub fn load_test_image(name: &str) -> TestResult<pixlabel_core::RgbImage> {
    let path = test_data_path(name);
    pixlabel_io::read_image(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

fn workspace_root() -> String {
    // crates/pixlabel-test
    format!("{}/../..", env!("CARGO_MANIFEST_DIR"))
}

/// Path of a fixture image.
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Directory holding committed golden outputs.
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Scratch directory for outputs of the current run.
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
