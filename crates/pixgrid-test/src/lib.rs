//! pixgrid-test - Regression test framework for pixgrid
//!
//! Provides [`RegParams`], a check recorder that keeps running after the
//! first mismatch and reports every failure at the end, plus a few
//! fixture grids shared by the integration tests.
//!
//! # Usage
//!
//! ```ignore
//! use pixgrid_test::RegParams;
//!
//! let mut rp = RegParams::new("grid_access");
//! rp.compare_values(4.0, grid.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use pixgrid_core::{Grid, Sample};

/// The 2x2 grid of red, green, blue, and white used across the tests.
pub fn primary_quad() -> TestResult<Grid> {
    let rows = [
        [Sample::rgb(255, 0, 0), Sample::rgb(0, 255, 0)],
        [Sample::rgb(0, 0, 255), Sample::rgb(255, 255, 255)],
    ];
    fixture("primary_quad", Grid::from_rows("primary_quad", &rows))
}

/// A `width x height` grid where red follows `x`, green follows `y`, blue
/// is `x ^ y`, and alpha cycles through four levels.
pub fn gradient(width: u32, height: u32) -> TestResult<Grid> {
    let samples = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                let alpha = [255, 192, 128, 64][((x + y) % 4) as usize];
                Sample::rgba(x as u8, y as u8, (x ^ y) as u8, alpha)
            })
        })
        .collect();
    fixture("gradient", Grid::from_samples("gradient", width, height, samples))
}

/// A checkerboard of two samples with square cells of side `cell`.
pub fn checkerboard(width: u32, height: u32, cell: u32, a: Sample, b: Sample) -> TestResult<Grid> {
    let cell = cell.max(1);
    let samples = (0..height)
        .flat_map(|y| (0..width).map(move |x| if (x / cell + y / cell) % 2 == 0 { a } else { b }))
        .collect();
    fixture(
        "checkerboard",
        Grid::from_samples("checkerboard", width, height, samples),
    )
}

fn fixture(name: &str, result: pixgrid_core::Result<Grid>) -> TestResult<Grid> {
    result.map_err(|source| TestError::Fixture {
        name: name.to_string(),
        source,
    })
}
