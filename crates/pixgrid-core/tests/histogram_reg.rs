//! Histogram regression test
//!
//! Checks the per-channel counts against hand-computed values and the
//! coverage property that every channel sums to `width * height`.

use pixgrid_core::{Channel, ChannelHistogram, Grid, HISTOGRAM_BINS, Sample};
use pixgrid_test::{RegParams, checkerboard, gradient, primary_quad};

// ==========================================================================
// Test 1: Red, green, blue, white quad
// ==========================================================================

#[test_log::test]
fn histogram_reg_primary_quad() {
    let mut rp = RegParams::new("histogram_quad");

    let hist = primary_quad().unwrap().histogram();
    for channel in Channel::ALL {
        rp.compare_values(2.0, hist.count(channel, 255) as f64, 0.0);
        rp.compare_values(2.0, hist.count(channel, 0) as f64, 0.0);
        let rest: u64 = hist.channel(channel)[1..255].iter().sum();
        rp.compare_values(0.0, rest as f64, 0.0);
    }

    assert!(rp.cleanup(), "histogram_reg quad tests failed");
}

// ==========================================================================
// Test 2: Each channel covers every sample exactly once
// ==========================================================================

#[test_log::test]
fn histogram_reg_coverage() {
    let mut rp = RegParams::new("histogram_coverage");

    let grids = [
        gradient(1, 1).unwrap(),
        gradient(17, 3).unwrap(),
        gradient(256, 9).unwrap(),
        checkerboard(40, 30, 7, Sample::rgb(10, 20, 30), Sample::rgb(40, 50, 60)).unwrap(),
    ];
    for grid in &grids {
        let hist = grid.histogram();
        let area = grid.width() as f64 * grid.height() as f64;
        for channel in Channel::ALL {
            rp.compare_values(area, hist.total(channel) as f64, 0.0);
        }
    }

    assert!(rp.cleanup(), "histogram_reg coverage tests failed");
}

// ==========================================================================
// Test 3: Counts match a brute-force tally
// ==========================================================================

#[test_log::test]
fn histogram_reg_matches_tally() {
    let mut rp = RegParams::new("histogram_tally");

    let grid = gradient(50, 40).unwrap();
    let mut expected = [[0u64; HISTOGRAM_BINS]; 3];
    for y in 0..grid.height() as i64 {
        for x in 0..grid.width() as i64 {
            let s = grid.get_pixel(x, y).unwrap();
            expected[0][s.red() as usize] += 1;
            expected[1][s.green() as usize] += 1;
            expected[2][s.blue() as usize] += 1;
        }
    }
    rp.compare_histograms(&ChannelHistogram::from_array(expected), &grid.histogram());

    assert!(rp.cleanup(), "histogram_reg tally tests failed");
}

// ==========================================================================
// Test 4: Repeated computation is stable
// ==========================================================================

#[test_log::test]
fn histogram_reg_deterministic() {
    let grid = checkerboard(33, 21, 4, Sample::rgb(1, 2, 3), Sample::rgb(200, 100, 0)).unwrap();
    assert_eq!(grid.histogram(), grid.histogram());

    let hist = grid.histogram();
    // 33x21 with 4-pixel cells: count cells by parity
    let a = (0..21u32)
        .flat_map(|y| (0..33u32).map(move |x| (x / 4 + y / 4) % 2 == 0))
        .filter(|&even| even)
        .count() as u64;
    assert_eq!(hist.count(Channel::Red, 1), a);
    assert_eq!(hist.count(Channel::Red, 200), 33 * 21 - a);
    assert_eq!(hist.count(Channel::Blue, 0), 33 * 21 - a);
}

// ==========================================================================
// Test 5: Sampled histograms
// ==========================================================================

#[test_log::test]
fn histogram_reg_sampled() {
    let mut rp = RegParams::new("histogram_sampled");

    let grid = Grid::filled("flat", 10, 7, Sample::rgb(9, 9, 9)).unwrap();
    for factor in 1..=8u32 {
        let hist = grid.histogram_sampled(factor).unwrap();
        let expected = 10u32.div_ceil(factor) * 7u32.div_ceil(factor);
        rp.compare_values(expected as f64, hist.count(Channel::Green, 9) as f64, 0.0);
    }
    rp.compare_values(
        1.0,
        grid.histogram_sampled(0).unwrap_err().is_invalid_argument() as u8 as f64,
        0.0,
    );

    assert!(rp.cleanup(), "histogram_reg sampled tests failed");
}
