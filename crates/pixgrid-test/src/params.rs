//! Regression test parameters and operations

use pixgrid_core::{Channel, ChannelHistogram, Grid};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare and record failures (default)
    #[default]
    Compare,
    /// Compare, and also print every checked value
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the index of the current check, and whether
/// every check so far has passed.
pub struct RegParams {
    /// Name of the test (e.g., "grid_access")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode comes from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if self.display() {
            eprintln!("  [{:02}] expected = {}, actual = {}", self.index, expected, actual);
        }

        if diff > delta {
            self.fail(format!(
                "value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two grids sample by sample
    ///
    /// Labels are ignored; dimensions and all four channels of every
    /// sample must match.
    pub fn compare_grids(&mut self, grid1: &Grid, grid2: &Grid) -> bool {
        self.index += 1;

        if !grid1.sizes_equal(grid2) {
            self.fail(format!(
                "grid comparison for index {} - dimension mismatch: {}x{} vs {}x{}",
                self.index,
                grid1.width(),
                grid1.height(),
                grid2.width(),
                grid2.height()
            ));
            return false;
        }

        let mismatch = grid1
            .samples()
            .iter()
            .zip(grid2.samples())
            .position(|(a, b)| a != b);
        if let Some(i) = mismatch {
            let w = grid1.width() as usize;
            self.fail(format!(
                "grid comparison for index {} - sample mismatch at ({}, {})",
                self.index,
                i % w,
                i / w
            ));
            return false;
        }

        true
    }

    /// Compare two histograms bin by bin
    pub fn compare_histograms(
        &mut self,
        hist1: &ChannelHistogram,
        hist2: &ChannelHistogram,
    ) -> bool {
        self.index += 1;

        for channel in Channel::ALL {
            let bins = hist1.channel(channel).iter().zip(hist2.channel(channel));
            if let Some((value, (a, b))) = bins.enumerate().find(|(_, (a, b))| a != b) {
                self.fail(format!(
                    "histogram comparison for index {} - {} bin {}: {} vs {}",
                    self.index,
                    channel.name(),
                    value,
                    a,
                    b
                ));
                return false;
            }
        }

        true
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    fn fail(&mut self, detail: String) {
        let msg = format!("Failure in {}_reg: {}", self.test_name, detail);
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixgrid_core::Sample;

    #[test]
    fn test_mode_parse() {
        assert_eq!(RegTestMode::parse("display"), RegTestMode::Display);
        assert_eq!(RegTestMode::parse("DISPLAY"), RegTestMode::Display);
        assert_eq!(RegTestMode::parse(""), RegTestMode::Compare);
        assert_eq!(RegTestMode::parse("generate"), RegTestMode::Compare);
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert_eq!(rp.index(), 1);
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_grids_reports_position() {
        let a = Grid::filled("a", 3, 2, Sample::rgb(1, 1, 1)).unwrap();
        let mut samples = a.samples().to_vec();
        samples[4] = Sample::rgb(2, 2, 2);
        let b = Grid::from_samples("b", 3, 2, samples).unwrap();

        let mut rp = RegParams::new("test");
        assert!(rp.compare_grids(&a, &a.with_name("renamed").unwrap()));
        assert!(!rp.compare_grids(&a, &b));
        assert!(rp.failures()[0].contains("(1, 1)"));
    }

    #[test]
    fn test_compare_grids_dimension_mismatch() {
        let a = Grid::filled("a", 3, 2, Sample::default()).unwrap();
        let b = Grid::filled("b", 2, 3, Sample::default()).unwrap();
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_grids(&a, &b));
    }

    #[test]
    fn test_compare_histograms() {
        let a = Grid::filled("a", 2, 2, Sample::rgb(0, 0, 0)).unwrap();
        let b = Grid::filled("b", 2, 2, Sample::rgb(0, 0, 1)).unwrap();
        let mut rp = RegParams::new("test");
        assert!(rp.compare_histograms(&a.histogram(), &a.histogram()));
        assert!(!rp.compare_histograms(&a.histogram(), &b.histogram()));
        assert!(rp.failures()[0].contains("blue bin 0"));
    }
}
