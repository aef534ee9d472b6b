//! Histogram generation for grids
//!
//! Per-channel distributions of sample values, handed to a plotting
//! component through [`HistogramRenderer`].

use super::Grid;
use crate::error::{Error, Result};
use crate::sample::Channel;
use log::{debug, trace};
use std::collections::BTreeMap;

/// Number of bins per channel.
pub const HISTOGRAM_BINS: usize = 256;

/// RGB channel histograms
///
/// Three 256-bin counters indexed `[channel][value]`, channel order red,
/// green, blue. Alpha is not counted.
///
/// Counters are `u64`: a grid of `u32::MAX x u32::MAX` samples still fits
/// in a single bin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelHistogram {
    bins: [[u64; HISTOGRAM_BINS]; 3],
}

impl Default for ChannelHistogram {
    fn default() -> Self {
        ChannelHistogram {
            bins: [[0; HISTOGRAM_BINS]; 3],
        }
    }
}

impl ChannelHistogram {
    /// Wrap a precomputed `[channel][value]` array.
    pub fn from_array(bins: [[u64; HISTOGRAM_BINS]; 3]) -> Self {
        ChannelHistogram { bins }
    }

    /// Counters for one channel.
    #[inline]
    pub fn channel(&self, channel: Channel) -> &[u64; HISTOGRAM_BINS] {
        &self.bins[channel.index()]
    }

    /// Number of counted samples whose `channel` equals `value`.
    #[inline]
    pub fn count(&self, channel: Channel, value: u8) -> u64 {
        self.bins[channel.index()][value as usize]
    }

    /// Sum of all counters for one channel.
    ///
    /// Equal for every channel, and equal to `width * height` for a
    /// full-coverage histogram.
    pub fn total(&self, channel: Channel) -> u64 {
        self.channel(channel).iter().sum()
    }

    /// Largest counter across all channels.
    pub fn max_count(&self) -> u64 {
        self.bins.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Borrow the raw `[channel][value]` array.
    #[inline]
    pub fn as_array(&self) -> &[[u64; HISTOGRAM_BINS]; 3] {
        &self.bins
    }

    /// Consume into the raw `[channel][value]` array.
    #[inline]
    pub fn into_array(self) -> [[u64; HISTOGRAM_BINS]; 3] {
        self.bins
    }

    /// Value-to-frequency map for one channel.
    ///
    /// Every value 0..=255 is present, including those with count 0.
    pub fn value_counts(&self, channel: Channel) -> BTreeMap<u8, u64> {
        self.channel(channel)
            .iter()
            .enumerate()
            .map(|(value, &count)| (value as u8, count))
            .collect()
    }

    /// Unscaled plot points for one channel.
    ///
    /// Point `i` is `(i * x_step, count(i))`. Fitting the points to a
    /// display is left to the renderer.
    pub fn polyline(&self, channel: Channel, x_step: u32) -> Vec<(u64, u64)> {
        self.channel(channel)
            .iter()
            .enumerate()
            .map(|(i, &count)| (i as u64 * u64::from(x_step), count))
            .collect()
    }

    #[inline]
    fn record(&mut self, red: u8, green: u8, blue: u8) {
        self.bins[0][red as usize] += 1;
        self.bins[1][green as usize] += 1;
        self.bins[2][blue as usize] += 1;
    }
}

/// Consumer of computed histograms, typically a plotting view.
pub trait HistogramRenderer {
    /// Error raised by the rendering backend.
    type Error;

    /// Draw `histogram`.
    fn render(&mut self, histogram: &ChannelHistogram) -> std::result::Result<(), Self::Error>;
}

impl Grid {
    /// Get the RGB histogram of the grid.
    ///
    /// Every sample is counted once per channel, so each channel's
    /// counters sum to `width * height`.
    ///
    /// # Example
    ///
    /// ```
    /// use pixgrid_core::{Channel, Grid, Sample};
    ///
    /// let grid = Grid::filled("red", 10, 10, Sample::rgb(255, 0, 0)).unwrap();
    /// let hist = grid.histogram();
    /// assert_eq!(hist.count(Channel::Red, 255), 100);
    /// assert_eq!(hist.count(Channel::Green, 0), 100);
    /// ```
    pub fn histogram(&self) -> ChannelHistogram {
        let mut hist = ChannelHistogram::default();
        for s in self.samples() {
            hist.record(s.red(), s.green(), s.blue());
        }
        debug!(
            "grid '{}': histogram over {} samples",
            self.name(),
            self.len()
        );
        hist
    }

    /// Get the RGB histogram from every `factor`-th column of every
    /// `factor`-th row.
    ///
    /// A factor of 1 counts all samples and matches [`Grid::histogram`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `factor` is 0.
    pub fn histogram_sampled(&self, factor: u32) -> Result<ChannelHistogram> {
        if factor == 0 {
            return Err(Error::InvalidParameter("factor must be >= 1".to_string()));
        }
        if factor == 1 {
            return Ok(self.histogram());
        }

        let step = factor as usize;
        let mut hist = ChannelHistogram::default();
        for row in self.rows().step_by(step) {
            for s in row.iter().step_by(step) {
                hist.record(s.red(), s.green(), s.blue());
            }
        }
        trace!(
            "grid '{}': sampled histogram, factor {factor}, {} samples",
            self.name(),
            hist.total(Channel::Red)
        );
        Ok(hist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Sample;

    fn quad() -> Grid {
        let rows = [
            [Sample::rgb(255, 0, 0), Sample::rgb(0, 255, 0)],
            [Sample::rgb(0, 0, 255), Sample::rgb(255, 255, 255)],
        ];
        Grid::from_rows("quad", &rows).unwrap()
    }

    #[test]
    fn test_histogram_primary_quad() {
        let hist = quad().histogram();
        for channel in Channel::ALL {
            assert_eq!(hist.count(channel, 0), 2);
            assert_eq!(hist.count(channel, 255), 2);
            let others: u64 = hist.channel(channel)[1..255].iter().sum();
            assert_eq!(others, 0);
        }
    }

    #[test]
    fn test_histogram_ignores_alpha() {
        let grid = Grid::filled("clear", 3, 3, Sample::rgba(10, 20, 30, 0)).unwrap();
        let hist = grid.histogram();
        assert_eq!(hist.count(Channel::Red, 10), 9);
        assert_eq!(hist.count(Channel::Green, 20), 9);
        assert_eq!(hist.count(Channel::Blue, 30), 9);
        assert_eq!(hist.count(Channel::Red, 0), 0);
    }

    #[test]
    fn test_histogram_totals() {
        let samples = (0..600u32)
            .map(|i| Sample::rgb((i % 256) as u8, (i / 3) as u8, (i * 7 % 256) as u8))
            .collect();
        let grid = Grid::from_samples("mixed", 30, 20, samples).unwrap();
        let hist = grid.histogram();
        for channel in Channel::ALL {
            assert_eq!(hist.total(channel), 600);
        }
    }

    #[test]
    fn test_histogram_sampled() {
        let grid = Grid::filled("gray", 100, 100, Sample::rgb(50, 50, 50)).unwrap();
        assert_eq!(grid.histogram_sampled(1).unwrap(), grid.histogram());
        // 50 * 50 samples with factor 2
        assert_eq!(
            grid.histogram_sampled(2).unwrap().count(Channel::Red, 50),
            2500
        );
        // 34 * 34 samples with factor 3
        assert_eq!(grid.histogram_sampled(3).unwrap().total(Channel::Blue), 1156);
        assert!(grid.histogram_sampled(0).is_err());
    }

    #[test]
    fn test_value_counts_has_every_key() {
        let counts = quad().histogram().value_counts(Channel::Green);
        assert_eq!(counts.len(), 256);
        assert_eq!(counts[&0], 2);
        assert_eq!(counts[&255], 2);
        assert_eq!(counts[&128], 0);
    }

    #[test]
    fn test_polyline_and_max() {
        let hist = quad().histogram();
        let points = hist.polyline(Channel::Red, 2);
        assert_eq!(points.len(), 256);
        assert_eq!(points[0], (0, 2));
        assert_eq!(points[255], (510, 2));
        assert_eq!(points[1], (2, 0));
        assert_eq!(hist.max_count(), 2);
    }

    #[test]
    fn test_polyline_wide_step() {
        let grid = Grid::filled("dot", 1, 1, Sample::rgb(255, 0, 0)).unwrap();
        let hist = grid.histogram();
        let points = hist.polyline(Channel::Red, u32::MAX);
        assert_eq!(points[255], (255 * u64::from(u32::MAX), 1));
        assert_eq!(hist.polyline(Channel::Red, u32::MAX / 100)[1].0, 42_949_672);
    }

    #[test]
    fn test_counts_beyond_u32() {
        let mut bins = [[0u64; HISTOGRAM_BINS]; 3];
        for channel in &mut bins {
            channel[0] = u64::from(u32::MAX);
            channel[1] = 2;
        }
        let hist = ChannelHistogram::from_array(bins);
        assert_eq!(hist.total(Channel::Green), u64::from(u32::MAX) + 2);
        assert_eq!(hist.max_count(), u64::from(u32::MAX));
    }

    #[test]
    fn test_array_roundtrip() {
        let hist = quad().histogram();
        let copy = ChannelHistogram::from_array(*hist.as_array());
        assert_eq!(copy, hist);
        assert_eq!(hist.into_array()[2][255], 2);
    }

    #[test]
    fn test_renderer_receives_histogram() {
        struct Recorder(Vec<u64>);

        impl HistogramRenderer for Recorder {
            type Error = std::convert::Infallible;

            fn render(
                &mut self,
                histogram: &ChannelHistogram,
            ) -> std::result::Result<(), Self::Error> {
                self.0 = Channel::ALL.iter().map(|&c| histogram.total(c)).collect();
                Ok(())
            }
        }

        let mut recorder = Recorder(Vec::new());
        recorder.render(&quad().histogram()).unwrap();
        assert_eq!(recorder.0, vec![4, 4, 4]);
    }
}
