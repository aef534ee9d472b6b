//! Sample access functions
//!
//! Bounds-checked reads of single samples, rows, and whole-grid copies.
//! Nothing here hands out a mutable path into the grid's storage.

use super::Grid;
use crate::error::{Error, Result};
use crate::sample::Sample;
use std::iter::FusedIterator;

impl Grid {
    /// Get the label of the grid.
    #[inline]
    pub fn name(&self) -> &str {
        &self.label
    }

    /// Get the grid width in samples.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the grid height in samples.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Total number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.samples.len()
    }

    /// Always `false`; a grid holds at least one sample.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.samples.is_empty()
    }

    /// Get the sample at column `x`, row `y`.
    ///
    /// Coordinates are signed so that callers working in offset space can
    /// pass negative values and get an error instead of wrapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] unless `0 <= x < width` and
    /// `0 <= y < height`.
    pub fn get_pixel(&self, x: i64, y: i64) -> Result<Sample> {
        let (width, height) = self.dimensions();
        match (u32::try_from(x), u32::try_from(y)) {
            (Ok(ux), Ok(uy)) if ux < width && uy < height => Ok(self.sample_at(ux, uy)),
            _ => Err(Error::IndexOutOfBounds {
                x,
                y,
                width,
                height,
            }),
        }
    }

    /// Get the sample at `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Sample> {
        (x < self.inner.width && y < self.inner.height).then(|| self.sample_at(x, y))
    }

    /// Borrow row `y`, or `None` if out of bounds.
    pub fn row(&self, y: u32) -> Option<&[Sample]> {
        if y >= self.inner.height {
            return None;
        }
        let w = self.inner.width as usize;
        let start = y as usize * w;
        Some(&self.inner.samples[start..start + w])
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            chunks: self.inner.samples.chunks_exact(self.inner.width as usize),
        }
    }

    /// Borrow all samples in row-major order.
    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.inner.samples
    }

    /// Copy the grid into a freshly allocated row matrix.
    ///
    /// The result has `height` rows of `width` samples each and shares no
    /// storage with the grid.
    pub fn copy_samples(&self) -> Vec<Vec<Sample>> {
        self.rows().map(<[Sample]>::to_vec).collect()
    }

    #[inline]
    fn sample_at(&self, x: u32, y: u32) -> Sample {
        self.inner.samples[y as usize * self.inner.width as usize + x as usize]
    }
}

/// Iterator over the rows of a [`Grid`].
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    chunks: std::slice::ChunksExact<'a, Sample>,
}

impl<'a> Iterator for Rows<'a> {
    type Item = &'a [Sample];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl DoubleEndedIterator for Rows<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.chunks.next_back()
    }
}

impl ExactSizeIterator for Rows<'_> {}

impl FusedIterator for Rows<'_> {}
