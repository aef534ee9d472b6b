//! Grid - the labelled raster container
//!
//! A [`Grid`] is a named, rectangular arrangement of [`Sample`]s.
//!
//! # Storage layout
//!
//! - Samples live in one contiguous row-major buffer of `width * height`
//!   entries; sample `(x, y)` is at index `y * width + x`
//! - `width >= 1` and `height >= 1`
//! - Rows cannot be jagged: rectangularity is checked once at construction
//!
//! # Ownership model
//!
//! `Grid` is immutable after construction and keeps its storage behind an
//! `Arc`, so `clone()` is cheap and a grid can be shared across threads
//! without locking. Every export (`copy_samples`, `to_bitmap`) hands out
//! fresh storage that does not alias the grid.

mod access;
mod histogram;

pub use access::Rows;
pub use histogram::{ChannelHistogram, HISTOGRAM_BINS, HistogramRenderer};

use crate::bitmap::{Bitmap, BitmapMut};
use crate::error::{Error, Result};
use crate::sample::Sample;
use log::debug;
use std::sync::Arc;

/// Internal grid data
#[derive(Debug, PartialEq)]
struct GridData {
    /// Width in samples
    width: u32,
    /// Height in samples
    height: u32,
    /// Row-major samples, `width * height` entries
    samples: Box<[Sample]>,
}

/// Grid - labelled rectangular image
///
/// # Examples
///
/// ```
/// use pixgrid_core::{Grid, Sample};
///
/// let rows = vec![
///     vec![Sample::rgb(255, 0, 0), Sample::rgb(0, 255, 0)],
///     vec![Sample::rgb(0, 0, 255), Sample::rgb(255, 255, 255)],
/// ];
/// let grid = Grid::from_rows("quad", &rows).unwrap();
/// assert_eq!(grid.width(), 2);
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.get_pixel(1, 0).unwrap(), Sample::rgb(0, 255, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    label: String,
    inner: Arc<GridData>,
}

impl Grid {
    /// Build a grid from a 2-D arrangement of samples.
    ///
    /// The grid gets its own deep copy; later changes to `rows` are not
    /// visible through it.
    ///
    /// # Errors
    ///
    /// - [`Error::NullInput`] if `label` is empty, or `rows` is empty or
    ///   starts with an empty row
    /// - [`Error::JaggedRows`] if any row's length differs from the first
    pub fn from_rows<R: AsRef<[Sample]>>(label: impl Into<String>, rows: &[R]) -> Result<Self> {
        let label = validate_label(label.into())?;
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if width == 0 {
            return Err(Error::NullInput("samples"));
        }

        let mut samples = Vec::with_capacity(width * rows.len());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(Error::JaggedRows {
                    row: i,
                    expected: width,
                    actual: row.len(),
                });
            }
            samples.extend_from_slice(row);
        }

        let (width, height) = checked_dimensions(width, rows.len())?;
        Ok(Self::assemble(label, width, height, samples))
    }

    /// Build a grid from explicitly optional arguments.
    ///
    /// Absent arguments fail the same way empty ones do.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullInput`] if either argument is `None`, plus every
    /// error of [`Grid::from_rows`].
    pub fn from_rows_opt<R: AsRef<[Sample]>>(
        label: Option<&str>,
        rows: Option<&[R]>,
    ) -> Result<Self> {
        let label = label.ok_or(Error::NullInput("label"))?;
        let rows = rows.ok_or(Error::NullInput("samples"))?;
        Self::from_rows(label, rows)
    }

    /// Build a grid that takes ownership of a row-major sample buffer.
    ///
    /// # Errors
    ///
    /// - [`Error::NullInput`] if `label` is empty
    /// - [`Error::InvalidDimension`] if `width` or `height` is 0
    /// - [`Error::SampleCountMismatch`] if `samples.len() != width * height`
    pub fn from_samples(
        label: impl Into<String>,
        width: u32,
        height: u32,
        samples: Vec<Sample>,
    ) -> Result<Self> {
        let label = validate_label(label.into())?;
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(Error::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self::assemble(label, width, height, samples))
    }

    /// Build a grid where every sample equals `sample`.
    ///
    /// # Errors
    ///
    /// Same as [`Grid::from_samples`].
    pub fn filled(
        label: impl Into<String>,
        width: u32,
        height: u32,
        sample: Sample,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let samples = vec![sample; width as usize * height as usize];
        Self::from_samples(label, width, height, samples)
    }

    /// Decode an external bitmap into a grid.
    ///
    /// Packed pixel `(x, y)` of the bitmap becomes sample `(x, y)` of the
    /// grid.
    ///
    /// # Errors
    ///
    /// - [`Error::NullInput`] if `label` is empty or the bitmap has no pixels
    pub fn from_bitmap<B: Bitmap + ?Sized>(label: impl Into<String>, bitmap: &B) -> Result<Self> {
        let label = validate_label(label.into())?;
        let (width, height) = (bitmap.width(), bitmap.height());
        if width == 0 || height == 0 {
            return Err(Error::NullInput("bitmap"));
        }

        let mut samples = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                samples.push(Sample::from_argb(bitmap.argb(x, y)));
            }
        }
        Ok(Self::assemble(label, width, height, samples))
    }

    /// Decode an optional bitmap into a grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullInput`] if `bitmap` is `None`, plus every error
    /// of [`Grid::from_bitmap`].
    pub fn from_bitmap_opt<B: Bitmap + ?Sized>(
        label: impl Into<String>,
        bitmap: Option<&B>,
    ) -> Result<Self> {
        let bitmap = bitmap.ok_or(Error::NullInput("bitmap"))?;
        Self::from_bitmap(label, bitmap)
    }

    /// Encode this grid into a new external bitmap of the same size.
    ///
    /// Pixel `(x, y)` of the result carries all four channels of
    /// `get_pixel(x, y)`. Repeated calls produce identical bitmaps.
    ///
    /// # Errors
    ///
    /// Propagates nothing today; kept fallible so bitmap backends with
    /// size limits can reject the grid.
    pub fn to_bitmap<B: BitmapMut>(&self) -> Result<B> {
        let mut bitmap = B::with_size(self.width(), self.height())?;
        for (y, row) in self.rows().enumerate() {
            for (x, sample) in row.iter().enumerate() {
                bitmap.set_argb(x as u32, y as u32, sample.to_argb());
            }
        }
        Ok(bitmap)
    }

    /// Same samples under a different label.
    ///
    /// The storage is shared with `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullInput`] if `label` is empty.
    pub fn with_name(&self, label: impl Into<String>) -> Result<Self> {
        Ok(Grid {
            label: validate_label(label.into())?,
            inner: Arc::clone(&self.inner),
        })
    }

    /// Check if two grids have the same width and height.
    pub fn sizes_equal(&self, other: &Grid) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    fn assemble(label: String, width: u32, height: u32, samples: Vec<Sample>) -> Self {
        debug_assert_eq!(samples.len(), width as usize * height as usize);
        debug!("grid '{label}': built {width}x{height}");
        Grid {
            label,
            inner: Arc::new(GridData {
                width,
                height,
                samples: samples.into_boxed_slice(),
            }),
        }
    }
}

fn validate_label(label: String) -> Result<String> {
    if label.is_empty() {
        return Err(Error::NullInput("label"));
    }
    Ok(label)
}

fn checked_dimensions(width: usize, height: usize) -> Result<(u32, u32)> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(Error::InvalidParameter(format!(
            "sample matrix too large: {width}x{height}"
        ))),
    }
}
