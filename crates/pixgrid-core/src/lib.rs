//! pixgrid Core - raster data model for image editing
//!
//! This crate provides the data layer of an image editor:
//!
//! - [`Sample`] - One pixel's color (red, green, blue, alpha)
//! - [`Grid`] - A labelled, rectangular, immutable arrangement of samples
//! - [`ChannelHistogram`] - Per-channel 256-bin value distribution
//! - [`Bitmap`] / [`BitmapMut`] - Import/export boundary for external rasters
//!
//! Grids are validated once at construction and never mutated afterwards,
//! so they can be shared between threads freely.
//!
//! # Example
//!
//! ```
//! use pixgrid_core::{Channel, Grid, PackedBitmap, Sample};
//!
//! let rows = vec![
//!     vec![Sample::rgb(255, 0, 0), Sample::rgb(0, 255, 0)],
//!     vec![Sample::rgb(0, 0, 255), Sample::rgb(255, 255, 255)],
//! ];
//! let grid = Grid::from_rows("quad", &rows).unwrap();
//!
//! let hist = grid.histogram();
//! assert_eq!(hist.count(Channel::Red, 255), 2);
//!
//! let bitmap: PackedBitmap = grid.to_bitmap().unwrap();
//! let back = Grid::from_bitmap("quad", &bitmap).unwrap();
//! assert_eq!(back, grid);
//! ```

pub mod bitmap;
pub mod color;
pub mod error;
pub mod grid;
pub mod sample;

pub use bitmap::{Bitmap, BitmapMut, PackedBitmap};
pub use error::{Error, Result};
pub use grid::{ChannelHistogram, Grid, HISTOGRAM_BINS, HistogramRenderer, Rows};
pub use sample::{Channel, Sample};
