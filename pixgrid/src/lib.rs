//! pixgrid - Raster data model for a small image editor
//!
//! A [`Grid`] stores a labelled rectangular image of [`Sample`]s, gives
//! bounds-checked access to them, converts to and from external bitmaps,
//! and summarizes its colors as a [`ChannelHistogram`] for plotting.
//!
//! # Example
//!
//! ```
//! use pixgrid::{Channel, Grid, Sample};
//!
//! let grid = Grid::filled("canvas", 64, 48, Sample::rgb(30, 60, 90)).unwrap();
//! assert_eq!(grid.get_pixel(63, 47).unwrap(), Sample::rgb(30, 60, 90));
//! assert!(grid.get_pixel(64, 0).is_err());
//!
//! let hist = grid.histogram();
//! assert_eq!(hist.count(Channel::Blue, 90), 64 * 48);
//! ```

// Re-export core types
pub use pixgrid_core::*;
