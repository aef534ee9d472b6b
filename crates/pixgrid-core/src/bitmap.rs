//! External bitmap interop
//!
//! A bitmap is any raster that exposes its size and a packed `0xAARRGGBB`
//! value per pixel. [`Grid::from_bitmap`](crate::Grid::from_bitmap) and
//! [`Grid::to_bitmap`](crate::Grid::to_bitmap) are written against the
//! [`Bitmap`] / [`BitmapMut`] traits so any backend can plug in.
//!
//! [`PackedBitmap`] is the in-memory backend. With the `image` feature,
//! `image::RgbaImage` implements both traits as well.

use crate::color;
use crate::error::{Error, Result};

/// Read access to a packed-ARGB raster.
pub trait Bitmap {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Packed `0xAARRGGBB` value at `(x, y)`.
    ///
    /// Callers keep `x < width()` and `y < height()`.
    fn argb(&self, x: u32, y: u32) -> u32;
}

/// Write access to a packed-ARGB raster.
pub trait BitmapMut: Bitmap + Sized {
    /// Allocate a bitmap of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the backend cannot hold a
    /// raster of that size.
    fn with_size(width: u32, height: u32) -> Result<Self>;

    /// Store a packed `0xAARRGGBB` value at `(x, y)`.
    fn set_argb(&mut self, x: u32, y: u32, pixel: u32);
}

/// In-memory raster of packed ARGB words, one per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl PackedBitmap {
    /// Create a zeroed (transparent black) bitmap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(PackedBitmap {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        })
    }

    /// Wrap existing row-major packed pixels.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if width or height is 0
    /// - [`Error::SampleCountMismatch`] if `data.len() != width * height`
    pub fn from_raw(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::SampleCountMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(PackedBitmap {
            width,
            height,
            data,
        })
    }

    /// Raw packed pixels.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Consume into raw packed pixels.
    pub fn into_raw(self) -> Vec<u32> {
        self.data
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }
}

impl Bitmap for PackedBitmap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn argb(&self, x: u32, y: u32) -> u32 {
        self.data[self.index(x, y)]
    }
}

impl BitmapMut for PackedBitmap {
    fn with_size(width: u32, height: u32) -> Result<Self> {
        PackedBitmap::new(width, height)
    }

    #[inline]
    fn set_argb(&mut self, x: u32, y: u32, pixel: u32) {
        let i = self.index(x, y);
        self.data[i] = pixel;
    }
}

#[cfg(feature = "image")]
mod image_backend {
    use super::{Bitmap, BitmapMut, color};
    use crate::error::{Error, Result};
    use crate::grid::Grid;
    use image::{DynamicImage, Rgba, RgbaImage};

    impl Bitmap for RgbaImage {
        fn width(&self) -> u32 {
            self.dimensions().0
        }

        fn height(&self) -> u32 {
            self.dimensions().1
        }

        fn argb(&self, x: u32, y: u32) -> u32 {
            let Rgba([r, g, b, a]) = *self.get_pixel(x, y);
            color::compose_argb(a, r, g, b)
        }
    }

    impl BitmapMut for RgbaImage {
        fn with_size(width: u32, height: u32) -> Result<Self> {
            if width == 0 || height == 0 {
                return Err(Error::InvalidDimension { width, height });
            }
            Ok(RgbaImage::new(width, height))
        }

        fn set_argb(&mut self, x: u32, y: u32, pixel: u32) {
            let (r, g, b, a) = color::extract_rgba(pixel);
            self.put_pixel(x, y, Rgba([r, g, b, a]));
        }
    }

    impl Grid {
        /// Decode any `image` crate image into a grid.
        ///
        /// The image is converted to 8-bit RGBA first, so higher bit depths
        /// are reduced to the 8-bit channel precision of a sample.
        ///
        /// # Errors
        ///
        /// Same as [`Grid::from_bitmap`].
        pub fn from_dynamic_image(label: impl Into<String>, image: &DynamicImage) -> Result<Self> {
            Grid::from_bitmap(label, &image.to_rgba8())
        }

        /// Encode this grid as an 8-bit RGBA `image` crate buffer.
        ///
        /// # Errors
        ///
        /// Same as [`Grid::to_bitmap`].
        pub fn to_rgba_image(&self) -> Result<RgbaImage> {
            self.to_bitmap()
        }
    }
}
