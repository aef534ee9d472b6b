//! Sample - one picture element
//!
//! A [`Sample`] is an immutable color value with four 8-bit channels.
//! Alpha is carried through construction and bitmap interop but is never
//! histogrammed; only the three [`Channel`]s are.

use crate::color;
use crate::error::{Error, Result};

/// Histogrammed color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red channel (index 0)
    Red,
    /// Green channel (index 1)
    Green,
    /// Blue channel (index 2)
    Blue,
}

impl Channel {
    /// All channels in histogram order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position of this channel in a histogram array.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    /// Lowercase channel name.
    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

/// One pixel's color.
///
/// Equality and hashing compare all four channels.
///
/// # Examples
///
/// ```
/// use pixgrid_core::Sample;
///
/// let s = Sample::rgb(255, 128, 0);
/// assert_eq!(s.alpha(), 255);
/// assert_eq!(Sample::from_argb(s.to_argb()), s);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sample {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Default for Sample {
    /// Opaque black.
    fn default() -> Self {
        Sample::rgb(0, 0, 0)
    }
}

impl Sample {
    /// Create an opaque sample.
    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Sample {
            red,
            green,
            blue,
            alpha: 255,
        }
    }

    /// Create a sample with an explicit alpha.
    #[inline]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Sample {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a sample from wide integers, clamping each channel to [0, 255].
    pub fn clamped(red: i32, green: i32, blue: i32, alpha: i32) -> Self {
        let clamp = |v: i32| v.clamp(0, 255) as u8;
        Sample::rgba(clamp(red), clamp(green), clamp(blue), clamp(alpha))
    }

    /// Create a sample from wide integers, rejecting values outside [0, 255].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelOutOfRange`] for the first offending channel.
    pub fn try_new(red: i32, green: i32, blue: i32, alpha: i32) -> Result<Self> {
        let check = |channel: &'static str, value: i32| {
            u8::try_from(value).map_err(|_| Error::ChannelOutOfRange { channel, value })
        };
        Ok(Sample::rgba(
            check("red", red)?,
            check("green", green)?,
            check("blue", blue)?,
            check("alpha", alpha)?,
        ))
    }

    /// Decompose a packed `0xAARRGGBB` value.
    #[inline]
    pub fn from_argb(pixel: u32) -> Self {
        let (r, g, b, a) = color::extract_rgba(pixel);
        Sample::rgba(r, g, b, a)
    }

    /// Compose this sample into a packed `0xAARRGGBB` value.
    #[inline]
    pub fn to_argb(self) -> u32 {
        color::compose_argb(self.alpha, self.red, self.green, self.blue)
    }

    #[inline]
    pub fn red(self) -> u8 {
        self.red
    }

    #[inline]
    pub fn green(self) -> u8 {
        self.green
    }

    #[inline]
    pub fn blue(self) -> u8 {
        self.blue
    }

    #[inline]
    pub fn alpha(self) -> u8 {
        self.alpha
    }

    /// Value of one histogrammed channel.
    #[inline]
    pub fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Copy of this sample with a different red value.
    pub fn with_red(self, red: u8) -> Self {
        Sample { red, ..self }
    }

    /// Copy of this sample with a different green value.
    pub fn with_green(self, green: u8) -> Self {
        Sample { green, ..self }
    }

    /// Copy of this sample with a different blue value.
    pub fn with_blue(self, blue: u8) -> Self {
        Sample { blue, ..self }
    }

    /// Copy of this sample with a different alpha value.
    pub fn with_alpha(self, alpha: u8) -> Self {
        Sample { alpha, ..self }
    }
}

impl From<u32> for Sample {
    fn from(pixel: u32) -> Self {
        Sample::from_argb(pixel)
    }
}

impl From<Sample> for u32 {
    fn from(sample: Sample) -> Self {
        sample.to_argb()
    }
}

impl From<[u8; 4]> for Sample {
    /// `[r, g, b, a]` channel order.
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Sample::rgba(r, g, b, a)
    }
}

impl From<Sample> for [u8; 4] {
    fn from(s: Sample) -> Self {
        [s.red, s.green, s.blue, s.alpha]
    }
}
