//! Packed 32-bit color helpers.
//!
//! # Pixel format
//!
//! External bitmaps exchange pixels as `0xAARRGGBB` (alpha in the MSB,
//! blue in the LSB). Every conversion between a [`Sample`](crate::Sample)
//! and a packed value goes through these functions.

/// Shift amounts for extracting color channels
pub const ALPHA_SHIFT: u32 = 24;
pub const RED_SHIFT: u32 = 16;
pub const GREEN_SHIFT: u32 = 8;
pub const BLUE_SHIFT: u32 = 0;

/// Extract red component from a packed pixel.
#[inline]
pub fn red(pixel: u32) -> u8 {
    ((pixel >> RED_SHIFT) & 0xff) as u8
}

/// Extract green component from a packed pixel.
#[inline]
pub fn green(pixel: u32) -> u8 {
    ((pixel >> GREEN_SHIFT) & 0xff) as u8
}

/// Extract blue component from a packed pixel.
#[inline]
pub fn blue(pixel: u32) -> u8 {
    ((pixel >> BLUE_SHIFT) & 0xff) as u8
}

/// Extract alpha component from a packed pixel.
#[inline]
pub fn alpha(pixel: u32) -> u8 {
    ((pixel >> ALPHA_SHIFT) & 0xff) as u8
}

/// Compose an opaque packed pixel (alpha = 255).
#[inline]
pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
    compose_argb(255, r, g, b)
}

/// Compose a packed pixel from all four channels.
#[inline]
pub fn compose_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << ALPHA_SHIFT)
        | ((r as u32) << RED_SHIFT)
        | ((g as u32) << GREEN_SHIFT)
        | ((b as u32) << BLUE_SHIFT)
}

/// Extract `(r, g, b, a)` from a packed pixel.
#[inline]
pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
    (red(pixel), green(pixel), blue(pixel), alpha(pixel))
}
