//! First-seen palette assignment over a raster.
//!
//! The quantizer walks the raster in the screen mode's traversal order,
//! assigns each distinct color the next sequential palette index on first
//! sight, and emits one index byte per pixel. It is a pure function of
//! `(raster, mode, key)` -- the same inputs always produce the same
//! palette and the same index stream.

use std::collections::HashMap;

use super::error::QuantizeError;
use super::mode::ScreenMode;
use crate::color::{PackedColor, Rgb888};
use crate::output::IndexedImage;
use crate::palette::Palette;
use crate::raster::RgbRaster;

/// How source colors are keyed for palette deduplication.
///
/// The default keys on the exact RGB888 value, so two source colors
/// differing only in bits the 9-bit encoding discards still take two
/// palette slots. That can exhaust the 256-slot palette faster than
/// necessary, but changing the key also changes index assignment order,
/// so the packed key is an explicit opt-in rather than a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorKey {
    /// Key on the exact RGB888 source value.
    #[default]
    SourceRgb,

    /// Key on the packed 9-bit value, merging source colors that quantize
    /// identically into one palette slot.
    Packed,
}

impl ColorKey {
    /// The dedup key for a pixel under this keying scheme.
    #[inline]
    fn key_of(self, pixel: Rgb888, packed: PackedColor) -> u32 {
        match self {
            ColorKey::SourceRgb => {
                ((pixel.r as u32) << 16) | ((pixel.g as u32) << 8) | pixel.b as u32
            }
            ColorKey::Packed => packed.to_u16() as u32,
        }
    }
}

/// Quantize a raster into a palette and pixel-index stream.
///
/// Pixels are visited in `mode.traversal()` order. Each first-seen color
/// key appends its [`PackedColor`] to the palette and receives the next
/// sequential index; every pixel contributes one index byte to the stream,
/// so the stream length is exactly `width * height`.
///
/// # Errors
///
/// - [`QuantizeError::UnsupportedDimensions`] if the raster does not match
///   `mode`.
/// - [`QuantizeError::Palette`] if more than 256 distinct color keys are
///   encountered. The index never wraps; overflow is always surfaced.
///
/// # Example
///
/// ```
/// use layer2_quant::{quantize, ColorKey, Rgb888, RgbRaster, ScreenMode};
///
/// let raster = RgbRaster::from_fn(256, 192, |x, _| {
///     if x < 128 {
///         Rgb888::new(0, 0, 0)
///     } else {
///         Rgb888::new(255, 255, 255)
///     }
/// });
/// let image = quantize(&raster, ScreenMode::Tall, ColorKey::SourceRgb).unwrap();
///
/// assert_eq!(image.palette().len(), 2);
/// assert_eq!(image.indices().len(), 256 * 192);
/// ```
pub fn quantize(
    raster: &RgbRaster,
    mode: ScreenMode,
    key: ColorKey,
) -> Result<IndexedImage, QuantizeError> {
    let (width, height) = (raster.width(), raster.height());
    if !mode.supports(width, height) {
        return Err(QuantizeError::UnsupportedDimensions { width, height });
    }

    let mut palette = Palette::new();
    let mut assigned: HashMap<u32, u8> = HashMap::new();
    let mut indices = Vec::with_capacity(width as usize * height as usize);

    for (x, y) in mode.traversal().visit(width, height) {
        let pixel = raster.get(x, y);
        let packed = PackedColor::from(pixel);
        let k = key.key_of(pixel, packed);
        let idx = match assigned.get(&k) {
            Some(&idx) => idx,
            None => {
                let idx = palette.push(packed)?;
                assigned.insert(k, idx);
                idx
            }
        };
        indices.push(idx);
    }

    Ok(IndexedImage::new(indices, width, height, mode, palette))
}
