//! Owned RGB888 raster
//!
//! [`RgbRaster`] is the handoff point between an image decoder and the
//! quantizer: a fully materialized width x height grid of [`Rgb888`]
//! pixels in row-major order. The crate itself never does I/O; callers
//! decode with whatever they like and build a raster from the result.

use crate::color::Rgb888;

/// A decoded RGB888 raster in row-major order.
///
/// # Example
///
/// ```
/// use layer2_quant::{Rgb888, RgbRaster};
///
/// let raster = RgbRaster::from_fn(2, 2, |x, y| {
///     Rgb888::new((x * 255) as u8, (y * 255) as u8, 0)
/// });
/// assert_eq!(raster.get(1, 0), Rgb888::new(255, 0, 0));
/// ```
#[derive(Debug, Clone)]
pub struct RgbRaster {
    width: u32,
    height: u32,
    pixels: Vec<Rgb888>,
}

impl RgbRaster {
    /// Build a raster by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Rgb888,
    {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Build a raster from a flat `[R, G, B, R, G, B, ...]` byte buffer in
    /// row-major order, as produced by common image decoders.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `bytes.len() == width * height * 3`.
    pub fn from_raw_rgb(width: u32, height: u32, bytes: &[u8]) -> Self {
        debug_assert_eq!(
            bytes.len(),
            width as usize * height as usize * 3,
            "byte buffer length must be width * height * 3"
        );
        let pixels = bytes
            .chunks_exact(3)
            .map(|p| Rgb888::new(p[0], p[1], p[2]))
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgb888 {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}
