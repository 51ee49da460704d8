//! RGB888 source pixel type
//!
//! RGB888 is what image decoders hand us: one unsigned byte per channel.
//! Pixels are ephemeral -- they exist only while the quantizer walks the
//! raster and are never retained in the output.

/// A source pixel with 8 bits per channel.
///
/// `Rgb888` is `Eq + Hash` because the palette deduplicates on the exact
/// source value: two pixels are the same palette entry if and only if all
/// three channel bytes match. See [`ColorKey`](crate::quantize::ColorKey)
/// for the alternative keyed on the packed 9-bit value.
///
/// # Example
///
/// ```
/// use layer2_quant::Rgb888;
///
/// let c = Rgb888::new(255, 128, 0);
/// assert_eq!(c.to_bytes(), [255, 128, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb888 {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb888 {
    /// Create a pixel from channel bytes.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a pixel from a byte array `[R, G, B]`.
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}
