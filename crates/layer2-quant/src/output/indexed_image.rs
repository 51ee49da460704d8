//! IndexedImage struct with bank and palette-file serialization.
//!
//! [`IndexedImage`] wraps the quantized palette-index stream with
//! dimension metadata, the screen mode, and an owned [`Palette`]. The
//! index stream is canonical; bank slices and the 512-byte palette file
//! are derived on demand.

use crate::palette::{Palette, FILE_LEN};
use crate::quantize::ScreenMode;

/// The canonical output of the quantization pipeline.
///
/// Stores one `u8` palette index per source pixel, in the screen mode's
/// traversal order, together with the palette the indices refer to. Two
/// serialized forms are available:
///
/// - [`split_banks()`](IndexedImage::split_banks): fixed-size bank slices
///   for chunked loading
/// - [`palette_file_bytes()`](IndexedImage::palette_file_bytes): the fixed
///   512-byte `.pal` layout
///
/// # Example
///
/// ```
/// use layer2_quant::{quantize, ColorKey, Rgb888, RgbRaster, ScreenMode};
///
/// let raster = RgbRaster::from_fn(320, 256, |_, _| Rgb888::new(0, 0, 0));
/// let image = quantize(&raster, ScreenMode::Wide, ColorKey::default()).unwrap();
///
/// let split = image.split_banks(16);
/// assert_eq!(split.banks.len(), 5); // 80 KiB in 16 KiB banks
/// assert_eq!(split.dropped, 0);
/// ```
#[derive(Debug, Clone)]
pub struct IndexedImage {
    /// Palette indices, one per pixel, in traversal order.
    indices: Vec<u8>,
    /// Source raster width in pixels.
    width: u32,
    /// Source raster height in pixels.
    height: u32,
    /// The screen mode the indices were laid out for.
    mode: ScreenMode,
    /// The palette the indices refer to.
    palette: Palette,
}

/// The result of slicing an index stream into fixed-size banks.
///
/// `banks` are contiguous, non-overlapping slices of the stream, each
/// exactly one chunk long. `dropped` is the length of the trailing
/// remainder that did not fill a whole chunk; it is discarded, never
/// emitted, but the count is surfaced so callers can warn about it.
#[derive(Debug)]
pub struct BankSplit<'a> {
    /// Full-size bank slices in stream order.
    pub banks: Vec<&'a [u8]>,
    /// Trailing bytes not emitted because they fall short of a full bank.
    pub dropped: usize,
}

impl IndexedImage {
    /// Create a new `IndexedImage` from quantized palette indices.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height`.
    pub fn new(
        indices: Vec<u8>,
        width: u32,
        height: u32,
        mode: ScreenMode,
        palette: Palette,
    ) -> Self {
        debug_assert_eq!(
            indices.len(),
            width as usize * height as usize,
            "indices length must match width * height"
        );
        Self {
            indices,
            width,
            height,
            mode,
            palette,
        }
    }

    /// The raw pixel-index byte stream, one byte per source pixel, in
    /// traversal order.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Source raster width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Source raster height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The screen mode the index stream was laid out for.
    #[inline]
    pub fn mode(&self) -> ScreenMode {
        self.mode
    }

    /// The palette the indices refer to.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Slice the index stream into `chunk_size_kib * 1024`-byte banks.
    ///
    /// Emits `floor(len / chunk_bytes)` banks; any trailing remainder
    /// shorter than one bank is reported in [`BankSplit::dropped`] rather
    /// than emitted. For the supported modes and the common 8 or 16 KiB
    /// bank sizes the stream divides evenly and nothing is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size_kib` is 0. Callers that want the whole
    /// stream as one file should use [`indices()`](Self::indices) instead.
    pub fn split_banks(&self, chunk_size_kib: u32) -> BankSplit<'_> {
        assert!(chunk_size_kib > 0, "chunk size must be at least 1 KiB");
        let chunk_bytes = chunk_size_kib as usize * 1024;
        let count = self.indices.len() / chunk_bytes;
        let banks = (0..count)
            .map(|i| &self.indices[i * chunk_bytes..(i + 1) * chunk_bytes])
            .collect();
        BankSplit {
            banks,
            dropped: self.indices.len() - count * chunk_bytes,
        }
    }

    /// Serialize the palette to the fixed 512-byte `.pal` layout.
    #[inline]
    pub fn palette_file_bytes(&self) -> [u8; FILE_LEN] {
        self.palette.to_file_bytes()
    }
}
