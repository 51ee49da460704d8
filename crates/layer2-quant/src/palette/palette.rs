//! Insertion-ordered Layer 2 palette with fixed-size file serialization.
//!
//! This module provides the core `Palette` type: an ordered sequence of up
//! to 256 unique [`PackedColor`] entries, appended in first-occurrence
//! order during quantization and serialized into the fixed 512-byte `.pal`
//! layout the hardware loads into a bank.

use super::error::PaletteError;
use crate::color::PackedColor;

/// Maximum number of palette entries. Pixel bytes index the palette, so
/// the palette can never exceed the range of a `u8`.
pub const MAX_ENTRIES: usize = 256;

/// Size of a serialized palette file: 256 two-byte slots, always.
pub const FILE_LEN: usize = 512;

/// An ordered Layer 2 palette of 9-bit colors.
///
/// Entries are assigned sequential indices starting at 0, in the order
/// they are pushed. The quantizer pushes one entry per *distinct source
/// color* in traversal order, so the same raster always produces the same
/// palette (same colors, same order, same indices).
///
/// # Capacity
///
/// A palette holds at most [`MAX_ENTRIES`] colors. [`push()`](Palette::push)
/// returns [`PaletteError::Overflow`] for the 257th entry instead of
/// wrapping the index.
///
/// # Example
///
/// ```
/// use layer2_quant::{PackedColor, Palette, Rgb888};
///
/// let mut palette = Palette::new();
/// let idx = palette.push(PackedColor::from(Rgb888::new(0, 0, 0))).unwrap();
/// assert_eq!(idx, 0);
/// assert_eq!(palette.len(), 1);
///
/// // Serialization is always exactly 512 bytes.
/// assert_eq!(palette.to_file_bytes().len(), 512);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PackedColor>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a color and return its assigned index.
    ///
    /// The caller is responsible for deduplication; the palette itself
    /// only enforces the capacity limit.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Overflow`] if the palette already holds
    /// [`MAX_ENTRIES`] colors.
    pub fn push(&mut self, color: PackedColor) -> Result<u8, PaletteError> {
        if self.entries.len() >= MAX_ENTRIES {
            return Err(PaletteError::Overflow);
        }
        let idx = self.entries.len() as u8;
        self.entries.push(color);
        Ok(idx)
    }

    /// Returns the number of populated entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries have been pushed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= len()`.
    #[inline]
    pub fn entry(&self, idx: usize) -> PackedColor {
        self.entries[idx]
    }

    /// All populated entries in index order.
    #[inline]
    pub fn entries(&self) -> &[PackedColor] {
        &self.entries
    }

    /// Serialize to the fixed 512-byte `.pal` file layout.
    ///
    /// Each entry occupies one little-endian two-byte slot (low byte
    /// `%RRRGGGBB`, high byte `%0000000B`) starting at offset 0. Slots
    /// beyond the populated length remain zero.
    pub fn to_file_bytes(&self) -> [u8; FILE_LEN] {
        let mut bytes = [0u8; FILE_LEN];
        for (i, entry) in self.entries.iter().enumerate() {
            let [lo, hi] = entry.to_bytes();
            bytes[i * 2] = lo;
            bytes[i * 2 + 1] = hi;
        }
        bytes
    }
}
