//! Packed 9-bit (RGB333) hardware color
//!
//! Layer 2 palette entries use 3 bits per channel, stored across two bytes.
//! Blue is split: its top two bits live in the low byte and its least
//! significant bit is the only populated bit of the high byte.

use super::rgb::Rgb888;

/// A 9-bit hardware color as stored in a `.pal` file slot.
///
/// Layout (two bytes, little-endian slot order):
///
/// ```text
/// lo: %RRRGGGBB   (R bits 7-5, G bits 4-2, top two B bits 1-0)
/// hi: %0000000B   (least significant B bit)
/// ```
///
/// The conversion from [`Rgb888`] keeps the top 3 bits of each channel and
/// is a deterministic pure function, so equal source pixels always produce
/// equal packed colors.
///
/// # Example
///
/// ```
/// use layer2_quant::{PackedColor, Rgb888};
///
/// let white = PackedColor::from(Rgb888::new(255, 255, 255));
/// assert_eq!(white.to_bytes(), [0xFF, 0x01]);
///
/// let black = PackedColor::from(Rgb888::new(0, 0, 0));
/// assert_eq!(black.to_bytes(), [0x00, 0x00]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedColor {
    lo: u8,
    hi: u8,
}

impl PackedColor {
    /// The low byte, `%RRRGGGBB`.
    #[inline]
    pub fn lo(self) -> u8 {
        self.lo
    }

    /// The high byte, `%0000000B`.
    #[inline]
    pub fn hi(self) -> u8 {
        self.hi
    }

    /// The two file bytes in slot order: low byte first, then high byte.
    #[inline]
    pub fn to_bytes(self) -> [u8; 2] {
        [self.lo, self.hi]
    }

    /// A single 16-bit view, `(hi << 8) | lo`, convenient for matching and
    /// test assertions. Only the low 9 bits can ever be set.
    #[inline]
    pub fn to_u16(self) -> u16 {
        ((self.hi as u16) << 8) | self.lo as u16
    }
}

impl From<Rgb888> for PackedColor {
    /// Quantize an RGB888 pixel to 9 bits, keeping the top 3 bits of each
    /// channel.
    fn from(c: Rgb888) -> Self {
        let r3 = c.r >> 5;
        let g3 = c.g >> 5;
        let b3 = c.b >> 5;
        Self {
            lo: (r3 << 5) | (g3 << 2) | (b3 >> 1),
            hi: b3 & 1,
        }
    }
}
