//! layer2-quant: palette quantization and bank layout for ZX Spectrum
//! Next Layer 2 images.
//!
//! This library turns a decoded RGB888 raster into the two artifacts a
//! Layer 2 loader consumes: a stream of palette-index bytes (one byte per
//! pixel) and an ordered palette of 9-bit colors. It is pure data
//! transformation -- no file I/O, no image decoding, no global state.
//!
//! # Quick Start
//!
//! ```
//! use layer2_quant::{quantize, ColorKey, Rgb888, RgbRaster, ScreenMode};
//!
//! let raster = RgbRaster::from_fn(256, 192, |x, y| {
//!     Rgb888::new((x / 32) as u8 * 36, (y / 32) as u8 * 42, 0)
//! });
//!
//! let image = quantize(&raster, ScreenMode::Tall, ColorKey::default()).unwrap();
//!
//! assert_eq!(image.indices().len(), 256 * 192);
//! assert_eq!(image.palette_file_bytes().len(), 512);
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! RGB888 raster            (decoded by the caller)
//!     |
//!     v
//! traversal order          (ScreenMode -> Traversal)
//!     |                    Wide:  X-outer, Y-inner
//!     |                    Tall:  row-major
//!     v
//! per-pixel quantization   (Rgb888 -> PackedColor, top 3 bits per channel)
//!     |
//!     +--> first seen?  -> append (lo, hi) to palette, assign next index
//!     |
//!     v
//! pixel-index stream       (one u8 per pixel, traversal order)
//!     |
//!     +--> split_banks()        -> fixed-size bank slices
//!     +--> palette_file_bytes() -> 512-byte .pal layout
//! ```
//!
//! # Bit-Precise Contracts
//!
//! Three properties of the output are load-bearing for the consuming
//! hardware loader and must never drift:
//!
//! - **Packed color layout.** A palette slot is two bytes: low byte
//!   `%RRRGGGBB`, high byte `%0000000B`, each channel reduced to its top
//!   3 bits. White is `[0xFF, 0x01]`, black is `[0x00, 0x00]`.
//! - **Traversal order.** The Wide (320x256) framebuffer is striped left
//!   to right, so pixels are emitted X-outer/Y-inner -- as if the image
//!   were flipped horizontally, rotated 90 degrees counter-clockwise and
//!   read row-major. Tall (256x192 / 256x256) images are plain row-major.
//!   A wrong order yields a correctly-sized but scrambled screen.
//! - **Palette file size.** A `.pal` serialization is always exactly 512
//!   bytes; slots beyond the populated palette length stay zero.
//!
//! # Palette Assignment
//!
//! Indices are assigned in first-occurrence order during traversal,
//! keyed on the exact RGB888 source value by default ([`ColorKey`]).
//! Exceeding 256 distinct keys is an explicit
//! [`PaletteError::Overflow`]; wrapping the index in 8-bit arithmetic
//! would corrupt the image silently.

pub mod color;
pub mod output;
pub mod palette;
pub mod quantize;
pub mod raster;


pub use color::{PackedColor, Rgb888};
pub use output::{BankSplit, IndexedImage};
pub use palette::{Palette, PaletteError, FILE_LEN, MAX_ENTRIES};
pub use quantize::{quantize, ColorKey, QuantizeError, ScreenMode, Traversal};
pub use raster::RgbRaster;
