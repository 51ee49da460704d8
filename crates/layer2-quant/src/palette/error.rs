//! Error types for palette operations

use thiserror::Error;

/// Error type for palette capacity violations.
///
/// A Layer 2 pixel is a single byte indexing into the palette, so a
/// palette can never hold more than 256 entries. Letting the index wrap
/// in 8-bit arithmetic would silently alias pixels to the wrong colors;
/// the overflow is an explicit error instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// A 257th distinct color was encountered.
    #[error("palette overflow: more than 256 distinct colors in source image")]
    Overflow,
}
