//! Error types for quantization

use crate::palette::PaletteError;
use thiserror::Error;

/// Error type for the quantizer.
///
/// Both variants abort the conversion of the current image; there is
/// nothing to retry or recover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantizeError {
    /// Raster dimensions do not match the requested screen mode.
    #[error("unsupported dimensions: {width}x{height} (expected 320x256, 256x192 or 256x256)")]
    UnsupportedDimensions {
        /// Raster width in pixels
        width: u32,
        /// Raster height in pixels
        height: u32,
    },

    /// The source image has more distinct colors than the palette can hold.
    #[error(transparent)]
    Palette(#[from] PaletteError),
}
