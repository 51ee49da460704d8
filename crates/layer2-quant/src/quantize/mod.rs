//! Quantization: raster in, palette + pixel-index stream out.
//!
//! This module provides the [`quantize()`] entry point together with the
//! screen-mode and traversal-order strategy types and the quantizer error
//! type.

mod error;
mod mode;
mod quantizer;
mod traversal;

pub use error::QuantizeError;
pub use mode::ScreenMode;
pub use quantizer::{quantize, ColorKey};
pub use traversal::Traversal;
