//! nextl2 - Layer 2 image converter
//!
//! Converts RGB raster images into ZX Spectrum Next Layer 2 pixel banks
//! and 9-bit palette files. The quantization core lives in the
//! `layer2-quant` crate; this library adds the thin collaborators around
//! it: image decoding, output file emission and per-image orchestration.
//! It is exposed as a library for integration testing.

pub mod convert;
pub mod error;
pub mod loader;
pub mod writer;

pub use convert::{convert_image, ConvertOptions, ConvertReport, ModeSelect};
pub use error::ConvertError;
