//! Color types for Layer 2 conversion
//!
//! This module provides the two color representations the pipeline works
//! with: [`Rgb888`] source pixels and the [`PackedColor`] 9-bit hardware
//! encoding derived from them.

mod packed;
mod rgb;

pub use packed::PackedColor;
pub use rgb::Rgb888;
