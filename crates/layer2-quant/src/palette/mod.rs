//! Palette types and serialization
//!
//! This module provides the insertion-ordered Layer 2 palette and its
//! fixed 512-byte file serialization, plus the error type for palette
//! capacity violations.

mod error;
#[allow(clippy::module_inception)]
mod palette;

pub use error::PaletteError;
pub use palette::{Palette, FILE_LEN, MAX_ENTRIES};
