//! Per-image conversion orchestration.
//!
//! One call of [`convert_image()`] runs the whole pipeline for one input:
//! decode to an RGB888 raster, quantize into palette + index stream, and
//! write the output files. Conversions share no state, so a failure in
//! one input never affects another.

use std::path::{Path, PathBuf};

use layer2_quant::{quantize, ColorKey, QuantizeError, ScreenMode};
use tracing::{debug, info};

use crate::error::ConvertError;
use crate::loader;
use crate::writer;

/// Screen mode selection for a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeSelect {
    /// Detect the mode from the raster dimensions.
    #[default]
    Auto,
    /// Force 320x256; other dimensions are rejected.
    Wide,
    /// Force 256x192 / 256x256; other dimensions are rejected.
    Tall,
}

/// Per-image invocation parameters.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Screen mode selection (default: auto-detect).
    pub mode: ModeSelect,
    /// Palette dedup key (default: exact source color).
    pub color_key: ColorKey,
    /// Bank size in KiB; `None` or `Some(0)` emits one unchunked file.
    pub chunk_size_kib: Option<u32>,
    /// Directory the output files are written into.
    pub output_dir: PathBuf,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            mode: ModeSelect::Auto,
            color_key: ColorKey::default(),
            chunk_size_kib: None,
            output_dir: PathBuf::from("."),
        }
    }
}

/// What one successful conversion produced.
#[derive(Debug)]
pub struct ConvertReport {
    /// Every file written, banks first, palette last.
    pub files: Vec<PathBuf>,
    /// The screen mode that was used.
    pub mode: ScreenMode,
    /// Number of populated palette entries.
    pub palette_len: usize,
    /// Trailing stream bytes dropped by the bank split.
    pub dropped_tail: usize,
}

/// Convert one image file into Layer 2 bank and palette files.
///
/// Output files are named after the input's file stem: `<stem><n>.bin`
/// (chunked) or `<stem>.bin` (unchunked), plus `<stem>.pal`.
///
/// # Errors
///
/// - [`ConvertError::Decode`] if the input cannot be read or decoded.
/// - [`ConvertError::Quantize`] for unsupported dimensions or palette
///   overflow.
/// - [`ConvertError::Io`] if an output write fails; partially written
///   files are removed first.
pub fn convert_image(input: &Path, options: &ConvertOptions) -> Result<ConvertReport, ConvertError> {
    let raster = loader::load_raster(input)?;
    debug!(
        input = %input.display(),
        width = raster.width(),
        height = raster.height(),
        "decoded raster"
    );

    let mode = match options.mode {
        ModeSelect::Wide => ScreenMode::Wide,
        ModeSelect::Tall => ScreenMode::Tall,
        ModeSelect::Auto => ScreenMode::for_dimensions(raster.width(), raster.height()).ok_or(
            QuantizeError::UnsupportedDimensions {
                width: raster.width(),
                height: raster.height(),
            },
        )?,
    };

    let image = quantize(&raster, mode, options.color_key)?;

    let basename = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    let report = writer::write_outputs(&image, &options.output_dir, &basename, options.chunk_size_kib)?;

    info!(
        input = %input.display(),
        mode = ?mode,
        palette_entries = image.palette().len(),
        files = report.files.len(),
        "converted"
    );

    Ok(ConvertReport {
        files: report.files,
        mode,
        palette_len: image.palette().len(),
        dropped_tail: report.dropped_tail,
    })
}
