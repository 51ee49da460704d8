//! Image decoding into an RGB888 raster.
//!
//! The converter treats image decoding as a capability: give it a path,
//! get back a width x height grid of RGB888 pixels. The `image` crate
//! handles the container formats; everything after decode is
//! format-agnostic.

use std::path::Path;

use layer2_quant::RgbRaster;

use crate::error::ConvertError;

/// Decode an image file into an [`RgbRaster`].
///
/// Any format the `image` crate recognises is accepted. For animated
/// containers (GIF, APNG) only the first frame is decoded; remaining
/// frames are ignored.
///
/// # Errors
///
/// Returns [`ConvertError::Decode`] with the failing path if the file
/// cannot be read or decoded.
pub fn load_raster(path: &Path) -> Result<RgbRaster, ConvertError> {
    let decoded = image::open(path).map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    // Alpha is not representable in Layer 2; flatten to RGB888.
    let rgb = decoded.to_rgb8();
    Ok(RgbRaster::from_raw_rgb(rgb.width(), rgb.height(), rgb.as_raw()))
}
