use std::path::PathBuf;

use layer2_quant::QuantizeError;
use thiserror::Error;

/// Error type for a single image conversion.
///
/// Any variant aborts the conversion of that image only; other inputs of
/// the same run are unaffected. Write failures carry the failing path and
/// are not retried.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Quantize(#[from] QuantizeError),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use layer2_quant::PaletteError;

    #[test]
    fn test_io_error_names_failing_path() {
        let error = ConvertError::Io {
            path: PathBuf::from("/out/bridge1.bin"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            error.to_string(),
            "failed to write /out/bridge1.bin: denied"
        );
    }

    #[test]
    fn test_quantize_error_passes_through() {
        let error = ConvertError::from(QuantizeError::UnsupportedDimensions {
            width: 640,
            height: 480,
        });
        assert_eq!(
            error.to_string(),
            "unsupported dimensions: 640x480 (expected 320x256, 256x192 or 256x256)"
        );
    }

    #[test]
    fn test_overflow_error_passes_through() {
        let error = ConvertError::from(QuantizeError::Palette(PaletteError::Overflow));
        assert_eq!(
            error.to_string(),
            "palette overflow: more than 256 distinct colors in source image"
        );
    }
}
