//! Output file emission.
//!
//! Writes the bank files and the palette file for one converted image:
//!
//! - chunked: `<basename><n>.bin` for n = 1..=bankCount, each exactly one
//!   chunk long
//! - unchunked: `<basename>.bin` holding the whole pixel-index stream
//! - always: `<basename>.pal`, exactly 512 bytes
//!
//! On any write failure the files already written for this conversion are
//! removed before the error is surfaced, so a failed run never leaves a
//! partial set behind.

use std::fs;
use std::path::{Path, PathBuf};

use layer2_quant::IndexedImage;
use tracing::warn;

use crate::error::ConvertError;

/// The files produced for one image, plus the bytes a chunked split
/// discarded (zero for the supported modes with 8 or 16 KiB banks).
#[derive(Debug)]
pub struct WriteReport {
    /// Every file written, in emission order (banks first, palette last).
    pub files: Vec<PathBuf>,
    /// Trailing stream bytes dropped because they fell short of one bank.
    pub dropped_tail: usize,
}

/// Write the bank file(s) and palette file for a quantized image.
///
/// `chunk_size_kib` of `None` or `Some(0)` emits the whole stream as a
/// single `<basename>.bin`; any positive value splits it into that many
/// KiB per bank.
///
/// # Errors
///
/// Returns [`ConvertError::Io`] with the failing path on the first write
/// that fails. Files written before the failure are removed.
pub fn write_outputs(
    image: &IndexedImage,
    out_dir: &Path,
    basename: &str,
    chunk_size_kib: Option<u32>,
) -> Result<WriteReport, ConvertError> {
    let mut written = Vec::new();
    match write_all(image, out_dir, basename, chunk_size_kib, &mut written) {
        Ok(dropped_tail) => Ok(WriteReport {
            files: written,
            dropped_tail,
        }),
        Err(err) => {
            for path in &written {
                // Cleanup failures are not actionable on top of the
                // original error.
                let _ = fs::remove_file(path);
            }
            Err(err)
        }
    }
}

fn write_all(
    image: &IndexedImage,
    out_dir: &Path,
    basename: &str,
    chunk_size_kib: Option<u32>,
    written: &mut Vec<PathBuf>,
) -> Result<usize, ConvertError> {
    let mut dropped_tail = 0;

    match chunk_size_kib {
        Some(kib) if kib > 0 => {
            let split = image.split_banks(kib);
            dropped_tail = split.dropped;
            if dropped_tail > 0 {
                warn!(
                    dropped = dropped_tail,
                    chunk_size_kib = kib,
                    "pixel stream does not divide into whole banks; trailing bytes dropped"
                );
            }
            for (i, bank) in split.banks.iter().enumerate() {
                let path = out_dir.join(format!("{basename}{}.bin", i + 1));
                write_file(&path, bank, written)?;
            }
        }
        _ => {
            let path = out_dir.join(format!("{basename}.bin"));
            write_file(&path, image.indices(), written)?;
        }
    }

    let path = out_dir.join(format!("{basename}.pal"));
    write_file(&path, &image.palette_file_bytes(), written)?;

    Ok(dropped_tail)
}

fn write_file(path: &Path, bytes: &[u8], written: &mut Vec<PathBuf>) -> Result<(), ConvertError> {
    fs::write(path, bytes).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    written.push(path.to_path_buf());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use layer2_quant::{quantize, ColorKey, Rgb888, RgbRaster, ScreenMode};

    fn wide_image() -> IndexedImage {
        let raster = RgbRaster::from_fn(320, 256, |x, _| {
            if x < 160 {
                Rgb888::new(0, 0, 0)
            } else {
                Rgb888::new(255, 255, 255)
            }
        });
        quantize(&raster, ScreenMode::Wide, ColorKey::default()).unwrap()
    }

    #[test]
    fn test_chunked_output_names_and_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let report = write_outputs(&wide_image(), dir.path(), "bridge", Some(16)).unwrap();

        assert_eq!(report.dropped_tail, 0);
        assert_eq!(report.files.len(), 6); // 5 banks + palette

        for n in 1..=5 {
            let path = dir.path().join(format!("bridge{n}.bin"));
            assert_eq!(fs::metadata(&path).unwrap().len(), 16384, "{path:?}");
        }
        let pal = dir.path().join("bridge.pal");
        assert_eq!(fs::metadata(&pal).unwrap().len(), 512);
        assert!(!dir.path().join("bridge.bin").exists());
    }

    #[test]
    fn test_unchunked_output_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let report = write_outputs(&wide_image(), dir.path(), "bridge", None).unwrap();

        assert_eq!(report.files.len(), 2);
        let bin = dir.path().join("bridge.bin");
        assert_eq!(fs::metadata(&bin).unwrap().len(), 81920);
        assert!(!dir.path().join("bridge1.bin").exists());
    }

    #[test]
    fn test_zero_chunk_size_means_unchunked() {
        let dir = tempfile::tempdir().unwrap();
        write_outputs(&wide_image(), dir.path(), "bridge", Some(0)).unwrap();
        assert!(dir.path().join("bridge.bin").exists());
    }

    #[test]
    fn test_banks_concatenate_to_stream() {
        let dir = tempfile::tempdir().unwrap();
        let image = wide_image();
        write_outputs(&image, dir.path(), "bridge", Some(16)).unwrap();

        let mut combined = Vec::new();
        for n in 1..=5 {
            combined.extend(fs::read(dir.path().join(format!("bridge{n}.bin"))).unwrap());
        }
        assert_eq!(combined, image.indices());
    }

    #[test]
    fn test_failed_write_removes_partial_outputs() {
        let dir = tempfile::tempdir().unwrap();
        // Occupy the palette path with a directory so the final write
        // fails after all five banks succeeded.
        fs::create_dir(dir.path().join("bridge.pal")).unwrap();

        let err = write_outputs(&wide_image(), dir.path(), "bridge", Some(16)).unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));

        for n in 1..=5 {
            assert!(
                !dir.path().join(format!("bridge{n}.bin")).exists(),
                "bank {n} should have been cleaned up"
            );
        }
    }
}
