//! End-to-end conversion tests over real image files in temp directories.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;

use layer2_quant::{ColorKey, QuantizeError};
use nextl2::{convert_image, ConvertError, ConvertOptions, ModeSelect};

/// Write a PNG fixture and return its path.
fn save_png<F>(dir: &Path, name: &str, width: u32, height: u32, f: F) -> PathBuf
where
    F: Fn(u32, u32) -> [u8; 3],
{
    let path = dir.join(name);
    let img = image::RgbImage::from_fn(width, height, |x, y| image::Rgb(f(x, y)));
    img.save(&path).unwrap();
    path
}

#[test]
fn test_wide_conversion_chunked_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    // Black image with a single red pixel at (0, 1): in the Wide
    // X-outer traversal that pixel is the second byte of the stream.
    let input = save_png(dir.path(), "bridge.png", 320, 256, |x, y| {
        if x == 0 && y == 1 {
            [255, 0, 0]
        } else {
            [0, 0, 0]
        }
    });

    let options = ConvertOptions {
        chunk_size_kib: Some(16),
        output_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let report = convert_image(&input, &options).unwrap();

    assert_eq!(report.palette_len, 2);
    assert_eq!(report.dropped_tail, 0);
    assert_eq!(report.files.len(), 6);

    // Five 16 KiB banks covering the 80 KiB stream.
    for n in 1..=5 {
        let bank = fs::read(dir.path().join(format!("bridge{n}.bin"))).unwrap();
        assert_eq!(bank.len(), 16384, "bank {n}");
    }

    // Traversal: (0,0) is black (index 0), (0,1) is the red pixel
    // (index 1), immediately after it in the first bank.
    let bank1 = fs::read(dir.path().join("bridge1.bin")).unwrap();
    assert_eq!(bank1[0], 0);
    assert_eq!(bank1[1], 1);
    assert_eq!(bank1.iter().filter(|&&b| b == 1).count(), 1);

    // Palette: black then red, remaining slots zero, 512 bytes total.
    let pal = fs::read(dir.path().join("bridge.pal")).unwrap();
    assert_eq!(pal.len(), 512);
    assert_eq!(&pal[0..4], &[0x00, 0x00, 0xE0, 0x00]);
    assert!(pal[4..].iter().all(|&b| b == 0));
}

#[test]
fn test_tall_conversion_unchunked() {
    let dir = tempfile::tempdir().unwrap();
    let input = save_png(dir.path(), "watch.png", 256, 192, |x, _| {
        if x < 128 {
            [255, 255, 255]
        } else {
            [0, 0, 255]
        }
    });

    let options = ConvertOptions {
        output_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let report = convert_image(&input, &options).unwrap();
    assert_eq!(report.palette_len, 2);

    let stream = fs::read(dir.path().join("watch.bin")).unwrap();
    assert_eq!(stream.len(), 49152);
    assert!(stream.iter().all(|&b| b <= 1));
    // Row-major: the first half of every 256-byte row is white (index 0).
    assert_eq!(stream[0], 0);
    assert_eq!(stream[127], 0);
    assert_eq!(stream[128], 1);

    let pal = fs::read(dir.path().join("watch.pal")).unwrap();
    assert_eq!(pal.len(), 512);
    // White then blue.
    assert_eq!(&pal[0..4], &[0xFF, 0x01, 0x03, 0x01]);
}

#[test]
fn test_unsupported_dimensions_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = save_png(dir.path(), "odd.png", 100, 100, |_, _| [0, 0, 0]);

    let err = convert_image(&input, &ConvertOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::Quantize(QuantizeError::UnsupportedDimensions {
            width: 100,
            height: 100
        })
    ));
    // Nothing was written.
    assert!(!dir.path().join("odd.bin").exists());
    assert!(!dir.path().join("odd.pal").exists());
}

#[test]
fn test_forced_mode_mismatch_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = save_png(dir.path(), "watch.png", 256, 192, |_, _| [0, 0, 0]);

    let options = ConvertOptions {
        mode: ModeSelect::Wide,
        output_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let err = convert_image(&input, &options).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::Quantize(QuantizeError::UnsupportedDimensions { .. })
    ));
}

#[test]
fn test_conversion_is_deterministic_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    // 16 x 12 = 192 distinct colors, safely under the palette limit.
    let input = save_png(dir.path(), "grad.png", 256, 192, |x, y| {
        [(x / 16) as u8 * 16, (y / 16) as u8 * 20, 0]
    });

    let run = |sub: &str| {
        let out = dir.path().join(sub);
        fs::create_dir(&out).unwrap();
        let options = ConvertOptions {
            chunk_size_kib: Some(16),
            output_dir: out.clone(),
            ..Default::default()
        };
        convert_image(&input, &options).unwrap();
        (
            fs::read(out.join("grad1.bin")).unwrap(),
            fs::read(out.join("grad.pal")).unwrap(),
        )
    };

    let (bank_a, pal_a) = run("a");
    let (bank_b, pal_b) = run("b");
    assert_eq!(bank_a, bank_b);
    assert_eq!(pal_a, pal_b);
}

#[test]
fn test_palette_overflow_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    // 257 distinct colors along the first two rows.
    let input = save_png(dir.path(), "noisy.png", 256, 192, |x, y| {
        let i = y * 256 + x;
        if i < 257 {
            [(i % 256) as u8, (i / 256) as u8, 0]
        } else {
            [0, 0, 0]
        }
    });

    let options = ConvertOptions {
        output_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let err = convert_image(&input, &options).unwrap_err();
    assert!(matches!(err, ConvertError::Quantize(_)));
    assert!(!dir.path().join("noisy.bin").exists());
    assert!(!dir.path().join("noisy.pal").exists());
}

#[test]
fn test_packed_dedup_merges_collapsing_colors() {
    let dir = tempfile::tempdir().unwrap();
    // Two source colors that quantize to the same 9-bit black.
    let input = save_png(dir.path(), "noise.png", 256, 192, |x, _| {
        if x % 2 == 0 {
            [0, 0, 0]
        } else {
            [1, 1, 1]
        }
    });

    let faithful = ConvertOptions {
        output_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    assert_eq!(convert_image(&input, &faithful).unwrap().palette_len, 2);

    let merged = ConvertOptions {
        color_key: ColorKey::Packed,
        output_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    assert_eq!(convert_image(&input, &merged).unwrap().palette_len, 1);
}
