use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use layer2_quant::ColorKey;
use nextl2::{convert_image, ConvertOptions, ModeSelect};

#[derive(Parser)]
#[command(name = "nextl2")]
#[command(about = "Convert RGB images to ZX Spectrum Next Layer 2 banks and 9-bit palettes")]
#[command(version)]
struct Cli {
    /// Input image files (PNG, GIF, BMP, JPEG, ...)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory the .bin and .pal files are written into
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Split the pixel data into banks of this many KiB (e.g. 16);
    /// omit or pass 0 for a single .bin file
    #[arg(short, long)]
    chunk_size: Option<u32>,

    /// Screen mode; auto detects from the image dimensions
    #[arg(short, long, value_enum, default_value_t = ModeArg::Auto)]
    mode: ModeArg,

    /// Deduplicate palette entries on the packed 9-bit value instead of
    /// the exact source color (changes palette index assignment)
    #[arg(long)]
    dedup_packed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Detect from image dimensions
    Auto,
    /// 320x256
    Wide,
    /// 256x192 or 256x256
    Tall,
}

impl From<ModeArg> for ModeSelect {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Auto => ModeSelect::Auto,
            ModeArg::Wide => ModeSelect::Wide,
            ModeArg::Tall => ModeSelect::Tall,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nextl2=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let options = ConvertOptions {
        mode: cli.mode.into(),
        color_key: if cli.dedup_packed {
            ColorKey::Packed
        } else {
            ColorKey::SourceRgb
        },
        chunk_size_kib: cli.chunk_size,
        output_dir: cli.output_dir,
    };

    // Each input converts independently; one failure never aborts the rest.
    let mut failures = 0usize;
    for input in &cli.inputs {
        match convert_image(input, &options) {
            Ok(report) => {
                println!(
                    "{}: {} file(s), {} palette entries",
                    input.display(),
                    report.files.len(),
                    report.palette_len
                );
            }
            Err(e) => {
                tracing::error!(input = %input.display(), error = %e, "conversion failed");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} conversion(s) failed", cli.inputs.len());
    }
    Ok(())
}
