use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use thiserror::Error;

use tilekey::error::ClassifyError;
use tilekey::{classify, TileSheet};

/// Blob auto-tile key generator — scan a tile sheet and write its key table
#[derive(Parser)]
#[command(name = "tilekey", version)]
struct Args {
    /// Tile sheet image, 16x16 tiles in a single row
    #[arg(default_value = "Assets/tiles.png")]
    sheet: PathBuf,

    /// Output JSON file (overwritten)
    #[arg(default_value = "tiles.json")]
    output: PathBuf,

    /// Diagnostic log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Input problems that stop the run before anything is written.
#[derive(Debug, Error)]
enum PreconditionError {
    #[error("tiles image not found at {}", .0.display())]
    MissingInput(PathBuf),

    #[error("image height {height} smaller than tile size {tile}")]
    UndersizedImage { height: u32, tile: u32 },
}

/// Exit status for a [`PreconditionError`].
const PRECONDITION_EXIT: u8 = 2;

fn load_sheet(path: &Path) -> Result<TileSheet> {
    if !path.exists() {
        return Err(PreconditionError::MissingInput(path.to_path_buf()).into());
    }

    let img = image::open(path)
        .with_context(|| format!("failed to decode image: {}", path.display()))?
        .into_rgba8();

    let width = img.width();
    let height = img.height();
    Ok(TileSheet::from_buf(width, height, img.into_raw()))
}

fn run(args: &Args) -> Result<()> {
    let sheet = load_sheet(&args.sheet)?;
    log::info!(
        "scanning {} ({}x{}, {} tiles)",
        args.sheet.display(),
        sheet.width,
        sheet.height,
        sheet.columns()
    );

    let result = classify(&sheet).map_err(|e| match e {
        ClassifyError::UndersizedSheet { height, tile } => {
            PreconditionError::UndersizedImage { height, tile }
        }
    })?;

    for dup in &result.duplicates {
        println!(
            "warning: duplicate key {} for tile {} (existing {})",
            dup.key, dup.tile, dup.existing
        );
    }

    let json = result.table.to_json()?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!(
        "Wrote {} entries to {}",
        result.table.len(),
        args.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(pre) = err.downcast_ref::<PreconditionError>() {
                eprintln!("{pre}");
                ExitCode::from(PRECONDITION_EXIT)
            } else {
                eprintln!("error: {err:#}");
                ExitCode::FAILURE
            }
        }
    }
}
