//! Subcommand implementations.
//!
//! Decoding, analysis, and encoding happen on the blocking pool through
//! [`run_blocking`]; reports go to stdout as JSON, everything else to the log.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use spriteforge_core::{
    AnalysisConfig, ColorKey, Hooks, PixelSample, Region, StripOrientation, UniqueColorList,
    colors_strip, extract_region, unique_colors, unique_sprite,
};
use spriteforge_io::{load_image, save_png, sibling_images, transparent_sprite_from_paths};

use crate::cli::Command;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::worker::run_blocking;

/// JSON written to stdout by `unique`.
#[derive(Debug, Serialize)]
pub struct UniqueReport {
    pub input: PathBuf,
    pub region: Region,
    pub count: usize,
    /// `#rrggbbaa`, in output order.
    pub colors: Vec<String>,
}

impl UniqueReport {
    fn new(input: &Path, region: Region, colors: &UniqueColorList) -> Self {
        Self {
            input: input.to_path_buf(),
            region,
            count: colors.len(),
            colors: colors.iter().map(ColorKey::to_string).collect(),
        }
    }
}

/// JSON written to stdout by `info`.
#[derive(Debug, Serialize)]
pub struct InfoReport {
    pub input: PathBuf,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample: Option<PixelSample>,
}

pub async fn run(command: Command, config: &AppConfig) -> Result<(), AppError> {
    let analysis = config.analysis;
    let quiet = config.quiet;

    match command {
        Command::Crop {
            input,
            region,
            output,
        } => crop(input, region, output).await,
        Command::Unique {
            input,
            region,
            strip,
            orientation,
            sorted,
        } => {
            let colors = run_blocking("unique", quiet, {
                let input = input.clone();
                move |hooks: &mut Hooks<'_>| -> Result<UniqueColorList, AppError> {
                    let image = load_image(&input)?;
                    let mut colors = unique_colors(&image, region, &analysis, hooks)?;
                    if sorted {
                        colors.sort_descending();
                    }
                    Ok(colors)
                }
            })
            .await??;

            tracing::info!(count = colors.len(), %region, "unique colors found");
            print_json(&UniqueReport::new(&input, region, &colors))?;

            if let Some(path) = strip {
                write_strip(colors, orientation.into(), path).await?;
            }
            Ok(())
        }
        Command::Highlight {
            input,
            region,
            output,
        } => {
            run_blocking("highlight", quiet, move |hooks: &mut Hooks<'_>| -> Result<(), AppError> {
                let image = load_image(&input)?;
                let sprite = unique_sprite(&image, region, &analysis, hooks)?;
                save_png(&sprite, &output)?;
                tracing::info!(output = %output.display(), %region, "unique sprite written");
                Ok(())
            })
            .await?
        }
        Command::Extract {
            input,
            region,
            output,
            with,
        } => extract(input, region, output, with, analysis, quiet).await,
        Command::Info { input, x, y } => {
            let report = tokio::task::spawn_blocking(move || -> Result<InfoReport, AppError> {
                let image = load_image(&input)?;
                let sample = x.zip(y).and_then(|(x, y)| image.sample_clamped(x, y));
                Ok(InfoReport {
                    input,
                    width: image.width(),
                    height: image.height(),
                    sample,
                })
            })
            .await??;
            print_json(&report)
        }
    }
}

async fn crop(input: PathBuf, region: Region, output: PathBuf) -> Result<(), AppError> {
    tokio::task::spawn_blocking(move || -> Result<(), AppError> {
        let image = load_image(&input)?;
        let cropped = extract_region(&image, region)?;
        save_png(&cropped, &output)?;
        tracing::info!(output = %output.display(), %region, "region written");
        Ok(())
    })
    .await?
}

async fn write_strip(
    colors: UniqueColorList,
    orientation: StripOrientation,
    path: PathBuf,
) -> Result<(), AppError> {
    if colors.is_empty() {
        tracing::warn!(path = %path.display(), "no unique colors; strip not written");
        return Ok(());
    }
    tokio::task::spawn_blocking(move || -> Result<(), AppError> {
        let strip = colors_strip(&colors, orientation);
        save_png(&strip, &path)?;
        tracing::info!(path = %path.display(), colors = colors.len(), "palette strip written");
        Ok(())
    })
    .await?
}

async fn extract(
    input: PathBuf,
    region: Region,
    output: PathBuf,
    with: Vec<PathBuf>,
    analysis: AnalysisConfig,
    quiet: bool,
) -> Result<(), AppError> {
    run_blocking("extract", quiet, move |hooks: &mut Hooks<'_>| -> Result<(), AppError> {
        let siblings = if with.is_empty() {
            sibling_images(&input)?
        } else {
            with
        };
        tracing::debug!(reference = %input.display(), siblings = siblings.len(), "extracting");

        let result = transparent_sprite_from_paths(&input, &siblings, region, &analysis, hooks)?;
        save_png(&result.image, &output)?;
        tracing::info!(
            output = %output.display(),
            compared = result.compared.len(),
            excluded = result.excluded.len(),
            "static sprite written"
        );
        Ok(())
    })
    .await?
}

fn print_json<T: Serialize>(report: &T) -> Result<(), AppError> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, report)?;
    writeln!(stdout)?;
    Ok(())
}
