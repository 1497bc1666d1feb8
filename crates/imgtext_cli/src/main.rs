mod output;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use imgtext_render::{DecodedImage, RampKind, RenderConfig, RenderError, Sizing, TextRenderer};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use walkdir::WalkDir;

const DEFAULT_WIDTH: u32 = 120;

#[derive(Parser, Debug)]
#[command(name = "imgtext", author, version, about = "ASCII image generator")]
struct Cli {
    /// Input image path, or a directory of images
    #[arg(short = 'p', long = "path")]
    path: PathBuf,
    /// Output text file, or output directory for a directory input.
    /// Relative paths are resolved against the input's directory
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Output width in characters
    #[arg(short = 's', long = "size", default_value_t = DEFAULT_WIDTH, conflicts_with = "scale")]
    size: u32,
    /// Downscale factor (1.0 keeps every pixel); each cell is two characters wide
    #[arg(long)]
    scale: Option<f32>,
    #[command(flatten)]
    settings: RenderSettings,
}

#[derive(Parser, Debug, Clone)]
struct RenderSettings {
    /// Glyph ramp used to map brightness to characters: low, simple or high
    #[arg(long, default_value = "simple")]
    ramp: RampKind,
    /// Map bright pixels to dark glyphs
    #[arg(long, default_value_t = false)]
    invert: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.to_config();
    if cli.path.is_dir() {
        let output = cli.output.as_deref().context("a directory input requires -o <output>")?;
        convert_directory(&cli.path, output, &config)
    } else {
        convert_file(&cli.path, cli.output.as_deref(), &config)
    }
}

fn convert_file(path: &Path, output: Option<&Path>, config: &RenderConfig) -> Result<()> {
    let image =
        DecodedImage::open(path).with_context(|| format!("failed to load image {:?}", path))?;
    info!(
        "Loaded image: {} ({}x{}, {} channels)",
        path.display(),
        image.width(),
        image.height(),
        image.channels()
    );

    let text = TextRenderer
        .render(&image.pixels()?, config)
        .with_context(|| format!("failed to convert {:?} to ASCII", path))?;

    match output {
        Some(output) => {
            let full_output = output::resolve_output_path(path, output);
            output::write_text(&full_output, text.as_str())?;
            info!("Saved ASCII art to: {}", full_output.display());
        },
        None => print!("\n{}\n", text),
    }

    Ok(())
}

fn convert_directory(input_dir: &Path, output: &Path, config: &RenderConfig) -> Result<()> {
    let out_dir = output::resolve_output_dir(input_dir, output);
    let mut entries: Vec<PathBuf> = WalkDir::new(input_dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| !path.starts_with(&out_dir))
        .collect();
    entries.sort();
    if entries.is_empty() {
        bail!("no files found in {:?}", input_dir);
    }

    let progress = ProgressBar::new(entries.len() as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "{spinner} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} images",
        )?
        .progress_chars("=> "),
    );

    let mut converted = 0usize;
    for entry in &entries {
        let image = match DecodedImage::open(entry) {
            Ok(image) => image,
            Err(RenderError::Image(err)) => {
                progress.suspend(|| warn!("skipping {}: {err}", entry.display()));
                progress.inc(1);
                continue;
            },
            Err(err) => return Err(err).with_context(|| format!("failed to load {:?}", entry)),
        };

        let text = TextRenderer
            .render(&image.pixels()?, config)
            .with_context(|| format!("failed to convert {:?} to ASCII", entry))?;
        let text_path = output::frame_text_path(input_dir, &out_dir, entry);
        output::write_text(&text_path, text.as_str())?;
        converted += 1;
        progress.inc(1);
    }

    progress.finish_with_message(format!("{} images written to {:?}", converted, out_dir));
    if converted == 0 {
        bail!("no decodable images found in {:?}", input_dir);
    }
    info!("Saved {} of {} files as ASCII art to: {}", converted, entries.len(), out_dir.display());
    Ok(())
}

impl Cli {
    fn to_config(&self) -> RenderConfig {
        let sizing = match self.scale {
            Some(scale) => Sizing::ScaleFactor(scale),
            None => Sizing::TargetWidth(self.size.max(1)),
        };
        RenderConfig { sizing, ramp: self.settings.ramp, invert: self.settings.invert }
    }
}
