mod ascii;
mod image_pipeline;

use std::path::Path;

use log::debug;

pub use ascii::{
    grid::{GlyphGrid, RenderedText},
    mapping::GlyphMapper,
    ramp::{Ramp, RampKind},
};
pub use image_pipeline::{
    adjust::luminance,
    loader::DecodedImage,
    pixels::PixelBuffer,
    resize::{CellLayout, Sizing, TargetGeometry, ASPECT_CORRECTION},
};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    #[error("failed to allocate the output buffer")]
    AllocationFailed,
    #[error("failed to load image: {0}")]
    Image(#[from] image::ImageError),
}

/// Reason a render request was rejected before any output was produced.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("image width must be at least 1")]
    ZeroWidth,
    #[error("image height must be at least 1")]
    ZeroHeight,
    #[error("unsupported channel count {0}, expected 1 to 4")]
    UnsupportedChannels(u8),
    #[error("pixel buffer holds {actual} bytes, expected {}", expected_len(.expected))]
    BufferLength { expected: Option<usize>, actual: usize },
    #[error("target grid is smaller than 1x1")]
    DegenerateTarget,
    #[error("ramp needs at least 2 glyphs, got {0}")]
    RampTooShort(usize),
    #[error("unknown ramp {0:?}")]
    UnknownRamp(String),
}

fn expected_len(expected: &Option<usize>) -> String {
    match expected {
        Some(len) => len.to_string(),
        None => String::from("more than addressable memory"),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderConfig {
    pub sizing: Sizing,
    pub ramp: RampKind,
    pub invert: bool,
}

#[derive(Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn render_path<P: AsRef<Path>>(
        &self,
        path: P,
        config: &RenderConfig,
    ) -> Result<RenderedText, RenderError> {
        let image = DecodedImage::open(path)?;
        self.render(&image.pixels()?, config)
    }

    pub fn render(
        &self,
        pixels: &PixelBuffer<'_>,
        config: &RenderConfig,
    ) -> Result<RenderedText, RenderError> {
        self.render_with_ramp(pixels, config.sizing, config.ramp.ramp(), config.invert)
    }

    /// Render with a caller-supplied ramp instead of a built-in one.
    pub fn render_with_ramp(
        &self,
        pixels: &PixelBuffer<'_>,
        sizing: Sizing,
        ramp: Ramp,
        invert: bool,
    ) -> Result<RenderedText, RenderError> {
        let (grid, geometry) = self.sample(pixels, sizing, ramp, invert)?;
        grid.to_text(geometry.layout)
    }

    /// Sample the glyph matrix without assembling it into text.
    pub fn render_grid(
        &self,
        pixels: &PixelBuffer<'_>,
        config: &RenderConfig,
    ) -> Result<(GlyphGrid, TargetGeometry), RenderError> {
        self.sample(pixels, config.sizing, config.ramp.ramp(), config.invert)
    }

    fn sample(
        &self,
        pixels: &PixelBuffer<'_>,
        sizing: Sizing,
        ramp: Ramp,
        invert: bool,
    ) -> Result<(GlyphGrid, TargetGeometry), RenderError> {
        let geometry = sizing.derive(pixels.width(), pixels.height())?;
        debug!(
            "sampling {}x{} source onto {}x{} {:?} grid",
            pixels.width(),
            pixels.height(),
            geometry.columns,
            geometry.rows,
            geometry.layout
        );

        let mapper = GlyphMapper::new(ramp, invert);
        let mut cells = Vec::new();
        cells.try_reserve_exact(geometry.cell_count()).map_err(|_| RenderError::AllocationFailed)?;

        for y in 0..geometry.rows {
            let source_y = geometry.source_y(y);
            for x in 0..geometry.columns {
                let rgb = pixels.rgb_at(geometry.source_x(x), source_y);
                cells.push(mapper.glyph_for(luminance(rgb)));
            }
        }

        Ok((GlyphGrid::new(geometry.columns, geometry.rows, cells), geometry))
    }
}
