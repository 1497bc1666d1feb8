use crate::{InvalidInput, RenderError};

/// Glyph cells are roughly twice as tall as they are wide.
pub const ASPECT_CORRECTION: f64 = 2.0;

/// How the target character grid is derived from the source dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sizing {
    /// Fixed output width in characters, rows corrected for glyph aspect.
    TargetWidth(u32),
    /// Downscale factor, clamped to at least 1.0; cells are padded with a space.
    ScaleFactor(f32),
}

impl Default for Sizing {
    fn default() -> Self {
        Sizing::TargetWidth(120)
    }
}

/// How each output cell is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellLayout {
    /// One glyph per cell.
    Packed,
    /// One glyph followed by a space per cell.
    Spaced,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Sampling {
    Proportional,
    Scaled(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetGeometry {
    pub columns: u32,
    pub rows: u32,
    pub layout: CellLayout,
    source_width: u32,
    source_height: u32,
    sampling: Sampling,
}

impl Sizing {
    pub fn derive(
        &self,
        source_width: u32,
        source_height: u32,
    ) -> Result<TargetGeometry, RenderError> {
        if source_width == 0 {
            return Err(InvalidInput::ZeroWidth.into());
        }
        if source_height == 0 {
            return Err(InvalidInput::ZeroHeight.into());
        }

        let (columns, rows, layout, sampling) = match *self {
            Sizing::TargetWidth(0) => return Err(InvalidInput::DegenerateTarget.into()),
            Sizing::TargetWidth(columns) => {
                let ratio = columns as f64 / source_width as f64;
                let rows = (source_height as f64 * ratio / ASPECT_CORRECTION).round();
                (columns, clamp_extent(rows), CellLayout::Packed, Sampling::Proportional)
            },
            Sizing::ScaleFactor(scale) => {
                if !scale.is_finite() {
                    return Err(InvalidInput::DegenerateTarget.into());
                }
                let scale = f64::from(scale.max(1.0));
                let columns = clamp_extent((source_width as f64 / scale).floor());
                let rows = clamp_extent((source_height as f64 / scale).floor());
                (columns, rows, CellLayout::Spaced, Sampling::Scaled(scale))
            },
        };

        Ok(TargetGeometry { columns, rows, layout, source_width, source_height, sampling })
    }
}

impl TargetGeometry {
    /// Source column sampled for output column `x`.
    pub fn source_x(&self, x: u32) -> u32 {
        self.map(x, self.columns, self.source_width)
    }

    /// Source row sampled for output row `y`.
    pub fn source_y(&self, y: u32) -> u32 {
        self.map(y, self.rows, self.source_height)
    }

    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    fn map(&self, target: u32, target_extent: u32, source_extent: u32) -> u32 {
        match self.sampling {
            Sampling::Proportional => {
                (u64::from(target) * u64::from(source_extent) / u64::from(target_extent)) as u32
            },
            Sampling::Scaled(scale) => {
                let source = (f64::from(target) * scale).floor() as u32;
                source.min(source_extent - 1)
            },
        }
    }
}

fn clamp_extent(value: f64) -> u32 {
    // Saturating float cast; also maps NaN to zero.
    (value as u32).max(1)
}
