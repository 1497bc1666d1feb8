use std::fmt;

use crate::image_pipeline::resize::CellLayout;
use crate::RenderError;

/// Row-major matrix of sampled glyphs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphGrid {
    pub columns: u32,
    pub rows: u32,
    pub cells: Vec<char>,
}

impl GlyphGrid {
    pub fn new(columns: u32, rows: u32, cells: Vec<char>) -> Self {
        assert_eq!(columns as usize * rows as usize, cells.len());
        Self { columns, rows, cells }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.cells.chunks(self.columns.max(1) as usize)
    }

    /// Assemble the grid into text, one newline-terminated line per row.
    pub fn to_text(&self, layout: CellLayout) -> Result<RenderedText, RenderError> {
        let glyph_bytes = self.cells.iter().map(|ch| ch.len_utf8()).max().unwrap_or(1);
        let capacity = text_capacity(self.columns, self.rows, glyph_bytes, layout)
            .ok_or(RenderError::AllocationFailed)?;

        let mut text = String::new();
        text.try_reserve_exact(capacity).map_err(|_| RenderError::AllocationFailed)?;

        for row in self.rows() {
            for &glyph in row {
                text.push(glyph);
                if layout == CellLayout::Spaced {
                    text.push(' ');
                }
            }
            text.push('\n');
        }

        Ok(RenderedText(text))
    }
}

/// Bytes needed for the assembled text, or `None` on overflow.
fn text_capacity(columns: u32, rows: u32, glyph_bytes: usize, layout: CellLayout) -> Option<usize> {
    let cell_bytes = match layout {
        CellLayout::Packed => glyph_bytes,
        CellLayout::Spaced => glyph_bytes.checked_add(1)?,
    };
    let row_bytes = (columns as usize).checked_mul(cell_bytes)?.checked_add(1)?;
    row_bytes.checked_mul(rows as usize)
}

/// Rendered text, freshly owned by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RenderedText(String);

impl RenderedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.lines()
    }
}

impl fmt::Display for RenderedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
