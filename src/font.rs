//! Text measurement and drawing.
//!
//! Two fonts are available: a fixed 5x7 bitmap font compiled into the binary,
//! which is the default and does not scale, and any TrueType/OpenType file
//! loaded through `rusttype`, which renders at the requested pixel size.

use image::{Rgba, RgbaImage};
use rusttype::{point, Font, PositionedGlyph, Rect, Scale};
use std::{
    fmt,
    path::{Path, PathBuf},
};
use thiserror::Error;

const CELL_WIDTH: u32 = 5;
const CELL_HEIGHT: u32 = 7;
const CELL_SPACING: u32 = 1;

#[derive(Debug, Error)]
pub enum TextError {
    #[error("no glyph for {0:?}")]
    MissingGlyph(char),

    #[error("font {} is unavailable: {reason}", .path.display())]
    FontUnavailable { path: PathBuf, reason: String },
}

/// Size of the ink box of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBox {
    pub width: u32,
    pub height: u32,
}

#[derive(Default)]
pub enum TextFont {
    #[default]
    Builtin,
    Scalable(Font<'static>),
    /// A font file that could not be loaded. Every measure or draw fails.
    Unavailable { path: PathBuf, reason: String },
}

impl fmt::Debug for TextFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextFont::Builtin => f.write_str("Builtin"),
            TextFont::Scalable(_) => f.write_str("Scalable"),
            TextFont::Unavailable { path, .. } => f.debug_tuple("Unavailable").field(path).finish(),
        }
    }
}

impl TextFont {
    /// Load a scalable font from disk. Failures are kept in the returned
    /// value and surface when text is measured.
    pub fn load(path: &Path) -> Self {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(err) => {
                return TextFont::Unavailable {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                }
            }
        };

        match Font::try_from_vec(data) {
            Some(font) => {
                log::debug!("Loaded font {}", path.display());
                TextFont::Scalable(font)
            }
            None => TextFont::Unavailable {
                path: path.to_path_buf(),
                reason: "not a TrueType or OpenType font".to_string(),
            },
        }
    }

    /// Ink box of `text` at `px` pixels. The built-in font ignores `px`.
    pub fn measure(&self, text: &str, px: f32) -> Result<TextBox, TextError> {
        match self {
            TextFont::Builtin => {
                for ch in text.chars() {
                    bitmap_glyph(ch)?;
                }
                Ok(bitmap_box(text.chars().count() as u32))
            }
            TextFont::Scalable(font) => {
                let glyphs = layout(font, text, px)?;
                Ok(ink_bounds(&glyphs)
                    .map(|r| TextBox {
                        width: r.width() as u32,
                        height: r.height() as u32,
                    })
                    .unwrap_or_default())
            }
            TextFont::Unavailable { path, reason } => Err(TextError::FontUnavailable {
                path: path.clone(),
                reason: reason.clone(),
            }),
        }
    }

    /// Draw `text` so that its ink box's top-left corner lands on `(x, y)`.
    /// Pixels outside the canvas are clipped.
    pub fn draw(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        px: f32,
        (x, y): (i64, i64),
        color: Rgba<u8>,
    ) -> Result<(), TextError> {
        match self {
            TextFont::Builtin => {
                let rows = text
                    .chars()
                    .map(bitmap_glyph)
                    .collect::<Result<Vec<_>, _>>()?;

                for (i, glyph) in rows.iter().enumerate() {
                    let cell_x = x + (i as u32 * (CELL_WIDTH + CELL_SPACING)) as i64;
                    for (row, &bits) in glyph.iter().enumerate() {
                        for col in 0..CELL_WIDTH {
                            if (bits >> (CELL_WIDTH - 1 - col)) & 1 == 1 {
                                let (px, py) = (cell_x + col as i64, y + row as i64);
                                blend_pixel(canvas, px, py, color, 1.0);
                            }
                        }
                    }
                }
                Ok(())
            }
            TextFont::Scalable(font) => {
                let glyphs = layout(font, text, px)?;
                let Some(bounds) = ink_bounds(&glyphs) else {
                    return Ok(());
                };
                let dx = x - bounds.min.x as i64;
                let dy = y - bounds.min.y as i64;

                for glyph in &glyphs {
                    if let Some(bb) = glyph.pixel_bounding_box() {
                        glyph.draw(|gx, gy, coverage| {
                            blend_pixel(
                                canvas,
                                dx + bb.min.x as i64 + gx as i64,
                                dy + bb.min.y as i64 + gy as i64,
                                color,
                                coverage,
                            );
                        });
                    }
                }
                Ok(())
            }
            TextFont::Unavailable { path, reason } => Err(TextError::FontUnavailable {
                path: path.clone(),
                reason: reason.clone(),
            }),
        }
    }
}

fn bitmap_box(chars: u32) -> TextBox {
    if chars == 0 {
        return TextBox::default();
    }
    TextBox {
        width: chars * (CELL_WIDTH + CELL_SPACING) - CELL_SPACING,
        height: CELL_HEIGHT,
    }
}

fn layout(
    font: &Font<'static>,
    text: &str,
    px: f32,
) -> Result<Vec<PositionedGlyph<'static>>, TextError> {
    if let Some(ch) = text
        .chars()
        .find(|&ch| !ch.is_whitespace() && font.glyph(ch).id().0 == 0)
    {
        return Err(TextError::MissingGlyph(ch));
    }

    let scale = Scale::uniform(px);
    let ascent = font.v_metrics(scale).ascent;
    Ok(font.layout(text, scale, point(0.0, ascent)).collect())
}

fn ink_bounds(glyphs: &[PositionedGlyph<'_>]) -> Option<Rect<i32>> {
    glyphs
        .iter()
        .filter_map(|g| g.pixel_bounding_box())
        .reduce(|a, b| Rect {
            min: point(a.min.x.min(b.min.x), a.min.y.min(b.min.y)),
            max: point(a.max.x.max(b.max.x), a.max.y.max(b.max.y)),
        })
}

/// Source-over blend of `color` at `coverage` onto one canvas pixel.
pub(crate) fn blend_pixel(
    canvas: &mut RgbaImage,
    x: i64,
    y: i64,
    color: Rgba<u8>,
    coverage: f32,
) {
    if x < 0 || y < 0 || x >= canvas.width() as i64 || y >= canvas.height() as i64 {
        return;
    }
    let coverage = coverage.clamp(0.0, 1.0);
    if coverage == 0.0 {
        return;
    }

    let dst = canvas.get_pixel_mut(x as u32, y as u32);
    for c in 0..4 {
        let mixed = color[c] as f32 * coverage + dst[c] as f32 * (1.0 - coverage);
        dst[c] = mixed.round() as u8;
    }
}

/// Rows of a 5x7 glyph, top to bottom, most significant bit on the left.
fn bitmap_glyph(ch: char) -> Result<[u8; 7], TextError> {
    let rows = match ch {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        ' ' => [0x00; 7],
        _ => return Err(TextError::MissingGlyph(ch)),
    };
    Ok(rows)
}
