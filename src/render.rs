use crate::{
    font::{TextError, TextFont},
    geometry::{Geometry, RoundedRect},
    palette::Palette,
};
use image::{Rgba, RgbaImage};

pub const DEFAULT_GLYPH: &str = "C";
pub const DEFAULT_LABEL: &str = "CHOCO";

/// Everything about an icon that does not depend on its size.
#[derive(Debug)]
pub struct IconStyle {
    pub palette: Palette,
    pub glyph: String,
    pub label: String,
    pub font: TextFont,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            glyph: DEFAULT_GLYPH.to_string(),
            label: DEFAULT_LABEL.to_string(),
            font: TextFont::Builtin,
        }
    }
}

/// Render the default icon at `size`.
pub fn render(size: u32) -> RgbaImage {
    render_with(size, &IconStyle::default())
}

/// Render one icon: a transparent canvas, the two rounded rectangles, and the
/// text overlays the size allows. Text is best effort; a failure is logged and
/// the icon keeps whatever was drawn before it.
pub fn render_with(size: u32, style: &IconStyle) -> RgbaImage {
    let geometry = Geometry::for_size(size);
    let mut canvas = RgbaImage::new(size, size);

    fill_rounded_rect(&mut canvas, &geometry.outer_rect(), style.palette.outer);
    fill_rounded_rect(&mut canvas, &geometry.inner_rect(), style.palette.inner);

    if geometry.shows_glyph() {
        if let Err(err) = draw_text(&mut canvas, &geometry, style) {
            log::warn!("Could not add text to {size}px icon: {err}");
        }
    }

    canvas
}

pub fn fill_rounded_rect(canvas: &mut RgbaImage, rect: &RoundedRect, color: Rgba<u8>) {
    if rect.is_empty() {
        return;
    }

    let (width, height) = (canvas.width() as i64, canvas.height() as i64);
    let y_range = rect.y0.max(0)..=rect.y1.min(height - 1);
    for y in y_range {
        for x in rect.x0.max(0)..=rect.x1.min(width - 1) {
            if rect.contains(x, y) {
                canvas.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

fn draw_text(
    canvas: &mut RgbaImage,
    geometry: &Geometry,
    style: &IconStyle,
) -> Result<(), TextError> {
    let font = &style.font;
    let color = style.palette.text;

    let glyph_px = geometry.glyph_font_size();
    let glyph_box = font.measure(&style.glyph, glyph_px)?;
    let (x, y) = geometry.glyph_origin(glyph_box.width, glyph_box.height);
    font.draw(canvas, &style.glyph, glyph_px, (x, y), color)?;

    if geometry.shows_label() {
        let label_px = geometry.label_font_size();
        let label_box = font.measure(&style.label, label_px)?;
        let origin = geometry.label_origin(label_box.width, y, glyph_box.height);
        font.draw(canvas, &style.label, label_px, origin, color)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{INNER_COLOR, OUTER_COLOR, TEXT_COLOR};

    #[test]
    fn test_canvas_starts_transparent() {
        let icon = render(48);
        assert_eq!(icon.get_pixel(0, 0)[3], 0);
        assert_eq!(icon.get_pixel(47, 47)[3], 0);
    }

    #[test]
    fn test_layers() {
        for size in [16, 32, 48, 128] {
            let g = Geometry::for_size(size);
            let icon = render(size);
            let mid = size / 2;
            let outer = *icon.get_pixel(g.outer_margin, mid);
            let inner = *icon.get_pixel(g.inner_margin + 1, mid);
            assert_eq!(outer, OUTER_COLOR, "outer at {size}");
            assert_eq!(inner, INNER_COLOR, "inner at {size}");
        }
    }

    #[test]
    fn test_fill_clips_to_canvas() {
        let mut canvas = RgbaImage::new(8, 8);
        let rect = RoundedRect {
            x0: -4,
            y0: -4,
            x1: 20,
            y1: 20,
            radius: 2,
        };
        fill_rounded_rect(&mut canvas, &rect, OUTER_COLOR);
        assert!(canvas.pixels().all(|p| *p == OUTER_COLOR));
    }

    #[test]
    fn test_custom_palette() {
        let style = IconStyle {
            palette: Palette {
                outer: Rgba([0, 0, 255, 255]),
                inner: Rgba([0, 255, 0, 255]),
                text: Rgba([255, 0, 0, 255]),
            },
            ..IconStyle::default()
        };
        let icon = render_with(128, &style);
        assert_eq!(*icon.get_pixel(8, 64), Rgba([0, 0, 255, 255]));
        assert_eq!(*icon.get_pixel(17, 64), Rgba([0, 255, 0, 255]));
        assert!(icon.pixels().any(|p| *p == Rgba([255, 0, 0, 255])));
        assert!(!icon.pixels().any(|p| *p == TEXT_COLOR));
    }
}
