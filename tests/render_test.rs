use choco_icons::{
    font::TextFont,
    geometry::Geometry,
    palette::{INNER_COLOR, OUTER_COLOR, TEXT_COLOR},
    render::{render, render_with, IconStyle},
};
use image::RgbaImage;
use std::path::Path;

/// Rows and columns holding text-colored pixels.
fn text_pixels(img: &RgbaImage) -> Vec<(u32, u32)> {
    img.enumerate_pixels()
        .filter(|(_, _, p)| **p == TEXT_COLOR)
        .map(|(x, y, _)| (x, y))
        .collect()
}

#[test]
fn test_supported_sizes_have_matching_dimensions() {
    for size in [16, 32, 48, 128] {
        let icon = render(size);
        assert_eq!(icon.dimensions(), (size, size));
        // RgbaImage always carries alpha; the corners stay fully transparent
        assert_eq!(icon.get_pixel(0, 0)[3], 0);
    }
}

#[test]
fn test_small_icon_has_no_text() {
    let icon = render(16);
    assert!(text_pixels(&icon).is_empty());

    // Only the two fills and transparency
    assert!(icon
        .pixels()
        .all(|p| p[3] == 0 || *p == OUTER_COLOR || *p == INNER_COLOR));
}

#[test]
fn test_medium_icons_have_glyph_only() {
    for size in [32, 48] {
        let icon = render(size);
        let pixels = text_pixels(&icon);

        // "C" in the built-in font is 13 pixels inside a 5x7 cell
        assert_eq!(pixels.len(), 13, "size {size}");

        let g = Geometry::for_size(size);
        let (x, y) = g.glyph_origin(5, 7);
        for &(px, py) in &pixels {
            assert!((x..x + 5).contains(&(px as i64)), "size {size}");
            assert!((y..y + 7).contains(&(py as i64)), "size {size}");
        }
    }
}

#[test]
fn test_large_icon_has_glyph_and_label() {
    for size in [64, 128] {
        let icon = render(size);
        let pixels = text_pixels(&icon);

        let g = Geometry::for_size(size);
        let (_, glyph_y) = g.glyph_origin(5, 7);
        let glyph_bottom = glyph_y + 6;

        let glyph: Vec<_> = pixels.iter().filter(|p| (p.1 as i64) <= glyph_bottom).collect();
        let label: Vec<_> = pixels.iter().filter(|p| (p.1 as i64) > glyph_bottom).collect();

        assert_eq!(glyph.len(), 13, "size {size}");
        // C + H + O + C + O
        assert_eq!(label.len(), 13 + 17 + 16 + 13 + 16, "size {size}");

        let label_top = label.iter().map(|p| p.1 as i64).min().unwrap();
        assert_eq!(label_top, glyph_bottom + 1 + 2, "size {size}");

        let label_left = label.iter().map(|p| p.0).min().unwrap();
        let label_right = label.iter().map(|p| p.0).max().unwrap();
        assert_eq!(label_right - label_left + 1, 29, "size {size}");
    }
}

#[test]
fn test_label_is_centered_on_128() {
    let icon = render(128);
    let label_left = text_pixels(&icon)
        .iter()
        .filter(|p| p.1 >= 61)
        .map(|p| p.0)
        .min()
        .unwrap();
    assert_eq!(label_left, (128 - 29) / 2);
}

#[test]
fn test_missing_glyph_keeps_shapes_and_glyph() {
    let style = IconStyle {
        label: "Choco".to_string(),
        ..IconStyle::default()
    };
    let icon = render_with(128, &style);

    assert_eq!(text_pixels(&icon).len(), 13);
    assert_eq!(*icon.get_pixel(8, 64), OUTER_COLOR);
    assert_eq!(*icon.get_pixel(17, 64), INNER_COLOR);
}

#[test]
fn test_unavailable_font_omits_all_text() {
    let style = IconStyle {
        font: TextFont::load(Path::new("/nonexistent/font.ttf")),
        ..IconStyle::default()
    };

    for size in [32, 128] {
        let icon = render_with(size, &style);
        assert!(text_pixels(&icon).is_empty());

        let g = Geometry::for_size(size);
        assert_eq!(*icon.get_pixel(g.outer_margin, size / 2), OUTER_COLOR);
        assert_eq!(*icon.get_pixel(size / 2, size / 2), INNER_COLOR);
    }
}

#[test]
fn test_render_is_deterministic() {
    assert_eq!(render(128), render(128));
}
