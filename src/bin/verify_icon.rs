use choco_icons::{
    geometry::Geometry,
    palette::{INNER_COLOR, OUTER_COLOR, TEXT_COLOR},
};
use image::io::Reader as ImageReader;

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/icon-128.png".to_string());

    let img = ImageReader::open(&path)?.decode()?.to_rgba8();
    let (width, height) = img.dimensions();

    println!("Checking icon: {}", path);
    println!("Image dimensions: {}x{}", width, height);
    if width != height {
        println!("⚠ Icon is not square");
        return Ok(());
    }

    let geometry = Geometry::for_size(width);
    let mid = width / 2;
    let (Some(outer), Some(inner)) = (
        img.get_pixel_checked(geometry.outer_margin, mid),
        img.get_pixel_checked(geometry.inner_margin + 1, mid),
    ) else {
        println!("⚠ Icon is too small to sample ({}px)", width);
        return Ok(());
    };

    println!("\nFrame pixel (x={}, y={}):", geometry.outer_margin, mid);
    println!("  RGBA: [{}, {}, {}, {}]", outer[0], outer[1], outer[2], outer[3]);
    println!("Body pixel (x={}, y={}):", geometry.inner_margin + 1, mid);
    println!("  RGBA: [{}, {}, {}, {}]", inner[0], inner[1], inner[2], inner[3]);

    let text_pixels: Vec<(u32, u32)> = img
        .enumerate_pixels()
        .filter(|(_, _, p)| **p == TEXT_COLOR)
        .map(|(x, y, _)| (x, y))
        .collect();

    println!("\nText analysis:");
    println!("  {} text-colored pixels", text_pixels.len());
    if let (Some(min_x), Some(max_x), Some(min_y), Some(max_y)) = (
        text_pixels.iter().map(|p| p.0).min(),
        text_pixels.iter().map(|p| p.0).max(),
        text_pixels.iter().map(|p| p.1).min(),
        text_pixels.iter().map(|p| p.1).max(),
    ) {
        println!("  bounding box: x={}..={}, y={}..={}", min_x, max_x, min_y, max_y);
    }

    if *outer == OUTER_COLOR && *inner == INNER_COLOR {
        println!("✓ Frame and body colors detected!");
    } else {
        println!("⚠ Frame or body color differs from the default palette");
    }

    Ok(())
}
