use anyhow::{Context, Result};
use image::Rgba;
use std::str::FromStr;

/// Dark brown frame.
pub const OUTER_COLOR: Rgba<u8> = Rgba([0x8B, 0x45, 0x13, 0xFF]);
/// Chocolate body.
pub const INNER_COLOR: Rgba<u8> = Rgba([0xD2, 0x69, 0x1E, 0xFF]);
pub const TEXT_COLOR: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub outer: Rgba<u8>,
    pub inner: Rgba<u8>,
    pub text: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            outer: OUTER_COLOR,
            inner: INNER_COLOR,
            text: TEXT_COLOR,
        }
    }
}

/// Parse a CSS color (`#8b4513`, `rgb(...)`) into RGBA.
pub fn parse_color(color: &str) -> Result<Rgba<u8>> {
    let srgb = css_color::Srgb::from_str(color)
        .map_err(|_| anyhow::anyhow!("invalid color: {color}"))
        .context("Failed to parse CSS color")?;

    Ok(Rgba([
        to_channel(srgb.red),
        to_channel(srgb.green),
        to_channel(srgb.blue),
        to_channel(srgb.alpha),
    ]))
}

fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
