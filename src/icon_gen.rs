use crate::{
    manifest::IconsManifest,
    render::{render_with, IconStyle},
};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Sizes requested by the browser for extension icons.
pub const DEFAULT_SIZES: [u32; 4] = [16, 32, 48, 128];

pub const DEFAULT_OUTPUT: &str = "assets";

pub const MANIFEST_FILE: &str = "icons.json";

#[derive(Debug)]
pub struct Options {
    pub output: PathBuf,
    pub sizes: Vec<u32>,
    pub style: IconStyle,
    pub manifest: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            sizes: DEFAULT_SIZES.to_vec(),
            style: IconStyle::default(),
            manifest: false,
        }
    }
}

pub fn icon_file_name(size: u32) -> String {
    format!("icon-{size}.png")
}

/// Render every requested size in order and write it next to the others.
/// Returns the paths written.
pub fn generate_icons(options: &Options) -> Result<Vec<PathBuf>> {
    create_dir_all(&options.output).with_context(|| {
        format!("Can't create output directory {}", options.output.display())
    })?;

    let mut written = Vec::with_capacity(options.sizes.len() + 1);
    let mut manifest = options.manifest.then(IconsManifest::new);

    for &size in &options.sizes {
        let icon = render_with(size, &options.style);
        let file_name = icon_file_name(size);
        let output_path = options.output.join(&file_name);
        save_png(&icon, &output_path)?;
        println!("Created {}", output_path.display());

        if let Some(manifest) = manifest.as_mut() {
            manifest.add_icon(&options.output, size, &file_name);
        }
        written.push(output_path);
    }

    if let Some(manifest) = manifest {
        let manifest_path = options.output.join(MANIFEST_FILE);
        manifest.write_to_file(&manifest_path)?;
        println!("Created {}", manifest_path.display());
        written.push(manifest_path);
    }

    log::debug!("Wrote {} files to {}", written.len(), options.output.display());
    Ok(written)
}

fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(image, &mut out_file).context("Failed to write PNG")?;
    out_file.flush()?;
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image: &RgbaImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    let (width, height) = image.dimensions();
    encoder.write_image(image.as_raw(), width, height, ColorType::Rgba8)?;
    Ok(())
}
