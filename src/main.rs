use anyhow::Result;
use choco_icons::{
    font::TextFont,
    icon_gen::{self, Options, DEFAULT_OUTPUT, DEFAULT_SIZES},
    palette::{parse_color, Palette},
    render::{IconStyle, DEFAULT_GLYPH, DEFAULT_LABEL},
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "choco-icons",
    about = "Generate the PNG icon set of the Choco browser extension"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Icon sizes to generate, in order.
    #[clap(
        short,
        long,
        value_delimiter = ',',
        value_name = "SIZES",
        default_values_t = DEFAULT_SIZES.to_vec(),
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    sizes: Vec<u32>,

    /// TrueType/OpenType font for the text. The built-in bitmap font is used otherwise.
    #[clap(long, value_name = "FILE")]
    font: Option<PathBuf>,

    /// Text drawn under the glyph on large icons.
    #[clap(long, default_value = DEFAULT_LABEL)]
    label: String,

    /// Frame color (CSS color format)
    #[clap(long, value_name = "COLOR")]
    outer_color: Option<String>,

    /// Body color (CSS color format)
    #[clap(long, value_name = "COLOR")]
    inner_color: Option<String>,

    /// Text color (CSS color format)
    #[clap(long, value_name = "COLOR")]
    text_color: Option<String>,

    /// Also write icons.json for the extension manifest
    #[clap(long)]
    manifest: bool,
}

impl Args {
    fn into_options(self) -> Result<Options> {
        let defaults = Palette::default();
        let palette = Palette {
            outer: color_or(self.outer_color.as_deref(), defaults.outer)?,
            inner: color_or(self.inner_color.as_deref(), defaults.inner)?,
            text: color_or(self.text_color.as_deref(), defaults.text)?,
        };

        let font = match &self.font {
            Some(path) => TextFont::load(path),
            None => TextFont::Builtin,
        };

        Ok(Options {
            output: self.output,
            sizes: self.sizes,
            style: IconStyle {
                palette,
                glyph: DEFAULT_GLYPH.to_string(),
                label: self.label,
                font,
            },
            manifest: self.manifest,
        })
    }
}

fn color_or(color: Option<&str>, default: image::Rgba<u8>) -> Result<image::Rgba<u8>> {
    match color {
        Some(color) => parse_color(color),
        None => Ok(default),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    let options = Args::parse().into_options()?;
    icon_gen::generate_icons(&options)?;

    Ok(())
}
