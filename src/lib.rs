//! Icon set generator for the Choco browser extension.
//!
//! [`render::render`] draws a single icon in memory; [`icon_gen::generate_icons`]
//! writes the whole set to disk.

pub mod font;
pub mod geometry;
pub mod icon_gen;
pub mod manifest;
pub mod palette;
pub mod render;
