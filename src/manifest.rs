//! `icons.json` fragment for the extension manifest
//!
//! Mirrors the `icons` and `action.default_icon` keys of a WebExtension
//! `manifest.json` so the generated set can be pasted in as-is.

use anyhow::{Context, Result};
use serde::{ser::SerializeMap, Serialize, Serializer};
use std::path::Path;

/// Root of the fragment
#[derive(Serialize, Debug, Clone, Default)]
pub struct IconsManifest {
    /// Icons shown on the extensions page and in the store
    pub icons: IconSet,

    /// Toolbar button icons
    pub action: Action,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct Action {
    pub default_icon: IconSet,
}

/// Size-to-path map that keeps insertion order when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconSet {
    entries: Vec<(u32, String)>,
}

impl IconSet {
    /// Adds `path` for `size`, replacing an earlier entry of the same size
    pub fn insert(&mut self, size: u32, path: String) {
        match self.entries.iter_mut().find(|(s, _)| *s == size) {
            Some(entry) => entry.1 = path,
            None => self.entries.push((size, path)),
        }
    }
}

impl Serialize for IconSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (size, path) in &self.entries {
            map.serialize_entry(&size.to_string(), path)?;
        }
        map.end()
    }
}

impl IconsManifest {
    /// Creates an empty manifest fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the icon of `size` written as `file_name` under `dir`
    ///
    /// # Arguments
    /// * `dir` - Output directory as given on the command line
    /// * `size` - Icon edge length in pixels
    /// * `file_name` - File name inside `dir`
    pub fn add_icon(&mut self, dir: &Path, size: u32, file_name: &str) {
        let path = manifest_path(dir, file_name);
        self.icons.insert(size, path.clone());
        self.action.default_icon.insert(size, path);
    }

    /// Writes the fragment as pretty-printed JSON
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize icons.json")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

/// Manifest paths are relative to the extension root and always use `/`.
fn manifest_path(dir: &Path, file_name: &str) -> String {
    let parts: Vec<String> = dir
        .components()
        .filter(|c| !matches!(c, std::path::Component::CurDir))
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if parts.is_empty() {
        file_name.to_string()
    } else {
        format!("{}/{}", parts.join("/"), file_name)
    }
}
