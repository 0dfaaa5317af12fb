//! Input and output endpoints. A path of `-` means stdin or stdout.

use std::{
    fs::{read_to_string, write},
    io::{Read, Write, stdin, stdout},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use gfont_core::FontFaceCollection;

/// A file path or the standard stream stand-in `-`.
#[derive(Debug, Clone)]
pub struct Endpoint {
    path: PathBuf,
}

impl Endpoint {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_stdio(&self) -> bool {
        self.path.as_os_str() == "-"
    }

    pub fn read(&self) -> Result<String> {
        if self.is_stdio() {
            let mut text = String::new();
            stdin().read_to_string(&mut text).context("Failed to read stdin")?;
            return Ok(text);
        }
        read_to_string(&self.path).with_context(|| format!("Failed to read: {}", self.path.display()))
    }

    pub fn write(&self, data: impl AsRef<[u8]>) -> Result<()> {
        if self.is_stdio() {
            let mut out = stdout().lock();
            out.write_all(data.as_ref()).context("Failed to write stdout")?;
            return out.flush().context("Failed to write stdout");
        }
        write(&self.path, data).with_context(|| format!("Failed to write: {}", self.path.display()))
    }

    /// Read a JSON collection.
    pub fn read_collection(&self) -> Result<FontFaceCollection> {
        let json = self.read()?;
        FontFaceCollection::from_json(&json)
            .with_context(|| format!("Invalid font JSON: {}", self.path.display()))
    }

    /// Write a collection as compact JSON.
    pub fn write_collection(&self, fonts: &FontFaceCollection) -> Result<()> {
        let json = fonts.to_json().context("Failed to serialize fonts")?;
        self.write(json)
    }
}
