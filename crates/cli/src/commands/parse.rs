//! CSS to JSON.

use anyhow::{Context, Result};
use gfont_core::parse_css;
use log::info;

use crate::io::Endpoint;

pub fn parse(input: &Endpoint, output: &Endpoint) -> Result<()> {
    let css = input.read()?;
    let fonts = parse_css(&css).with_context(|| format!("Failed to parse {}", input.path().display()))?;
    info!("Parsed {} font faces", fonts.len());
    output.write_collection(&fonts)
}
