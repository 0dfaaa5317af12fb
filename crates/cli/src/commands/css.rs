//! JSON to CSS.

use anyhow::Result;
use gfont_core::CssLayout;

use crate::io::Endpoint;

pub fn css(input: &Endpoint, consolidate: bool, pretty: bool, output: &Endpoint) -> Result<()> {
    let fonts = input.read_collection()?;
    let layout = if pretty { CssLayout::Pretty } else { CssLayout::Compact };
    let css = if consolidate { fonts.to_consolidated_css(layout) } else { fonts.to_css(layout) };
    output.write(css)
}
