//! Fetch @font-face CSS for one family and profile.

use anyhow::{Context, Result};
use gfont_core::{FontProfile, download_css};
use log::info;
use url::Url;

use crate::io::Endpoint;

pub fn download(
    family: &str,
    style: &str,
    profile: FontProfile,
    mirror: Option<&Url>,
    output: &Endpoint,
) -> Result<()> {
    let css = download_css(profile, family, style, mirror)
        .with_context(|| format!("Failed to download {profile} CSS for {family}"))?;
    info!("Downloaded {} bytes of CSS", css.len());
    output.write(css)
}
