//! Concatenate JSON collections.

use std::path::PathBuf;

use anyhow::Result;
use gfont_core::FontFaceCollection;
use log::info;
use rayon::prelude::*;

use crate::io::Endpoint;

/// Inputs are read in parallel; faces keep argument order.
pub fn merge(inputs: &[PathBuf], output: &Endpoint) -> Result<()> {
    let collections: Vec<FontFaceCollection> = inputs
        .par_iter()
        .map(|path| Endpoint::new(path).read_collection())
        .collect::<Result<_>>()?;

    let mut merged = FontFaceCollection::new();
    for fonts in collections {
        merged.merge(fonts);
    }
    info!("Merged {} files into {} font faces", inputs.len(), merged.len());
    output.write_collection(&merged)
}
