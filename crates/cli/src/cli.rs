//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use gfont_core::FontProfile;
use url::Url;

use crate::{
    commands::{SelectFilters, css, download, filter, merge, parse, select},
    io::Endpoint,
};

#[derive(Parser)]
#[command(name = "gfontc")]
#[command(about = "Download and convert Google Fonts @font-face CSS")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Field listed by `filter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Field {
    Url,
    Family,
    Format,
    Style,
    Weight,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download @font-face CSS from the Google Fonts API
    Download {
        /// Font family, e.g. "Open Sans"
        #[arg(short = 't', long)]
        family: String,
        /// Style parameters, e.g. "ital,wght@1,700"
        #[arg(short, long, default_value = "")]
        style: String,
        #[arg(short, long, default_value = "woff2", value_parser = parse_profile)]
        profile: FontProfile,
        /// Alternative API base URL
        #[arg(short, long)]
        mirror: Option<Url>,
        #[arg(short, long, default_value = "-")]
        output: PathBuf,
    },
    /// Convert @font-face CSS to JSON
    Parse {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long, default_value = "-")]
        output: PathBuf,
    },
    /// List the distinct values of one field, one per line
    Filter {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short = 'q', long, value_enum)]
        field: Field,
    },
    /// Keep the records matching every given filter
    Select {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(long)]
        format: Option<String>,
        #[arg(long)]
        family: Option<String>,
        #[arg(long)]
        style: Option<String>,
        #[arg(long)]
        weight: Option<u32>,
        #[arg(short, long, default_value = "-")]
        output: PathBuf,
    },
    /// Concatenate JSON collections in argument order
    Merge {
        #[arg(short, long, default_value = "-")]
        output: PathBuf,
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
    /// Render a JSON collection as CSS
    Css {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long, default_value = "-")]
        output: PathBuf,
        /// One rule per family, weight, and style listing every format
        #[arg(short = 'c', long)]
        consolidate: bool,
        /// Human readable output
        #[arg(short = 'H', long)]
        pretty: bool,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Download { family, style, profile, mirror, output } => {
                download(&family, &style, profile, mirror.as_ref(), &Endpoint::new(output))?;
            }
            Commands::Parse { input, output } => {
                parse(&Endpoint::new(input), &Endpoint::new(output))?;
            }
            Commands::Filter { input, field } => {
                filter(&Endpoint::new(input), field, &Endpoint::new("-"))?;
            }
            Commands::Select { input, format, family, style, weight, output } => {
                let filters = SelectFilters { format, family, style, weight };
                select(&Endpoint::new(input), filters, &Endpoint::new(output))?;
            }
            Commands::Merge { output, inputs } => {
                merge(&inputs, &Endpoint::new(output))?;
            }
            Commands::Css { input, output, consolidate, pretty } => {
                css(&Endpoint::new(input), consolidate, pretty, &Endpoint::new(output))?;
            }
        }
        Ok(())
    }
}

fn parse_profile(s: &str) -> Result<FontProfile, String> {
    s.parse().map_err(|_| {
        let names: Vec<_> = FontProfile::ALL.iter().map(|p| p.name()).collect();
        format!("Unknown font profile '{s}', expected one of: {}", names.join(", "))
    })
}
