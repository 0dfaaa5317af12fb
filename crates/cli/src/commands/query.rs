//! Distinct-value listing and record selection.

use anyhow::Result;
use gfont_core::{FontFaceCollection, FontQuery};

use crate::{cli::Field, io::Endpoint};

/// Distinct values of `field` in first-seen order.
fn distinct_values(fonts: &FontFaceCollection, field: Field) -> Vec<String> {
    match field {
        Field::Url => fonts.urls().into_iter().map(ToString::to_string).collect(),
        Field::Family => fonts.families().into_iter().map(String::from).collect(),
        Field::Format => fonts.formats().into_iter().map(String::from).collect(),
        Field::Style => fonts.styles().into_iter().map(String::from).collect(),
        Field::Weight => fonts.weights().into_iter().map(|w| w.to_string()).collect(),
    }
}

pub fn filter(input: &Endpoint, field: Field, output: &Endpoint) -> Result<()> {
    let fonts = input.read_collection()?;
    let listing: String = distinct_values(&fonts, field).into_iter().map(|v| v + "\n").collect();
    output.write(listing)
}

#[derive(Debug, Clone, Default)]
pub struct SelectFilters {
    pub format: Option<String>,
    pub family: Option<String>,
    pub style: Option<String>,
    pub weight: Option<u32>,
}

impl From<SelectFilters> for FontQuery {
    fn from(filters: SelectFilters) -> Self {
        FontQuery { format: filters.format, family: filters.family, style: filters.style, weight: filters.weight }
    }
}

pub fn select(input: &Endpoint, filters: SelectFilters, output: &Endpoint) -> Result<()> {
    let fonts = input.read_collection()?;
    let query = FontQuery::from(filters);
    let selected: FontFaceCollection = fonts.select(&query).into_iter().cloned().collect();
    output.write_collection(&selected)
}
