//! Ordered collections of font faces and queries over them.

use std::hash::Hash;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    face::{FontFace, SourceUrl},
    parser::parse_css,
};

/// Distinct items in first-seen order.
fn distinct<T: Hash + Eq>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    items.into_iter().collect::<IndexSet<_>>().into_iter().collect()
}

/// Font faces in parse or merge order. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFaceCollection {
    #[serde(default)]
    fonts: Vec<FontFace>,
}

impl FontFaceCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every `@font-face` block in a CSS document.
    pub fn from_css(css: &str) -> Result<Self> {
        parse_css(css)
    }

    pub fn fonts(&self) -> &[FontFace] {
        &self.fonts
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FontFace> {
        self.fonts.iter()
    }

    /// Append all faces of `other`, keeping both orders.
    pub fn merge(&mut self, other: FontFaceCollection) {
        self.fonts.extend(other.fonts);
    }

    /// Distinct non-empty formats.
    pub fn formats(&self) -> Vec<&str> {
        distinct(self.fonts.iter().map(|f| f.format.as_str()).filter(|s| !s.is_empty()))
    }

    /// Distinct non-empty families.
    pub fn families(&self) -> Vec<&str> {
        distinct(self.fonts.iter().map(|f| f.family.as_str()).filter(|s| !s.is_empty()))
    }

    /// Distinct non-empty styles.
    pub fn styles(&self) -> Vec<&str> {
        distinct(self.fonts.iter().map(|f| f.style.as_str()).filter(|s| !s.is_empty()))
    }

    /// Distinct weights, skipping the unspecified weight 0.
    pub fn weights(&self) -> Vec<u32> {
        distinct(self.fonts.iter().map(|f| f.weight).filter(|&w| w > 0))
    }

    /// Distinct source URLs, compared by their text.
    pub fn urls(&self) -> Vec<&SourceUrl> {
        let mut seen = IndexSet::new();
        self.fonts
            .iter()
            .filter_map(|f| f.url.as_ref())
            .filter(|url| seen.insert(url.as_str()))
            .collect()
    }

    /// Faces matching every filter of `query`, in collection order.
    pub fn select(&self, query: &FontQuery) -> Vec<&FontFace> {
        self.fonts.iter().filter(|f| query.matches(f)).collect()
    }
}

impl From<Vec<FontFace>> for FontFaceCollection {
    fn from(fonts: Vec<FontFace>) -> Self {
        Self { fonts }
    }
}

impl FromIterator<FontFace> for FontFaceCollection {
    fn from_iter<I: IntoIterator<Item = FontFace>>(iter: I) -> Self {
        Self { fonts: iter.into_iter().collect() }
    }
}

impl IntoIterator for FontFaceCollection {
    type Item = FontFace;
    type IntoIter = std::vec::IntoIter<FontFace>;

    fn into_iter(self) -> Self::IntoIter {
        self.fonts.into_iter()
    }
}

impl<'a> IntoIterator for &'a FontFaceCollection {
    type Item = &'a FontFace;
    type IntoIter = std::slice::Iter<'a, FontFace>;

    fn into_iter(self) -> Self::IntoIter {
        self.fonts.iter()
    }
}

/// Exact-match filter over format, family, style, and weight.
///
/// Unset or empty string filters match anything; an unset weight matches
/// any weight, including 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontQuery {
    pub format: Option<String>,
    pub family: Option<String>,
    pub style: Option<String>,
    pub weight: Option<u32>,
}

impl FontQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn weight(mut self, weight: u32) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn matches(&self, face: &FontFace) -> bool {
        fn field_matches(filter: &Option<String>, value: &str) -> bool {
            filter.as_deref().is_none_or(|f| f.is_empty() || f == value)
        }

        field_matches(&self.format, &face.format)
            && field_matches(&self.family, &face.family)
            && field_matches(&self.style, &face.style)
            && self.weight.is_none_or(|w| w == face.weight)
    }
}
