//! The font-face record and its source URL.

use std::{fmt, str::FromStr};

use percent_encoding::percent_decode_str;
use url::Url;

/// Font format names as they appear in `format('...')` hints.
pub mod format {
    pub const EOT: &str = "eot";
    pub const EMBEDDED_OPENTYPE: &str = "embedded-opentype";
    pub const WOFF2: &str = "woff2";
    pub const WOFF: &str = "woff";
    pub const TTF: &str = "ttf";
    pub const SVG: &str = "svg";
}

/// Base that relative locators are resolved against, only so their path and
/// query can be inspected. Never serialized.
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// A font source locator.
///
/// Keeps the text exactly as written next to a parsed view used to derive
/// the version and file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUrl {
    raw: String,
    parsed: Url,
}

impl SourceUrl {
    /// Parse an absolute or relative URL.
    pub fn parse(raw: &str) -> Result<Self, url::ParseError> {
        let parsed = match Url::parse(raw) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(RELATIVE_BASE)?.join(raw)?,
            Err(e) => return Err(e),
        };
        Ok(Self { raw: raw.to_string(), parsed })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    fn query(&self) -> Option<&str> {
        self.parsed.query().filter(|q| !q.is_empty())
    }

    fn query_param(&self, name: &str) -> Option<String> {
        self.parsed
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Path segments, percent-decoded.
    fn path_segments(&self) -> Vec<String> {
        self.parsed
            .path_segments()
            .map(|segments| segments.map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned()).collect())
            .unwrap_or_default()
    }

    /// Font version encoded in the URL.
    ///
    /// - `.../l/font?kit=XYZ&v=v10` → `v10` (the `v` query parameter)
    /// - `.../s/domine/v10/abc.woff2` → `v10` (parent directory, if it starts with `v`)
    pub fn version(&self) -> String {
        if self.query().is_some() {
            return self.query_param("v").unwrap_or_default();
        }

        let mut segments = self.path_segments();
        match segments.len().checked_sub(2).map(|i| segments.swap_remove(i)) {
            Some(parent) if parent.starts_with('v') => parent,
            _ => String::new(),
        }
    }

    /// File name of the font.
    ///
    /// - `.../l/font?kit=XYZ&v=v10` → `XYZ.svg`
    /// - `.../s/domine/v10/abc.woff2` → `abc.woff2`
    pub fn file_name(&self) -> String {
        if self.query().is_some() {
            return match self.query_param("kit") {
                Some(kit) if !kit.is_empty() => format!("{kit}.svg"),
                _ => String::new(),
            };
        }

        self.path_segments().pop().unwrap_or_default()
    }
}

impl FromStr for SourceUrl {
    type Err = url::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SourceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// One `@font-face` declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontFace {
    /// Format hint (`woff2`, `eot`, ...), passed through unvalidated.
    pub format: String,
    /// Numeric weight; 0 means unspecified.
    pub weight: u32,
    pub family: String,
    pub style: String,
    pub url: Option<SourceUrl>,
    /// Range tokens in source order.
    pub unicode_range: Vec<String>,
}

impl FontFace {
    /// See [`SourceUrl::version`]. Empty without a URL.
    pub fn version(&self) -> String {
        self.url.as_ref().map(SourceUrl::version).unwrap_or_default()
    }

    /// See [`SourceUrl::file_name`]. Empty without a URL.
    pub fn file_name(&self) -> String {
        self.url.as_ref().map(SourceUrl::file_name).unwrap_or_default()
    }

    /// URL text, empty without a URL.
    pub fn url_str(&self) -> &str {
        self.url.as_ref().map_or("", SourceUrl::as_str)
    }
}

impl fmt::Display for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.family, self.style, self.weight)
    }
}
