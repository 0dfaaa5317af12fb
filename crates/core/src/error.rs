//! Error types for parsing and downloading `@font-face` CSS.

use std::num::ParseIntError;

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that abort parsing of a CSS document.
///
/// Every variant that can occur mid-stream carries `after`, the last token
/// that was accepted before the failure.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A token of the wrong kind or value.
    #[error("expected {expected} after {after}, found {found}")]
    Grammar {
        expected: &'static str,
        found: String,
        after: String,
    },

    /// `font-weight` value is not an integer.
    #[error("font-weight {value:?} after {after} is not an integer: {source}")]
    NumericConversion {
        value: String,
        after: String,
        source: ParseIntError,
    },

    /// `src` URL rejected by the URL grammar.
    #[error("invalid url {url:?} after {after}: {source}")]
    UrlParse {
        url: String,
        after: String,
        source: url::ParseError,
    },

    /// The input or the block ended in the middle of a declaration.
    #[error("unexpected end of input after {after}")]
    UnexpectedEnd { after: String },

    /// A `@font-face` block closed without a `src` declaration.
    #[error("@font-face block for family {family:?} has no src")]
    MissingSource { family: String },
}

/// Errors fetching CSS from the fonts API.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("unknown font profile {0:?}")]
    UnknownProfile(String),
}
