//! gfont core - parse, query, and re-serialize `@font-face` CSS.

pub mod collection;
pub mod config;
pub mod css;
pub mod download;
pub mod error;
pub mod face;
pub mod json;
pub mod parser;
pub mod tokens;

pub use collection::{FontFaceCollection, FontQuery};
pub use css::CssLayout;
pub use download::{FontProfile, css_url, download_css};
pub use error::{DownloadError, ParseError, ParseError as Error, Result};
pub use face::{FontFace, SourceUrl, format};
pub use parser::parse_css;
