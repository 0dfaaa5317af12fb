//! CLI command implementations.

mod css;
mod download;
mod merge;
mod parse;
mod query;

pub use css::css;
pub use download::download;
pub use merge::merge;
pub use parse::parse;
pub use query::{SelectFilters, filter, select};
