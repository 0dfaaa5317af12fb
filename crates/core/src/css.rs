//! CSS output for font faces.
//!
//! Two flavors:
//! - per record: one `@font-face` rule per [`FontFace`], mirroring what the
//!   API serves;
//! - consolidated: one rule per (family, weight, style) listing every
//!   available format, in the order legacy browsers need.

use indexmap::IndexMap;

use crate::{
    collection::{FontFaceCollection, FontQuery},
    face::{FontFace, format},
};

/// Whitespace layout of generated CSS. Both layouts emit the same fields in
/// the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CssLayout {
    /// Everything on one line, no optional whitespace.
    #[default]
    Compact,
    /// One declaration per line, tab indented.
    Pretty,
}

/// Order of formats inside a consolidated `src`. `eot` must come first: IE
/// only reads the first `src` and needs the `?#iefix` hack for the rest.
const SRC_PRIORITY: [&str; 5] = [format::EOT, format::WOFF2, format::WOFF, format::TTF, format::SVG];

/// `Open Sans` → `'Open Sans'`, `Domine` → `Domine`
fn quote_family(family: &str) -> String {
    if family.contains(' ') { format!("'{family}'") } else { family.to_string() }
}

impl FontFace {
    /// A single `@font-face` rule for this record.
    ///
    /// An empty family or style is left out, so records built from a
    /// `src`-only block render back as one.
    pub fn to_css(&self, layout: CssLayout) -> String {
        let mut declarations = Vec::with_capacity(5);
        if !self.family.is_empty() {
            declarations.push(("font-family", quote_family(&self.family)));
        }
        if !self.style.is_empty() {
            declarations.push(("font-style", self.style.clone()));
        }
        declarations.push(("font-weight", self.weight.to_string()));
        declarations.push(("src", format!("url('{}') format('{}')", self.url_str(), self.format)));

        match layout {
            CssLayout::Compact => {
                if !self.unicode_range.is_empty() {
                    declarations.push(("unicode-range", self.unicode_range.join(",")));
                }
                let body: Vec<_> = declarations.iter().map(|(name, value)| format!("{name}:{value}")).collect();
                format!("@font-face{{{}}}", body.join(";"))
            }
            CssLayout::Pretty => {
                if !self.unicode_range.is_empty() {
                    declarations.push(("unicode-range", self.unicode_range.join(", ")));
                }
                let body: String =
                    declarations.iter().map(|(name, value)| format!("\n\t{name}: {value};")).collect();
                format!("@font-face {{{body}\n}}")
            }
        }
    }
}

impl FontFaceCollection {
    /// Every record as its own rule, in collection order.
    pub fn to_css(&self, layout: CssLayout) -> String {
        let separator = match layout {
            CssLayout::Compact => "",
            CssLayout::Pretty => "\n",
        };
        self.iter().map(|f| f.to_css(layout)).collect::<Vec<_>>().join(separator)
    }

    /// One rule per (family, weight, style), merging all formats into a
    /// single `src`.
    ///
    /// Every combination of the distinct families, weights, and styles gets
    /// a rule, even when no record matches it (its `src` is then empty).
    /// When a format has several matching records the first one wins.
    pub fn to_consolidated_css(&self, layout: CssLayout) -> String {
        let formats = self.formats();
        let mut rules = Vec::new();

        for family in self.families() {
            for weight in self.weights() {
                for style in self.styles() {
                    let selected: IndexMap<&str, &FontFace> = formats
                        .iter()
                        .filter_map(|&fmt| {
                            let query = FontQuery::new().format(fmt).family(family).style(style).weight(weight);
                            self.select(&query).first().map(|&face| (fmt, face))
                        })
                        .collect();

                    rules.push(consolidated_rule(family, weight, style, &selected, layout));
                }
            }
        }

        match layout {
            CssLayout::Compact => rules.concat(),
            CssLayout::Pretty if rules.is_empty() => String::new(),
            CssLayout::Pretty => rules.join("\n") + "\n",
        }
    }
}

fn consolidated_rule(
    family: &str,
    weight: u32,
    style: &str,
    selected: &IndexMap<&str, &FontFace>,
    layout: CssLayout,
) -> String {
    let family = quote_family(family);
    let (mut rule, entry_separator) = match layout {
        CssLayout::Compact => {
            (format!("@font-face{{font-family:{family};font-style:{style};font-weight:{weight};"), ",")
        }
        CssLayout::Pretty => (
            format!("@font-face {{\n\tfont-family: {family};\n\tfont-style: {style};\n\tfont-weight: {weight};"),
            ",\n\t\t",
        ),
    };
    let src_prefix = match layout {
        CssLayout::Compact => "src:",
        CssLayout::Pretty => "\n\tsrc: ",
    };

    for fmt in SRC_PRIORITY {
        let Some(face) = selected.get(fmt) else {
            if fmt == format::EOT {
                rule.push_str(src_prefix);
            }
            continue;
        };
        let url = face.url_str();

        if fmt == format::EOT {
            rule.push_str(&format!("{src_prefix}url('{url}');"));
            rule.push_str(&format!(
                "{src_prefix}url('{url}?#iefix') format('{}')",
                format::EMBEDDED_OPENTYPE
            ));
            rule.push_str(if selected.len() == 1 { ";" } else { entry_separator });
        } else {
            rule.push_str(&format!("url('{url}') format('{fmt}'){entry_separator}"));
        }
    }

    let trimmed = rule.trim_end();
    let trimmed = trimmed.strip_suffix(',').unwrap_or(trimmed);
    match layout {
        CssLayout::Compact => {
            let trimmed = trimmed.strip_suffix(';').unwrap_or(trimmed);
            format!("{trimmed}}}")
        }
        CssLayout::Pretty if trimmed.ends_with(';') => format!("{trimmed}\n}}"),
        CssLayout::Pretty => format!("{trimmed};\n}}"),
    }
}
