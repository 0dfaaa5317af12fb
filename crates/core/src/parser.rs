//! `@font-face` declaration parser.
//!
//! A state machine over significant tokens:
//!
//! ```text
//! scan-for-at-rule ──@font-face──▶ expect-open-brace ──{──▶ consume-properties ──}──┐
//!        ▲                                                                            │
//!        └────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only `font-family`, `font-style`, `font-weight`, `src`, and
//! `unicode-range` are interpreted. Other `name: value;` declarations are
//! skipped. One malformed block fails the whole document.
//!
//! Blocks and function arguments are entered with `parse_nested_block`, so
//! the closing `}` of a block shows up as the end of its token stream.

use cssparser::{ParseErrorKind, Parser, ParserInput, ToCss, Token, UnicodeRange};
use log::debug;

use crate::{
    collection::FontFaceCollection,
    error::{ParseError, Result},
    face::{FontFace, SourceUrl, format},
    tokens::{Located, TokenFilter},
};

type CssError<'i> = cssparser::ParseError<'i, ParseError>;
type CssResult<'i, T> = std::result::Result<T, CssError<'i>>;

/// Parse every `@font-face` block in `css`.
///
/// A document without any block yields an empty collection.
pub fn parse_css(css: &str) -> Result<FontFaceCollection> {
    let mut input = ParserInput::new(css);
    let mut input = Parser::new(&mut input);
    let mut parser = FaceParser::new();
    parser.parse(&mut input).map_err(|e| parser.finish_error(e))
}

struct FaceParser {
    /// Last accepted token, for diagnostics.
    last_good: String,
}

impl FaceParser {
    fn new() -> Self {
        Self { last_good: "start of input".into() }
    }

    fn parse<'i>(&mut self, input: &mut Parser<'i, '_>) -> CssResult<'i, FontFaceCollection> {
        let mut faces = Vec::new();

        while let Some(tok) = input.next_significant() {
            if !matches!(&tok.token, Token::AtKeyword(name) if &**name == "font-face") {
                continue;
            }
            self.accept(&tok);

            match input.next_significant() {
                Some(open) if open.token == Token::CurlyBracketBlock => self.accept(&open),
                other => return Err(self.grammar(input, "'{'", other.as_ref())),
            }

            let body = input.position();
            let face = input.parse_nested_block(|block| self.parse_block(block))?;
            if !input.slice_from(body).ends_with('}') {
                return Err(self.end_of_input(input));
            }
            if face.url.is_none() {
                return Err(input.new_custom_error(ParseError::MissingSource { family: face.family }));
            }

            debug!("parsed @font-face {face} ({})", face.format);
            faces.push(face);
        }

        debug!("parsed {} @font-face blocks", faces.len());
        Ok(faces.into_iter().collect())
    }

    /// Declarations up to the end of the block.
    fn parse_block<'i>(&mut self, input: &mut Parser<'i, '_>) -> CssResult<'i, FontFace> {
        let mut face = FontFace::default();

        while let Some(tok) = input.next_significant() {
            let name = match &tok.token {
                Token::Semicolon => {
                    self.accept(&tok);
                    continue;
                }
                Token::Ident(name) => name.to_string(),
                _ if tok.is_bad() => return Err(self.end_of_input(input)),
                _ => return Err(self.grammar(input, "property name or '}'", Some(&tok))),
            };
            self.accept(&tok);

            match name.as_str() {
                "font-family" => face.family = self.parse_family(input)?,
                "font-style" => face.style = self.parse_style(input)?,
                "font-weight" => face.weight = self.parse_weight(input)?,
                "src" => {
                    let (url, format) = self.parse_src(input)?;
                    face.url = Some(url);
                    face.format = format;
                }
                "unicode-range" => face.unicode_range = self.parse_unicode_range(input)?,
                other => self.skip_declaration(input, other)?,
            }
        }

        Ok(face)
    }

    /// `font-family: 'Open Sans';` or `font-family: Open Sans;`
    fn parse_family<'i>(&mut self, input: &mut Parser<'i, '_>) -> CssResult<'i, String> {
        self.expect(input, &Token::Colon, "':'")?;

        let tok = self.require(input)?;
        let family = match &tok.token {
            Token::QuotedString(family) => {
                let family = family.to_string();
                self.accept(&tok);
                family
            }
            Token::Ident(first) => {
                let mut words = vec![first.to_string()];
                self.accept(&tok);
                while let Some(word) = self.next_ident(input) {
                    words.push(word);
                }
                words.join(" ")
            }
            _ => return Err(self.grammar(input, "<string>", Some(&tok))),
        };

        self.expect(input, &Token::Semicolon, "';'")?;
        Ok(family)
    }

    /// `font-style: italic;`
    fn parse_style<'i>(&mut self, input: &mut Parser<'i, '_>) -> CssResult<'i, String> {
        self.expect(input, &Token::Colon, "':'")?;

        let tok = self.require(input)?;
        let Token::Ident(style) = &tok.token else {
            return Err(self.grammar(input, "<ident>", Some(&tok)));
        };
        let style = style.to_string();
        self.accept(&tok);

        self.expect(input, &Token::Semicolon, "';'")?;
        Ok(style)
    }

    /// `font-weight: 400;`
    fn parse_weight<'i>(&mut self, input: &mut Parser<'i, '_>) -> CssResult<'i, u32> {
        self.expect(input, &Token::Colon, "':'")?;

        let tok = self.require(input)?;
        if !matches!(tok.token, Token::Number { .. } | Token::Ident(_) | Token::Dimension { .. }) {
            return Err(self.grammar(input, "<number>", Some(&tok)));
        }
        let value = tok.token.to_css_string();
        let weight = value.parse::<u32>().map_err(|source| {
            input.new_custom_error(ParseError::NumericConversion {
                value: value.clone(),
                after: self.last_good.clone(),
                source,
            })
        })?;
        self.accept(&tok);

        self.expect(input, &Token::Semicolon, "';'")?;
        Ok(weight)
    }

    /// `src: url(...);` or `src: url(...) format('woff2');`
    ///
    /// A bare URL is an EOT source; that is how the API serves IE.
    fn parse_src<'i>(&mut self, input: &mut Parser<'i, '_>) -> CssResult<'i, (SourceUrl, String)> {
        self.expect(input, &Token::Colon, "':'")?;

        let tok = self.require(input)?;
        let raw = match &tok.token {
            Token::UnquotedUrl(url) => url.to_string(),
            Token::Function(name) if name.eq_ignore_ascii_case("url") => {
                input.parse_nested_block(|args| self.parse_string_argument(args))?
            }
            _ => return Err(self.grammar(input, "<url>", Some(&tok))),
        };
        if raw.is_empty() {
            return Err(self.grammar(input, "non-empty <url>", Some(&tok)));
        }
        self.accept(&tok);

        let url = SourceUrl::parse(&raw).map_err(|source| {
            input.new_custom_error(ParseError::UrlParse {
                url: raw.clone(),
                after: self.last_good.clone(),
                source,
            })
        })?;

        let tok = self.require(input)?;
        match &tok.token {
            Token::Semicolon => {
                self.accept(&tok);
                Ok((url, format::EOT.to_string()))
            }
            Token::Function(name) if &**name == "format" => {
                self.accept(&tok);
                let format = input.parse_nested_block(|args| self.parse_string_argument(args))?;
                self.expect(input, &Token::Semicolon, "';'")?;
                Ok((url, format))
            }
            _ => Err(self.grammar(input, "';' or format(", Some(&tok))),
        }
    }

    /// `unicode-range: U+0000-00FF, U+0131;`
    ///
    /// Ranges keep their source text. Any other token, or the end of the
    /// block, ends the list; the token is left for the block loop.
    fn parse_unicode_range<'i>(&mut self, input: &mut Parser<'i, '_>) -> CssResult<'i, Vec<String>> {
        self.expect(input, &Token::Colon, "':'")?;

        let mut ranges = Vec::new();
        loop {
            input.skip_whitespace();
            let start = input.position();
            let state = input.state();

            if UnicodeRange::parse(input).is_ok() {
                let range = input.slice_from(start).trim_end().to_string();
                self.last_good = format!("unicode-range {range}");
                ranges.push(range);
                continue;
            }

            input.reset(&state);
            match input.next_significant() {
                Some(tok) if tok.token == Token::Comma => self.accept(&tok),
                Some(tok) if tok.token == Token::Semicolon => {
                    self.accept(&tok);
                    break;
                }
                _ => {
                    input.reset(&state);
                    break;
                }
            }
        }
        Ok(ranges)
    }

    /// `font-display: swap;` and anything else not modeled.
    fn skip_declaration<'i>(&mut self, input: &mut Parser<'i, '_>, name: &str) -> CssResult<'i, ()> {
        debug!("skipping unsupported property {name}");
        self.expect(input, &Token::Colon, "':'")?;

        loop {
            let tok = self.require(input)?;
            self.accept(&tok);
            if tok.token == Token::Semicolon {
                return Ok(());
            }
        }
    }

    /// The single string inside `format(...)` or a quoted `url(...)`.
    fn parse_string_argument<'i>(&mut self, input: &mut Parser<'i, '_>) -> CssResult<'i, String> {
        let tok = self.require(input)?;
        let Token::QuotedString(value) = &tok.token else {
            return Err(self.grammar(input, "<string>", Some(&tok)));
        };
        let value = value.to_string();
        self.accept(&tok);

        if let Some(extra) = input.next_significant() {
            return Err(self.grammar(input, "')'", Some(&extra)));
        }
        Ok(value)
    }

    // -----------------------------------------------------------------------
    // Token plumbing
    // -----------------------------------------------------------------------

    fn accept(&mut self, tok: &Located<'_>) {
        self.last_good = tok.to_string();
    }

    /// Next token of a declaration. The block or input ending here is
    /// [`ParseError::UnexpectedEnd`].
    fn require<'i>(&self, input: &mut Parser<'i, '_>) -> CssResult<'i, Located<'i>> {
        match input.next_significant() {
            Some(tok) if !tok.is_bad() => Ok(tok),
            _ => Err(self.end_of_input(input)),
        }
    }

    fn expect<'i>(&mut self, input: &mut Parser<'i, '_>, want: &Token<'_>, expected: &'static str) -> CssResult<'i, ()> {
        let tok = self.require(input)?;
        if tok.token != *want {
            return Err(self.grammar(input, expected, Some(&tok)));
        }
        self.accept(&tok);
        Ok(())
    }

    /// Consume an identifier if one comes next.
    fn next_ident(&mut self, input: &mut Parser<'_, '_>) -> Option<String> {
        let state = input.state();
        if let Some(tok) = input.next_significant()
            && let Token::Ident(word) = &tok.token
        {
            let word = word.to_string();
            self.accept(&tok);
            return Some(word);
        }
        input.reset(&state);
        None
    }

    fn end_of_input<'i>(&self, input: &Parser<'i, '_>) -> CssError<'i> {
        input.new_custom_error(ParseError::UnexpectedEnd { after: self.last_good.clone() })
    }

    fn grammar<'i>(&self, input: &Parser<'i, '_>, expected: &'static str, found: Option<&Located<'_>>) -> CssError<'i> {
        let found = found.map_or_else(|| "end of input".to_string(), Located::to_string);
        input.new_custom_error(ParseError::Grammar { expected, found, after: self.last_good.clone() })
    }

    fn finish_error(&self, err: CssError<'_>) -> ParseError {
        match err.kind {
            ParseErrorKind::Custom(err) => err,
            ParseErrorKind::Basic(kind) => ParseError::Grammar {
                expected: "well-formed CSS",
                found: format!("{kind:?}"),
                after: self.last_good.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOMINE: &str = r#"
/* latin-ext */
@font-face {
  font-family: 'Domine';
  font-style: normal;
  font-weight: 400;
  font-display: swap;
  src: url(https://fonts.gstatic.com/s/domine/v10/L0x8DFMnlVwD4h3Lt9JWnbX3jG-2X0H8.woff2) format('woff2');
  unicode-range: U+0100-024F, U+0259, U+1E00-1EFF;
}
/* latin */
@font-face {
  font-family: 'Domine';
  font-style: normal;
  font-weight: 700;
  src: url(https://fonts.gstatic.com/s/domine/v10/L0x8DFMnlVwD4h3Lt9JWnbX3jG-2X3LAI10.woff2) format('woff2');
  unicode-range: U+0000-00FF, U+0131;
}
"#;

    #[test]
    fn parses_google_css() {
        let fonts = parse_css(DOMINE).unwrap();
        assert_eq!(fonts.len(), 2);

        let first = &fonts.fonts()[0];
        assert_eq!(first.family, "Domine");
        assert_eq!(first.style, "normal");
        assert_eq!(first.weight, 400);
        assert_eq!(first.format, "woff2");
        assert_eq!(first.unicode_range, vec!["U+0100-024F", "U+0259", "U+1E00-1EFF"]);
        assert_eq!(first.version(), "v10");
        assert_eq!(first.file_name(), "L0x8DFMnlVwD4h3Lt9JWnbX3jG-2X0H8.woff2");

        assert_eq!(fonts.fonts()[1].weight, 700);
        assert_eq!(fonts.fonts()[1].unicode_range, vec!["U+0000-00FF", "U+0131"]);
    }

    #[test]
    fn empty_input_is_empty_collection() {
        assert!(parse_css("").unwrap().is_empty());
        assert!(parse_css("  /* nothing */ ").unwrap().is_empty());
    }

    #[test]
    fn other_rules_are_ignored() {
        let css = "body { color: red; } @font-face { font-family: 'A'; src: url(a.ttf) format('ttf'); }";
        let fonts = parse_css(css).unwrap();
        assert_eq!(fonts.len(), 1);
        assert_eq!(fonts.fonts()[0].url_str(), "a.ttf");
    }

    #[test]
    fn bare_src_is_eot() {
        let css = "@font-face { font-family: 'Domine'; src: url(https://fonts.gstatic.com/s/domine/v10/a.eot); }";
        let fonts = parse_css(css).unwrap();
        assert_eq!(fonts.fonts()[0].format, "eot");
    }

    #[test]
    fn unknown_format_passes_through() {
        let css = "@font-face { font-family: X; src: url('x.otf') format(\"opentype\"); }";
        let parsed = parse_css(css).unwrap();
        let face = &parsed.fonts()[0];
        assert_eq!(face.format, "opentype");
        assert_eq!(face.url_str(), "x.otf");
    }

    #[test]
    fn escaped_family_is_decoded() {
        let css = r"@font-face { font-family: 'Open\20 Sans'; src: url(a.woff) format('woff'); }";
        assert_eq!(parse_css(css).unwrap().fonts()[0].family, "Open Sans");
    }

    #[test]
    fn unquoted_family_words_are_joined() {
        let css = "@font-face{font-family:Open Sans;src:url(a.woff) format('woff')}";
        // no ';' after the last declaration
        assert!(matches!(parse_css(css), Err(ParseError::UnexpectedEnd { .. })));

        let css = "@font-face{font-family:Open Sans;src:url(a.woff) format('woff');}";
        assert_eq!(parse_css(css).unwrap().fonts()[0].family, "Open Sans");
    }

    #[test]
    fn non_numeric_weight_fails() {
        let err = parse_css("@font-face { font-weight: bold; }").unwrap_err();
        assert!(matches!(err, ParseError::NumericConversion { ref value, .. } if value == "bold"));
    }

    #[test]
    fn fractional_weight_fails() {
        let err = parse_css("@font-face { font-weight: 400.5; }").unwrap_err();
        assert!(matches!(err, ParseError::NumericConversion { .. }));
    }

    #[test]
    fn string_weight_is_grammar_error() {
        let err = parse_css("@font-face { font-weight: '400'; }").unwrap_err();
        assert!(matches!(err, ParseError::Grammar { expected: "<number>", .. }));
    }

    #[test]
    fn block_closed_mid_declaration() {
        let err = parse_css(r#"@font-face { font-family: "X" }"#).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEnd { .. }));
    }

    #[test]
    fn input_ends_inside_block() {
        let err = parse_css("@font-face { font-family: 'X'; src: url(a.woff) format('woff');").unwrap_err();
        match err {
            ParseError::UnexpectedEnd { after } => assert!(after.starts_with("Semicolon at 1:"), "{after}"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn missing_open_brace() {
        let err = parse_css("@font-face font-family").unwrap_err();
        match err {
            ParseError::Grammar { expected, after, .. } => {
                assert_eq!(expected, "'{'");
                assert!(after.contains("font-face"));
            }
            other => panic!("unexpected error {other:?}"),
        }

        let err = parse_css("@font-face").unwrap_err();
        match err {
            ParseError::Grammar { expected, found, after } => {
                assert_eq!(expected, "'{'");
                assert_eq!(found, "end of input");
                assert!(after.starts_with("AtKeyword(\"font-face\")"), "{after}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn missing_colon_quotes_last_token() {
        let err = parse_css("@font-face { font-style italic; }").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("expected ':' after Ident(\"font-style\") at 1:14"), "{message}");
    }

    #[test]
    fn src_requires_url() {
        let err = parse_css("@font-face { src: local('Domine'); }").unwrap_err();
        assert!(matches!(err, ParseError::Grammar { expected: "<url>", .. }));
    }

    #[test]
    fn empty_url_is_rejected() {
        for css in ["@font-face { src: url(); }", "@font-face { src: url('') format('woff'); }"] {
            let err = parse_css(css).unwrap_err();
            assert!(matches!(err, ParseError::Grammar { expected: "non-empty <url>", .. }), "{css}: {err}");
        }
    }

    #[test]
    fn src_rejects_other_functions() {
        let err = parse_css("@font-face { src: url(a.woff) tech('x'); }").unwrap_err();
        assert!(matches!(err, ParseError::Grammar { expected: "';' or format(", .. }));
    }

    #[test]
    fn format_takes_one_string() {
        let err = parse_css("@font-face { src: url(a.woff) format('woff' 'x'); }").unwrap_err();
        assert!(matches!(err, ParseError::Grammar { expected: "')'", .. }));
    }

    #[test]
    fn invalid_url_fails() {
        let err = parse_css("@font-face { src: url(http://[::1) format('woff'); }").unwrap_err();
        assert!(matches!(err, ParseError::UrlParse { ref url, .. } if url == "http://[::1"));
    }

    #[test]
    fn block_without_src_fails() {
        let err = parse_css("@font-face { font-family: 'Domine'; }").unwrap_err();
        assert!(matches!(err, ParseError::MissingSource { ref family } if family == "Domine"));
    }

    #[test]
    fn unknown_property_is_skipped() {
        let css = "@font-face { font-stretch: 75% 125%; src: url(a.woff2) format('woff2'); font-display: swap; }";
        let fonts = parse_css(css).unwrap();
        assert_eq!(fonts.fonts()[0].format, "woff2");
    }

    #[test]
    fn unknown_property_without_terminator() {
        let err = parse_css("@font-face { font-display: swap }").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEnd { .. }));
    }

    #[test]
    fn stray_token_in_block() {
        let err = parse_css("@font-face { 400; }").unwrap_err();
        assert!(matches!(err, ParseError::Grammar { expected: "property name or '}'", .. }));
    }

    #[test]
    fn unicode_range_ended_by_brace() {
        let css = "@font-face { src: url(a.woff) format('woff'); unicode-range: U+0000-00FF, U+0131 }";
        let fonts = parse_css(css).unwrap();
        assert_eq!(fonts.fonts()[0].unicode_range, vec!["U+0000-00FF", "U+0131"]);
    }

    #[test]
    fn unicode_range_wildcards_keep_source_text() {
        let css = "@font-face { src: url(a.woff) format('woff'); unicode-range: U+4??, u+0025-00ff; }";
        let fonts = parse_css(css).unwrap();
        assert_eq!(fonts.fonts()[0].unicode_range, vec!["U+4??", "u+0025-00ff"]);
    }

    #[test]
    fn unterminated_string_is_end_of_input() {
        let err = parse_css("@font-face { font-family: 'Domine").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEnd { .. }));
    }

    #[test]
    fn broken_string_is_end_of_input() {
        let err = parse_css("@font-face { font-family: 'Domine\n; src: url(a.woff); }").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEnd { .. }));
    }
}
