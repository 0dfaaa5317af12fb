//! Significant tokens on top of `cssparser`.
//!
//! `cssparser` already decodes escapes, strings, and `url(...)` forms, and
//! hides the contents of blocks and functions until they are entered with
//! `parse_nested_block`. This module only adds what the `@font-face` parser
//! needs for diagnostics: each token paired with where it starts.

use std::fmt;

use cssparser::{Parser, SourceLocation, Token};

/// A token and its source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Located<'i> {
    pub token: Token<'i>,
    pub location: SourceLocation,
}

impl Located<'_> {
    /// Whether the tokenizer gave up on this token (a string broken by a
    /// newline, or a malformed unquoted url).
    pub fn is_bad(&self) -> bool {
        matches!(self.token, Token::BadString(_) | Token::BadUrl(_))
    }
}

/// `Ident("font-style") at 3:3` (1-based line and column).
impl fmt::Display for Located<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} at {}:{}", self.token, self.location.line + 1, self.location.column)
    }
}

/// Token filter: yields tokens that are neither whitespace nor comments.
pub trait TokenFilter<'i> {
    /// `None` once the current block, function, or input is exhausted.
    fn next_significant(&mut self) -> Option<Located<'i>>;
}

impl<'i> TokenFilter<'i> for Parser<'i, '_> {
    fn next_significant(&mut self) -> Option<Located<'i>> {
        self.skip_whitespace();
        let location = self.current_source_location();
        let token = self.next().ok()?.clone();
        Some(Located { token, location })
    }
}

#[cfg(test)]
mod tests {
    use cssparser::ParserInput;

    use super::*;

    fn significant(css: &str) -> Vec<Token<'_>> {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        std::iter::from_fn(|| parser.next_significant()).map(|t| t.token).collect()
    }

    #[test]
    fn skips_whitespace_and_comments() {
        let tokens = significant("  /* latin */\n@font-face  {  }");
        assert_eq!(tokens, vec![Token::AtKeyword("font-face".into()), Token::CurlyBracketBlock]);
    }

    #[test]
    fn declaration_tokens() {
        let tokens = significant("src: url(a.woff2) format('woff2');");
        assert_eq!(
            tokens,
            vec![
                Token::Ident("src".into()),
                Token::Colon,
                Token::UnquotedUrl("a.woff2".into()),
                Token::Function("format".into()),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn string_escapes_are_decoded() {
        assert_eq!(significant(r"'Open\20 Sans'"), vec![Token::QuotedString("Open Sans".into())]);
    }

    #[test]
    fn block_contents_end_with_the_block() {
        let mut input = ParserInput::new("{ font-style: italic } next");
        let mut parser = Parser::new(&mut input);
        assert_eq!(parser.next_significant().map(|t| t.token), Some(Token::CurlyBracketBlock));

        let inner = parser
            .parse_nested_block(|block| {
                let tokens: Vec<_> = std::iter::from_fn(|| block.next_significant()).map(|t| t.token).collect();
                Ok::<_, cssparser::ParseError<'_, ()>>(tokens)
            })
            .unwrap();
        assert_eq!(inner, vec![Token::Ident("font-style".into()), Token::Colon, Token::Ident("italic".into())]);
        assert_eq!(parser.next_significant().map(|t| t.token), Some(Token::Ident("next".into())));
        assert_eq!(parser.next_significant(), None);
        assert_eq!(parser.next_significant(), None);
    }

    #[test]
    fn broken_string_is_bad() {
        let mut input = ParserInput::new("'Domine\n;");
        let mut parser = Parser::new(&mut input);
        assert!(parser.next_significant().unwrap().is_bad());
    }

    #[test]
    fn display_names_token_and_position() {
        let mut input = ParserInput::new("\n  font-style");
        let mut parser = Parser::new(&mut input);
        let tok = parser.next_significant().unwrap();
        assert_eq!(tok.location.line, 1);
        assert!(tok.to_string().starts_with("Ident(\"font-style\") at 2:"), "{tok}");
    }
}
