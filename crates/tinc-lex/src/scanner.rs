//! The scanner: one lexeme per step.
//!
//! Each scan step skips leading whitespace, finds the boundary of the
//! next lexeme with the delimiter rules, and classifies it. The `<<`
//! lookahead runs before generic delimiter scanning because `<` is
//! itself a delimiter and would otherwise cut the lexeme short after
//! one character.

use tinc_util::Result;

use crate::charset::{span_until, span_within, DELIMITERS, WHITESPACE};
use crate::cursor::Cursor;
use crate::token::Token;

/// Scanner for Tin source text.
///
/// The scanner borrows the source buffer read-only and produces one
/// owned [`Token`] per step. It guarantees forward progress: every
/// produced token advances the cursor by at least one byte, so a scan
/// over any finite input terminates.
///
/// # Example
///
/// ```
/// use tinc_lex::{Scanner, TokenKind};
///
/// let scanner = Scanner::new("x << 2");
/// let kinds: Vec<_> = scanner
///     .map(|t| t.unwrap().kind)
///     .collect();
/// assert_eq!(kinds, [TokenKind::Ident, TokenKind::Shl, TokenKind::Int]);
/// ```
pub struct Scanner<'a> {
    /// Byte cursor over the source buffer.
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner at the start of the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Produces the next token, or `Ok(None)` at end of input.
    ///
    /// Exactly one of {token, end-of-input, error} is returned per
    /// step, never a combination. Scanning itself currently has no
    /// failure mode (unrecognized text classifies as an identifier),
    /// but the error channel is part of the contract so the stream
    /// driver stops at the first failing step.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        let skipped = span_within(self.cursor.remaining(), WHITESPACE);
        self.cursor.advance_bytes(skipped);

        if self.cursor.is_at_end() {
            return Ok(None);
        }

        let rest = self.cursor.remaining();

        // `<<` is the only multi-character lexeme built from delimiter
        // characters; it must be recognized before the delimiter scan.
        let len = if rest.as_bytes().starts_with(b"<<") {
            2
        } else {
            match span_until(rest, DELIMITERS) {
                // The current character is itself a delimiter: the
                // lexeme is exactly that one character.
                0 => 1,
                n => n,
            }
        };

        let lexeme = &rest[..len];
        self.cursor.advance_bytes(len);

        Ok(Some(Token::from_lexeme(lexeme)))
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Consumes a whole source buffer and returns its tokens in order.
///
/// Stops at end of input; the first error short-circuits the loop and
/// no further tokens are produced. An empty or all-whitespace source
/// yields `Ok` with an empty vector.
///
/// # Example
///
/// ```
/// use tinc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("return 0;").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::Return, TokenKind::Int, TokenKind::Semicolon]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Scanner::new(source).collect()
}
