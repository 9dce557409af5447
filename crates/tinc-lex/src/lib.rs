//! tinc-lex - Lexical Analyzer for the Tin Programming Language
//!
//! This crate provides the lexer (tokenizer) for Tin. It transforms
//! source text into a stream of classified tokens that can be consumed
//! by the parser.
//!
//! # Overview
//!
//! Scanning is delimiter-driven: a lexeme is the longest run of
//! characters up to the next delimiter, a delimiter standing alone is
//! its own one-character lexeme, and `<<` is recognized by explicit
//! lookahead before the delimiter rules apply. Classification then
//! maps each lexeme to a [`TokenKind`] by a fixed priority order.
//!
//! # Example Usage
//!
//! ```
//! use tinc_lex::{tokenize, Scanner, TokenKind};
//!
//! let tokens = tokenize("if (x < 10) return x + 1;").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::If);
//!
//! // Or get tokens one at a time
//! let mut scanner = Scanner::new("x << 2");
//! let first = scanner.next_token().unwrap().unwrap();
//! assert_eq!(first.text, "x");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token types and lexeme classification
//! - [`scanner`] - Scanner and the token stream driver
//! - [`cursor`] - Byte cursor for source traversal
//! - [`charset`] - Character sets and scanning primitives
//!
//! # Token Categories
//!
//! - **Keywords**: `if`, `else`, `while`, `for`, `return`
//! - **Literals**: integers (`42`, `-7`) and floats (`3.14`)
//! - **Operators**: `+`, `-`, `*`, `/`, `<`, `<<`
//! - **Punctuation**: `( ) { } , ; :` and assignment `=`
//! - **Identifiers**: everything else
//! - **EOF**: end of input marker

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod charset;
pub mod cursor;
pub mod scanner;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use scanner::{tokenize, Scanner};
pub use token::{classify, keyword_from_ident, Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to collect all tokens from source.
    fn lex_all(source: &str) -> Vec<Token> {
        tokenize(source).expect("scan failed")
    }

    #[test]
    fn test_condition_and_return() {
        let tokens = lex_all("if (limit < 100) return limit + 1;");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::If,
                TokenKind::LParen,
                TokenKind::Ident,
                TokenKind::Lt,
                TokenKind::Int,
                TokenKind::RParen,
                TokenKind::Return,
                TokenKind::Ident,
                TokenKind::Plus,
                TokenKind::Int,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_loop_program() {
        let source = "for (i = 0; i < 8; i = i + 1) { total = total * 2; }";
        let tokens = lex_all(source);

        assert!(tokens.contains(&Token::new(TokenKind::For, "for")));
        assert!(tokens.contains(&Token::new(TokenKind::Ident, "total")));
        assert!(tokens.contains(&Token::new(TokenKind::Star, "*")));
        assert!(tokens.contains(&Token::new(TokenKind::LBrace, "{")));
    }

    #[test]
    fn test_else_branch() {
        let tokens = lex_all("if (a < b) return a; else return b;");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert!(kinds.contains(&TokenKind::Else));
        assert_eq!(kinds.iter().filter(|k| **k == TokenKind::Return).count(), 2);
    }

    #[test]
    fn test_shift_expression() {
        let tokens = lex_all("mask = base << 4;");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Ident,
                TokenKind::Eq,
                TokenKind::Ident,
                TokenKind::Shl,
                TokenKind::Int,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_float_literals() {
        let tokens = lex_all("pi = 3.14;");
        assert_eq!(tokens[2].kind, TokenKind::Float);
        assert_eq!(tokens[2].text, "3.14");
    }

    #[test]
    fn test_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        assert!(lex_all("   \n\t  \n  ").is_empty());
    }

    #[test]
    fn test_texts_preserve_source_characters() {
        let source = "f(x, 2.5)";
        let joined: String = lex_all(source).into_iter().map(|t| t.text).collect();
        assert_eq!(joined, "f(x,2.5)");
    }
}
