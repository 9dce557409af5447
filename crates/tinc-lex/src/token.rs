//! Token type definitions and lexeme classification.
//!
//! A token pairs a [`TokenKind`] with an owned copy of the lexeme text,
//! so tokens stay valid after the source buffer is dropped.
//! Classification is a total function over the lexeme text: anything
//! not recognized as punctuation, operator, number, or keyword is an
//! identifier.

/// The kind of a token.
///
/// The enumeration is closed and carries stable `u8` discriminants;
/// the driver prints the discriminant next to each token, so the
/// declaration order is part of the output format and must not be
/// reordered.
///
/// Several kinds (`Char`, `Void`, `Str`, `Const`, and the compound
/// comparison/logic operators other than `Shl` and `Lt`) are reserved
/// for the grammar layer and are never produced by [`classify`].
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Integer literal, e.g. `42`.
    Int,
    /// Floating-point literal, e.g. `3.14`.
    Float,
    /// Character literal.
    Char,
    /// The `void` type.
    Void,
    /// String literal.
    Str,
    /// Identifier.
    Ident,
    /// The `const` qualifier.
    Const,
    /// Statement terminator `;` (also produced by `:`).
    Semicolon,
    /// `,`
    Comma,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// Assignment `=`.
    Eq,
    /// The `if` keyword.
    If,
    /// The `while` keyword.
    While,
    /// The `return` keyword.
    Return,
    /// The `else` keyword.
    Else,
    /// The `for` keyword.
    For,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// Left shift `<<`.
    Shl,
    /// Right shift `>>`.
    Shr,
    /// Logical and `&&`.
    AndAnd,
    /// Logical or `||`.
    OrOr,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    GtEq,
    /// `<=`
    LtEq,
    /// Equality `==`.
    EqEq,
    /// Inequality `!=`.
    NotEq,
    /// End of input sentinel.
    Eof,
}

/// A single token: its kind and an owned copy of its lexeme text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The classification of the lexeme.
    pub kind: TokenKind,

    /// The lexeme text, copied out of the source buffer.
    pub text: String,
}

impl Token {
    /// Creates a token from a kind and lexeme text.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Creates a token by classifying the given lexeme.
    ///
    /// # Example
    ///
    /// ```
    /// use tinc_lex::token::{Token, TokenKind};
    ///
    /// let token = Token::from_lexeme("while");
    /// assert_eq!(token.kind, TokenKind::While);
    /// assert_eq!(token.text, "while");
    /// ```
    pub fn from_lexeme(lexeme: &str) -> Self {
        Self::new(classify(lexeme), lexeme)
    }
}

/// Maps a reserved word to its keyword kind.
///
/// Returns `None` for anything that is not exactly a keyword; matching
/// is whole-lexeme, never prefix, so `ifx` and `forward` are plain
/// identifiers.
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    match text {
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        "while" => Some(TokenKind::While),
        "for" => Some(TokenKind::For),
        "return" => Some(TokenKind::Return),
        _ => None,
    }
}

/// Maps a single punctuation or operator character to its kind.
///
/// `;` and `:` both map to [`TokenKind::Semicolon`]: the statement
/// terminator accepts either spelling. `>` is deliberately absent;
/// it delimits lexemes but has no single-character classification, so
/// a lone `>` falls through to [`TokenKind::Ident`].
fn single_char_kind(byte: u8) -> Option<TokenKind> {
    match byte {
        b'(' => Some(TokenKind::LParen),
        b')' => Some(TokenKind::RParen),
        b'+' => Some(TokenKind::Plus),
        b'-' => Some(TokenKind::Minus),
        b'*' => Some(TokenKind::Star),
        b'/' => Some(TokenKind::Slash),
        b',' => Some(TokenKind::Comma),
        b':' | b';' => Some(TokenKind::Semicolon),
        b'=' => Some(TokenKind::Eq),
        b'<' => Some(TokenKind::Lt),
        b'{' => Some(TokenKind::LBrace),
        b'}' => Some(TokenKind::RBrace),
        _ => None,
    }
}

/// Checks whether the integer parse would consume the entire lexeme:
/// an optional sign followed by nothing but decimal digits. Magnitude
/// is irrelevant here: classification only asks whether the text
/// reads as an integer, not whether it fits a machine word.
fn is_integer_lexeme(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Classifies a lexeme into its token kind.
///
/// Never fails: unrecognized lexemes classify as [`TokenKind::Ident`].
/// The checks run in a fixed priority order because the rule sets
/// overlap: a lone `<` must become `Lt` before it could be mistaken
/// for the start of `<<`, and `42` must parse as an integer before the
/// floating-point parse gets a chance to accept it.
///
/// 1. single punctuation/operator characters;
/// 2. the two-character lexeme `<<`;
/// 3. full integer parse;
/// 4. full floating-point parse;
/// 5. exact keyword match;
/// 6. identifier.
///
/// Numeric and keyword checks compare the whole borrowed slice with no
/// intermediate copy, so lexeme length is unbounded.
///
/// # Example
///
/// ```
/// use tinc_lex::token::{classify, TokenKind};
///
/// assert_eq!(classify("<<"), TokenKind::Shl);
/// assert_eq!(classify("<"), TokenKind::Lt);
/// assert_eq!(classify("10"), TokenKind::Int);
/// assert_eq!(classify("count"), TokenKind::Ident);
/// ```
pub fn classify(lexeme: &str) -> TokenKind {
    if let [byte] = lexeme.as_bytes() {
        if let Some(kind) = single_char_kind(*byte) {
            return kind;
        }
    }

    if lexeme == "<<" {
        return TokenKind::Shl;
    }

    if is_integer_lexeme(lexeme) {
        return TokenKind::Int;
    }

    if lexeme.parse::<f64>().is_ok() {
        return TokenKind::Float;
    }

    keyword_from_ident(lexeme).unwrap_or(TokenKind::Ident)
}
