//! Character sets and scanning primitives for the Tin lexer.
//!
//! The scanner is driven entirely by three fixed character sets:
//! whitespace to skip, delimiters that terminate a lexeme, and prefix
//! characters that may precede a lexeme but never continue one. All
//! set members are ASCII, so the byte lengths returned by the scanning
//! primitives always fall on UTF-8 character boundaries.

/// Whitespace characters the scanner skips between lexemes.
pub const WHITESPACE: &str = " \t\r\n";

/// Characters that terminate a lexeme.
///
/// A delimiter is never absorbed into a longer lexeme except through an
/// explicit lookahead rule (`<<`). The set contains all whitespace plus
/// the single-character punctuation and operator starters.
pub const DELIMITERS: &str = " \t\r\n,():;{}=<>*";

/// Characters that may come directly before a lexeme but not after it.
pub const PREFIXES: &str = "()'`";

/// Returns the byte length of the longest prefix of `text` consisting
/// only of characters in `set`.
///
/// # Arguments
///
/// * `text` - The text to scan
/// * `set` - The set of characters to span across
///
/// # Example
///
/// ```
/// use tinc_lex::charset::{span_within, WHITESPACE};
///
/// assert_eq!(span_within("   if", WHITESPACE), 3);
/// assert_eq!(span_within("if", WHITESPACE), 0);
/// ```
pub fn span_within(text: &str, set: &str) -> usize {
    text.bytes()
        .take_while(|b| set.as_bytes().contains(b))
        .count()
}

/// Returns the byte length of the longest prefix of `text` containing
/// no character from `set`.
///
/// # Arguments
///
/// * `text` - The text to scan
/// * `set` - The set of characters that stop the scan
///
/// # Example
///
/// ```
/// use tinc_lex::charset::{span_until, DELIMITERS};
///
/// assert_eq!(span_until("foo(bar)", DELIMITERS), 3);
/// assert_eq!(span_until("(foo", DELIMITERS), 0);
/// ```
pub fn span_until(text: &str, set: &str) -> usize {
    text.bytes()
        .take_while(|b| !set.as_bytes().contains(b))
        .count()
}

/// Checks whether `text` is a well-formed identifier lexeme.
///
/// A lexeme qualifies when it is non-empty and contains no delimiter
/// character.
///
/// # Example
///
/// ```
/// use tinc_lex::charset::is_valid_ident;
///
/// assert!(is_valid_ident("counter"));
/// assert!(!is_valid_ident("a,b"));
/// assert!(!is_valid_ident(""));
/// ```
pub fn is_valid_ident(text: &str) -> bool {
    !text.is_empty() && span_until(text, DELIMITERS) == text.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_within_all_whitespace() {
        assert_eq!(span_within(" \t\r\n", WHITESPACE), 4);
    }

    #[test]
    fn test_span_within_empty() {
        assert_eq!(span_within("", WHITESPACE), 0);
    }

    #[test]
    fn test_span_within_stops_at_first_mismatch() {
        assert_eq!(span_within("  x  ", WHITESPACE), 2);
    }

    #[test]
    fn test_span_within_does_not_cross_delimiters() {
        // Non-whitespace delimiters stop the whitespace skip.
        assert_eq!(span_within("  ,  ", WHITESPACE), 2);
    }

    #[test]
    fn test_span_until_empty() {
        assert_eq!(span_until("", DELIMITERS), 0);
    }

    #[test]
    fn test_span_until_no_delimiter() {
        assert_eq!(span_until("abc123", DELIMITERS), 6);
    }

    #[test]
    fn test_span_until_leading_delimiter() {
        assert_eq!(span_until("=x", DELIMITERS), 0);
    }

    #[test]
    fn test_span_until_utf8_lexeme() {
        // Multi-byte characters are never delimiters; the returned
        // byte length still lands on a character boundary.
        let text = "αβ(";
        let len = span_until(text, DELIMITERS);
        assert_eq!(&text[..len], "αβ");
    }

    #[test]
    fn test_whitespace_subset_of_delimiters() {
        for b in WHITESPACE.bytes() {
            assert!(DELIMITERS.as_bytes().contains(&b));
        }
    }

    #[test]
    fn test_valid_ident() {
        assert!(is_valid_ident("x"));
        assert!(is_valid_ident("long_name_42"));
        assert!(!is_valid_ident("a b"));
        assert!(!is_valid_ident("f(x"));
        assert!(!is_valid_ident(""));
    }
}
