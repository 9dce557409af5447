//! Core error types for the tinc compiler
//!
//! This module defines the error taxonomy shared by every compilation
//! phase. Errors are plain values propagated by return, never by global
//! state: a phase either produces its result or an [`Error`], and the
//! caller decides whether to report and stop.

use thiserror::Error;

/// The closed set of error categories known to the compiler.
///
/// The lexer only ever raises [`ErrorKind::InvalidArguments`];
/// the remaining kinds are reserved for the grammar and type-checking
/// phases but live in the shared taxonomy so every phase reports
/// through the same channel.
///
/// The `Display` text of each kind is the exact heading printed by
/// [`report`], so it is part of the user-visible output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A required input handle or argument was missing or malformed.
    #[error("Invalid arguments")]
    InvalidArguments,

    /// An operand had a type the operation cannot accept.
    #[error("Mismatched types")]
    TypeMismatch,

    /// A failure with no more specific category; the heading line is
    /// printed with no text after `ERROR: `.
    #[error("")]
    Generic,

    /// The input violates the language grammar.
    #[error("Invalid syntax")]
    Syntax,

    /// The construct is recognized but not implemented yet.
    #[error("TODO (not implemented)")]
    Unimplemented,
}

/// A categorized error with an optional descriptive message.
///
/// Success is expressed as `Result::Ok`, so there is no "no error"
/// variant to construct or compare against: an `Error` value always
/// means something went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// Which category of failure occurred.
    pub kind: ErrorKind,

    /// Human-readable detail, shown indented under the heading.
    pub message: Option<String>,
}

impl Error {
    /// Creates an error with no descriptive message.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// Creates an error carrying a descriptive message.
    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
        }
    }
}

/// Prints an error to stderr in the fixed reporting format.
///
/// The output is a heading line `ERROR: <kind>` followed, when a
/// message is present, by an indented continuation line:
///
/// ```text
/// ERROR: Invalid arguments
///      : Unknown option: --frobnicate
/// ```
pub fn report(error: &Error) {
    eprintln!("ERROR: {}", error.kind);
    if let Some(message) = &error.message {
        eprintln!("     : {}", message);
    }
}

/// Result type alias used by all compiler phases.
pub type Result<T> = std::result::Result<T, Error>;
