//! tinc-util - Core Utilities and Foundation Types
//!
//! Shared foundation for the tinc compiler crates. Today this is the
//! error taxonomy and the error-reporting collaborator; later phases
//! (parser, type checker) report through the same types.
//!
//! # Example
//!
//! ```
//! use tinc_util::{Error, ErrorKind, report};
//!
//! let err = Error::with_message(ErrorKind::InvalidArguments, "no input files");
//! report(&err);
//! ```

#![warn(missing_docs)]

pub mod error;

pub use error::{report, Error, ErrorKind, Result};
