//! tinc-drv - Compiler Driver
//!
//! The driver wires the compilation phases together: it parses the
//! command line, loads each input file into memory, runs the lexer
//! over it, and prints the resulting token stream. Later phases hang
//! off the same loop as they land.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use tinc_lex::{Scanner, Token};
use tinc_util::{report, Error, ErrorKind, Result};

/// Configuration for the driver, parsed from the command line.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Source files to tokenize, in command-line order.
    pub input_files: Vec<PathBuf>,
    /// Echo file contents and phase progress.
    pub verbose: bool,
    /// `--help` was requested.
    pub help: bool,
    /// `--version` was requested.
    pub version: bool,
}

/// Parses command line arguments (everything after the program name).
///
/// Unknown options produce an [`ErrorKind::InvalidArguments`] error;
/// `--help` and `--version` short-circuit so trailing arguments are
/// not validated.
pub fn parse_args<I>(args: I) -> Result<Config>
where
    I: IntoIterator<Item = String>,
{
    let mut config = Config::default();

    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => {
                config.help = true;
                return Ok(config);
            }
            "--version" | "-V" => {
                config.version = true;
                return Ok(config);
            }
            "--verbose" | "-v" => config.verbose = true,
            _ if arg.starts_with('-') => {
                return Err(Error::with_message(
                    ErrorKind::InvalidArguments,
                    format!("Unknown option: {}", arg),
                ));
            }
            _ => config.input_files.push(PathBuf::from(arg)),
        }
    }

    Ok(config)
}

/// Prints the help message.
pub fn print_help() {
    println!("Tin Compiler v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: tinc [OPTIONS] <input files>");
    println!();
    println!("Options:");
    println!("  -h, --help     Print this help message");
    println!("  -V, --version  Print version information");
    println!("  -v, --verbose  Enable verbose output");
    println!();
    println!("Examples:");
    println!("  tinc program.tin     Tokenize program.tin");
    println!("  tinc -v program.tin  Tokenize with verbose output");
}

/// Prints the version line.
pub fn print_version() {
    println!("tinc {}", env!("CARGO_PKG_VERSION"));
}

/// Formats one token in the fixed output format: the lexeme text
/// right-justified in ten columns (truncated when longer) next to the
/// numeric discriminant of its kind.
pub fn format_token(token: &Token) -> String {
    format!("Token: {:>10.10} | Type: {}", token.text, token.kind as u8)
}

/// A compilation session over one parsed [`Config`].
pub struct Session {
    /// The driver configuration.
    pub config: Config,
}

impl Session {
    /// Creates a session from a configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Tokenizes every input file in order, printing each token.
    ///
    /// Stops at the first failing file; a lexical error is reported
    /// through the shared error reporter and nothing further is
    /// tokenized or printed.
    pub fn run(&self) -> anyhow::Result<()> {
        for path in &self.config.input_files {
            let source = fs::read_to_string(path)
                .with_context(|| format!("could not read {}", path.display()))?;

            if self.config.verbose {
                eprintln!("[verbose] Lexing: {}", path.display());
                println!("Contents of {}:", path.display());
                println!("---");
                println!("\"{}\"", source);
                println!("---");
            }

            scan_source(&source)?;
        }

        Ok(())
    }
}

/// Streams tokens from one source buffer to stdout.
fn scan_source(source: &str) -> anyhow::Result<()> {
    for token in Scanner::new(source) {
        match token {
            Ok(token) => println!("{}", format_token(&token)),
            Err(err) => {
                report(&err);
                bail!("aborting due to previous error");
            }
        }
    }
    Ok(())
}

/// Driver entry point: parse arguments, dispatch, run the session.
pub fn run() -> anyhow::Result<()> {
    let config = match parse_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            report(&err);
            bail!("run `tinc --help` for usage");
        }
    };

    if config.help {
        print_help();
        return Ok(());
    }

    if config.version {
        print_version();
        return Ok(());
    }

    if config.input_files.is_empty() {
        report(&Error::with_message(
            ErrorKind::InvalidArguments,
            "no input files",
        ));
        bail!("run `tinc --help` for usage");
    }

    Session::new(config).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinc_lex::TokenKind;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_empty() {
        let config = parse_args(args(&[])).unwrap();
        assert!(config.input_files.is_empty());
        assert!(!config.help);
        assert!(!config.verbose);
    }

    #[test]
    fn test_parse_args_files_in_order() {
        let config = parse_args(args(&["a.tin", "b.tin"])).unwrap();
        assert_eq!(config.input_files, [PathBuf::from("a.tin"), PathBuf::from("b.tin")]);
    }

    #[test]
    fn test_parse_args_verbose() {
        let config = parse_args(args(&["-v", "a.tin"])).unwrap();
        assert!(config.verbose);
        assert_eq!(config.input_files.len(), 1);
    }

    #[test]
    fn test_parse_args_help_short_circuits() {
        let config = parse_args(args(&["--help", "--bogus"])).unwrap();
        assert!(config.help);
    }

    #[test]
    fn test_parse_args_unknown_option() {
        let err = parse_args(args(&["--frobnicate"])).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArguments);
        assert!(err.message.unwrap().contains("--frobnicate"));
    }

    #[test]
    fn test_format_token_pads_to_ten_columns() {
        let token = Token::new(TokenKind::If, "if");
        assert_eq!(format_token(&token), "Token:         if | Type: 14");
    }

    #[test]
    fn test_format_token_truncates_long_text() {
        let token = Token::new(TokenKind::Ident, "a_very_long_name");
        assert_eq!(format_token(&token), "Token: a_very_lon | Type: 5");
    }
}
