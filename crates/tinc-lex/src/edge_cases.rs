//! Edge case tests for tinc-lex
