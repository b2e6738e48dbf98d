//! Lexical analysis module.
//!
//! This module contains the lexer that turns source text into tokens for
//! the parser. It handles:
//!
//! - On-demand tokenization driven by an ordered regex pattern table
//! - Recognition of keywords, identifiers and numeric literals
//! - Line tracking for diagnostics
//! - `#` line comments and whitespace
//!
//! Characters the lexer cannot classify come back as `TokenKind::Error`
//! tokens; deciding what to do with them is left to the caller.

pub mod lexer;
pub mod tokens;
