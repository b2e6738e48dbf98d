//! Error types and error handling for the front end.
//!
//! This module defines the error values shared by every stage:
//!
//! - An error structure carrying the source line
//! - Structural (lexer/parser) and type-checking error variants
//! - Severity classification and diagnostic formatting

pub mod errors;

#[cfg(test)]
mod tests;
