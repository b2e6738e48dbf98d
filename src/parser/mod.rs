//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the lexer's token stream
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with operator precedence and handles:
//!
//! - Declarations (`var`, `let`) and statements (`if`, expression statements)
//! - Expressions (assignment, comparisons, arithmetic, casts, subscripts)
//! - Type annotations with array dimensions
//! - Braced initializer lists
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.
//! There is no error recovery: the first structural error ends parsing.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
