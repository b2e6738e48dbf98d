//! Type checking module.
//!
//! This module performs a single forward pass over the AST and produces a
//! typed AST while:
//!
//! - Resolving variable references through a flat symbol table
//! - Checking declarations, assignments and conditions
//! - Inferring the types of operators, casts, subscripts and initializers
//!
//! Type errors fail only the top-level item they occur in. The
//! `ErrorPolicy` decides whether checking continues with the next item.

pub mod symbol_table;
pub mod type_checker;
pub mod typed_ast;

#[cfg(test)]
mod tests;
