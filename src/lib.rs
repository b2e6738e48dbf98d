#![allow(clippy::module_inception)]

use std::path::Path;

use tracing::debug;

use crate::{
    errors::errors::{Error, Severity},
    parser::parser::parse,
    type_checker::{
        type_checker::{type_check, TypeCheckerOptions},
        typed_ast::TypedProgram,
    },
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// Result of running the whole front end over a source buffer that parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    /// Top-level items that passed their check.
    pub typed_program: TypedProgram,
    /// Type errors in source order.
    pub errors: Vec<Error>,
}

impl CheckOutcome {
    pub fn succeeded(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Lexes, parses and type checks `source`.
///
/// A structural error is returned as `Err`; type errors are collected in
/// the outcome according to the options' error policy.
pub fn check_source(source: &str, options: TypeCheckerOptions) -> Result<CheckOutcome, Error> {
    let program = parse(source)?;
    let (type_checker, errors) = type_check(&program, options);

    debug!(succeeded = errors.is_empty(), "front end finished");

    Ok(CheckOutcome {
        typed_program: type_checker.typed_ast,
        errors,
    })
}

/// Returns the text of a 1-based line, without its line terminator.
pub fn get_source_line(source: &str, line: u32) -> Option<&str> {
    let index = (line as usize).checked_sub(1)?;
    source
        .split('\n')
        .nth(index)
        .map(|text| text.trim_end_matches('\r'))
}

/// Formats an error together with the source line it points at.
///
/// ```text
/// [Ln: 2] unexpected token: ";"
/// -> program.tf
///   |
/// 2 | let x = ;
///   |
/// ```
pub fn render_error(error: &Error, source: &str, file: &Path) -> String {
    let line_string = error.get_line().to_string();
    let padding = line_string.len() + 2;

    let mut rendered = format!("{}\n", error);

    if error.severity() == Severity::Structural {
        rendered.push_str(&format!("-> {}\n", file.as_os_str().to_string_lossy()));

        if let Some(line_text) = get_source_line(source, error.get_line()) {
            rendered.push_str(&format!("{:>padding$}\n", "|"));
            rendered.push_str(&format!("{} | {}\n", line_string, line_text.trim()));
            rendered.push_str(&format!("{:>padding$}\n", "|"));
        }
    }

    rendered
}

pub fn display_error(error: &Error, source: &str, file: &Path) {
    eprint!("{}", render_error(error, source, file));
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_get_source_line() {
        let source = "let a = 1;\r\nlet b = 2;\n\nlet c = 3;";

        assert_eq!(get_source_line(source, 1), Some("let a = 1;"));
        assert_eq!(get_source_line(source, 2), Some("let b = 2;"));
        assert_eq!(get_source_line(source, 3), Some(""));
        assert_eq!(get_source_line(source, 4), Some("let c = 3;"));
        assert_eq!(get_source_line(source, 5), None);
        assert_eq!(get_source_line(source, 0), None);
    }

    #[test]
    fn test_render_structural_error() {
        let source = "let a = 1;\n  let b = ;";
        let error = check_source(source, TypeCheckerOptions::default()).unwrap_err();
        let rendered = render_error(&error, source, &PathBuf::from("program.tf"));

        assert_eq!(
            rendered,
            "[Ln: 2] unknown expression at \";\"\n-> program.tf\n  |\n2 | let b = ;\n  |\n"
        );
    }

    #[test]
    fn test_render_type_error() {
        let source = "if 1 then 2;";
        let outcome = check_source(source, TypeCheckerOptions::default()).unwrap();
        let rendered = render_error(&outcome.errors[0], source, &PathBuf::from("program.tf"));

        assert_eq!(
            rendered,
            "typechecker: expected a `bool` condition, found `integer` (line 1)\n"
        );
    }

    #[test]
    fn test_check_source_outcome() {
        let outcome = check_source("let a = 1; a = 2;", TypeCheckerOptions::default()).unwrap();

        assert!(outcome.succeeded());
        assert_eq!(outcome.typed_program.len(), 2);
    }
}
