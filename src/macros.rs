//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed tokens
//!
//! These macros reduce boilerplate in the lexer pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$line` - The source line the token starts on
/// * `$lexeme` - The borrowed slice of the source
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntegerLiteral, 1, "42");
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $line:expr, $lexeme:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            line: $line,
            lexeme: $lexeme,
        }
    };
}

/// Creates a default lexer handler for patterns that always map to one kind.
///
/// Generates a handler function that turns the whole match into a token of
/// the given kind and advances the lexer past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {{
        fn handler<'src>(
            lexer: &mut $crate::lexer::lexer::Lexer<'src>,
            length: usize,
        ) -> Option<$crate::lexer::tokens::Token<'src>> {
            Some(lexer.make_token($kind, length))
        }
        handler
    }};
}
