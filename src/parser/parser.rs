//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser pulls tokens from the lexer on demand, keeping one token of
//! lookahead (`current`) plus the last consumed token (`previous`).
//!
//! It maintains lookup tables for:
//! - Declaration and statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix/postfix expressions
//! - Binding powers for operator precedence
//! - Type parsing handlers

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_declaration,
    types::{create_token_type_lookups, TypeLEDHandler, TypeLEDLookup, TypeNUDHandler, TypeNUDLookup},
};

/// Deepest nesting of statements, initializers and expression operators
/// the parser accepts before giving up with `NestingTooDeep`.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser<'src> {
    /// Token source
    lexer: Lexer<'src>,
    /// One token of lookahead
    current: Token<'src>,
    /// The most recently consumed token
    previous: Token<'src>,
    /// Handlers for tokens that start a declaration (`var`, `let`)
    decl_lookup: StmtLookup<'src>,
    /// Handlers for tokens that start a statement (`if`)
    stmt_lookup: StmtLookup<'src>,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup<'src>,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup<'src>,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Lookup table for type null denotation handlers
    type_nud_lookup: TypeNUDLookup<'src>,
    /// Lookup table for type suffix handlers
    type_led_lookup: TypeLEDLookup<'src>,
    /// Current nesting depth, bounded by `MAX_NESTING_DEPTH`
    depth: usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` and primes the lookahead token.
    ///
    /// The lookup tables start empty; `parse` fills them.
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();

        Parser {
            lexer,
            current,
            previous: current,
            decl_lookup: HashMap::new(),
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            type_nud_lookup: HashMap::new(),
            type_led_lookup: HashMap::new(),
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token<'src> {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Advances to the next token and returns the previous one.
    ///
    /// The lexer is never pulled past EOF or an unrecognised character, so
    /// the parser keeps seeing that token until it reports it.
    pub fn advance(&mut self) -> Token<'src> {
        self.previous = self.current;

        if !matches!(self.current.kind, TokenKind::EOF | TokenKind::Error) {
            self.current = self.lexer.next_token();
        }

        self.previous
    }

    /// Consumes the current token if it has the given kind.
    pub fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.current.kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// Returns the consumed token on success.
    pub fn expect_error(&mut self, expected_kind: TokenKind, error: Option<Error>) -> Result<Token<'src>, Error> {
        if self.current.kind != expected_kind {
            Err(error.unwrap_or_else(|| self.unexpected_token_error()))
        } else {
            Ok(self.advance())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token<'src>, Error> {
        self.expect_error(expected_kind, None)
    }

    /// The error for "the current token does not belong here".
    pub fn unexpected_token_error(&self) -> Error {
        let token = &self.current;
        match token.kind {
            TokenKind::Error => Error::new(
                ErrorImpl::UnrecognisedToken {
                    token: token.lexeme.to_string(),
                },
                token.line,
            ),
            TokenKind::EOF => Error::new(
                ErrorImpl::UnexpectedToken {
                    token: String::from("EOF"),
                },
                token.line,
            ),
            _ => Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.lexeme.to_string(),
                },
                token.line,
            ),
        }
    }

    /// Enters one more nesting level, failing once the limit is reached.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.current.line,
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self, levels: usize) {
        self.depth = self.depth.saturating_sub(levels);
    }

    /// Returns true while the current token is not EOF.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::EOF
    }

    /// Returns the current source line.
    pub fn get_line(&self) -> u32 {
        self.current.line
    }

    pub fn get_decl_lookup(&self) -> &StmtLookup<'src> {
        &self.decl_lookup
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup<'src> {
        &self.stmt_lookup
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup<'src> {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup<'src> {
        &self.led_lookup
    }

    pub fn get_type_nud_lookup(&self) -> &TypeNUDLookup<'src> {
        &self.type_nud_lookup
    }

    pub fn get_type_led_lookup(&self) -> &TypeLEDLookup<'src> {
        &self.type_led_lookup
    }

    /// Binding power of the current token; `Default` if it is not an operator.
    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.current.kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Registers a left denotation (infix/postfix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler<'src>) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<'src>) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a declaration handler for a token.
    pub fn decl(&mut self, kind: TokenKind, decl_fn: StmtHandler<'src>) {
        self.decl_lookup.insert(kind, decl_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler<'src>) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a type null denotation handler.
    pub fn type_nud(&mut self, kind: TokenKind, nud_fn: TypeNUDHandler<'src>) {
        self.type_nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a type suffix handler.
    pub fn type_led(&mut self, kind: TokenKind, led_fn: TypeLEDHandler<'src>) {
        self.type_led_lookup.insert(kind, led_fn);
    }
}

/// Parses a source buffer into a Program.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes all lookup tables, and parses declarations until EOF.
///
/// Parsing stops at the first structural error; no partial program is
/// returned.
pub fn parse(source: &str) -> Result<Program, Error> {
    let mut parser = Parser::new(source);
    create_token_lookups(&mut parser);
    create_token_type_lookups(&mut parser);

    let mut body = vec![];

    while parser.has_tokens() {
        body.push(parse_declaration(&mut parser)?);
    }

    debug!(declarations = body.len(), lines = parser.get_line(), "parsed program");

    Ok(Program { body })
}
