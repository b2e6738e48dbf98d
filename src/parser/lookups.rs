use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Precedence levels, lowest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Assignment,
    Relational,
    Additive,
    Multiplicative,
    Casting,
    Unary,
    Subscript,
    Primary,
}

pub type StmtHandler<'src> = fn(&mut Parser<'src>) -> Result<Stmt, Error>;
pub type NUDHandler<'src> = fn(&mut Parser<'src>) -> Result<Expr, Error>;
pub type LEDHandler<'src> = fn(&mut Parser<'src>, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser<'_>) {
    parser.led(TokenKind::Assignment, BindingPower::Assignment, parse_assignment_expr);

    // Relational
    parser.led(TokenKind::Less, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::LessEquals, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Greater, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::GreaterEquals, BindingPower::Relational, parse_binary_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);

    parser.led(TokenKind::As, BindingPower::Casting, parse_cast_expr);
    parser.led(TokenKind::OpenBracket, BindingPower::Subscript, parse_subscript_expr);

    // Literals and symbols
    parser.nud(TokenKind::IntegerLiteral, parse_primary_expr);
    parser.nud(TokenKind::FloatingLiteral, parse_primary_expr);
    parser.nud(TokenKind::True, parse_primary_expr);
    parser.nud(TokenKind::False, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::Plus, parse_prefix_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Declarations and statements
    parser.decl(TokenKind::Var, parse_var_decl_stmt);
    parser.decl(TokenKind::Let, parse_var_decl_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup<'src> = HashMap<TokenKind, StmtHandler<'src>>;
pub type NUDLookup<'src> = HashMap<TokenKind, NUDHandler<'src>>;
pub type LEDLookup<'src> = HashMap<TokenKind, LEDHandler<'src>>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
