use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_expr,
    lookups::BindingPower,
    parser::Parser,
    types::parse_type,
};

/// A declaration (`var`/`let`) or, failing that, a statement.
pub fn parse_declaration(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    let decl_fn = parser
        .get_decl_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match decl_fn {
        Some(decl_fn) => decl_fn(parser),
        None => parse_stmt(parser),
    }
}

pub fn parse_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    parser.enter_nesting()?;
    let result = parse_stmt_body(parser);
    parser.leave_nesting(1);

    result
}

fn parse_stmt_body(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    let stmt_fn = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match stmt_fn {
        Some(stmt_fn) => stmt_fn(parser),
        None => parse_expression_stmt(parser),
    }
}

pub fn parse_expression_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    let line = parser.get_line();
    let expression = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::expression(expression, line))
}

/// `var name type (= initializer)?;` or `let name = initializer;`
///
/// `let` never takes a type; its type comes from the initializer.
pub fn parse_var_decl_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    let start_token = parser.advance();
    let is_inferred = start_token.kind == TokenKind::Let;

    let identifier_error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: describe_current(parser),
            message: "Expected variable name in declaration".to_string(),
        },
        parser.get_line(),
    );
    let identifier_token = parser.expect_error(TokenKind::Identifier, Some(identifier_error))?;
    let identifier = identifier_token.lexeme.to_string();

    let explicit_type = if is_inferred {
        None
    } else {
        Some(parse_type(parser)?)
    };

    let assigned_value = if parser.match_token(TokenKind::Assignment) {
        Some(parse_initializer(parser)?)
    } else {
        None
    };

    if is_inferred && assigned_value.is_none() {
        return Err(Error::new(
            ErrorImpl::UninitializedLet { variable: identifier },
            identifier_token.line,
        ));
    }

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::var_decl(identifier, explicit_type, assigned_value, start_token.line))
}

/// An expression, or a braced non-empty list of initializers.
pub fn parse_initializer(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    parser.enter_nesting()?;
    let result = parse_initializer_list(parser);
    parser.leave_nesting(1);

    result
}

fn parse_initializer_list(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    if parser.current_token_kind() != TokenKind::OpenCurly {
        return parse_expr(parser, BindingPower::Default);
    }

    let line = parser.advance().line;
    let mut elements = vec![parse_initializer(parser)?];

    while parser.match_token(TokenKind::Comma) {
        elements.push(parse_initializer(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Expr::initializer(elements, line))
}

pub fn parse_if_stmt(parser: &mut Parser<'_>) -> Result<Stmt, Error> {
    let line = parser.expect(TokenKind::If)?.line;
    let condition = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Then)?;
    let then_body = parse_stmt(parser)?;

    let else_body = if parser.match_token(TokenKind::Else) {
        Some(parse_stmt(parser)?)
    } else {
        None
    };

    Ok(Stmt::if_stmt(condition, then_body, else_body, line))
}

fn describe_current(parser: &Parser<'_>) -> String {
    let token = parser.current_token();
    if token.kind == TokenKind::EOF {
        String::from("EOF")
    } else {
        token.lexeme.to_string()
    }
}
