use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryOperator, PrefixOperator},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, types::parse_type};

/// Parses an expression whose operators all bind tighter than `bp`.
///
/// Every call and every operator it applies counts as a nesting level
/// until the call returns.
pub fn parse_expr(parser: &mut Parser<'_>, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter_nesting()?;
    let mut levels = 1;
    let result = parse_expr_levels(parser, bp, &mut levels);
    parser.leave_nesting(levels);

    result
}

fn parse_expr_levels(parser: &mut Parser<'_>, bp: BindingPower, levels: &mut usize) -> Result<Expr, Error> {
    let nud_fn = parser
        .get_nud_lookup()
        .get(&parser.current_token_kind())
        .copied();

    let nud_fn = match nud_fn {
        Some(nud_fn) => nud_fn,
        None => return Err(unknown_expression(parser)),
    };

    let mut left = nud_fn(parser)?;

    while parser.current_binding_power() > bp {
        let operator_bp = parser.current_binding_power();
        let led_fn = match parser.get_led_lookup().get(&parser.current_token_kind()).copied() {
            Some(led_fn) => led_fn,
            None => break,
        };

        parser.enter_nesting()?;
        *levels += 1;
        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

fn unknown_expression(parser: &Parser<'_>) -> Error {
    let token = parser.current_token();
    match token.kind {
        TokenKind::Error => parser.unexpected_token_error(),
        TokenKind::EOF => Error::new(
            ErrorImpl::UnknownExpression {
                token: String::from("EOF"),
            },
            token.line,
        ),
        _ => Error::new(
            ErrorImpl::UnknownExpression {
                token: token.lexeme.to_string(),
            },
            token.line,
        ),
    }
}

pub fn parse_primary_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let token = parser.advance();

    match token.kind {
        TokenKind::IntegerLiteral => {
            let value = token.lexeme.parse::<i64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.lexeme.to_string(),
                    },
                    token.line,
                )
            })?;
            Ok(Expr::integer(value, token.line))
        }
        TokenKind::FloatingLiteral => {
            let value = token.lexeme.parse::<f64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.lexeme.to_string(),
                    },
                    token.line,
                )
            })?;
            Ok(Expr::float(value, token.line))
        }
        TokenKind::True => Ok(Expr::boolean(true, token.line)),
        TokenKind::False => Ok(Expr::boolean(false, token.line)),
        TokenKind::Identifier => Ok(Expr::symbol(token.lexeme, token.line)),
        _ => Err(Error::new(
            ErrorImpl::UnknownExpression {
                token: token.lexeme.to_string(),
            },
            token.line,
        )),
    }
}

/// `( expression )` yields the inner node itself, so `(a) = 1` is still an
/// assignment to a variable.
pub fn parse_grouping_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_prefix_expr(parser: &mut Parser<'_>) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let operator = match PrefixOperator::from_token_kind(operator_token.kind) {
        Some(operator) => operator,
        None => return Err(unknown_expression(parser)),
    };

    let right_expr = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::prefix(operator, right_expr, operator_token.line))
}

pub fn parse_binary_expr(parser: &mut Parser<'_>, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let operator = match BinaryOperator::from_token_kind(operator_token.kind) {
        Some(operator) => operator,
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: operator_token.lexeme.to_string(),
                },
                operator_token.line,
            ))
        }
    };

    let right = parse_expr(parser, bp)?;
    let line = left.get_line();

    Ok(Expr::binary(operator, left, right, line))
}

/// The left side is parsed as an ordinary expression first; it is only
/// validated as an lvalue once `=` has been seen. The right side is parsed
/// at the lowest binding power, making `=` right-associative.
pub fn parse_assignment_expr(parser: &mut Parser<'_>, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.expect(TokenKind::Assignment)?;

    if !left.is_lvalue() {
        return Err(Error::new(ErrorImpl::InvalidAssignmentTarget, parser.get_line()));
    }

    let value = parse_expr(parser, BindingPower::Default)?;
    let line = left.get_line();

    Ok(Expr::assignment(left, value, line))
}

pub fn parse_cast_expr(parser: &mut Parser<'_>, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.expect(TokenKind::As)?;
    let target = parse_type(parser)?;
    let line = left.get_line();

    Ok(Expr::cast(left, target, line))
}

pub fn parse_subscript_expr(parser: &mut Parser<'_>, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenBracket)?;
    let index = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseBracket)?;
    let line = left.get_line();

    Ok(Expr::subscript(left, index, line))
}
