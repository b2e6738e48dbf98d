//! Type parsing implementation.
//!
//! A type is a base keyword (`float`, `integer`, `bool`) followed by any
//! number of `[INTEGER]` dimension suffixes. Like expression parsing, it
//! uses NUD handlers for the base and LED handlers for the suffixes.

use std::collections::HashMap;

use crate::{
    ast::types::Type,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler<'src> = fn(&mut Parser<'src>) -> Result<Type, Error>;

/// Type alias for type left denotation handler functions.
pub type TypeLEDHandler<'src> = fn(&mut Parser<'src>, Type) -> Result<Type, Error>;

/// Type alias for type NUD lookup table.
pub type TypeNUDLookup<'src> = HashMap<TokenKind, TypeNUDHandler<'src>>;

/// Type alias for type LED lookup table.
pub type TypeLEDLookup<'src> = HashMap<TokenKind, TypeLEDHandler<'src>>;

/// Initializes the type parsing lookup tables.
pub fn create_token_type_lookups(parser: &mut Parser<'_>) {
    parser.type_nud(TokenKind::Integer, parse_primitive_type);
    parser.type_nud(TokenKind::Float, parse_primitive_type);
    parser.type_nud(TokenKind::Bool, parse_primitive_type);
    parser.type_led(TokenKind::OpenBracket, parse_array_type);
}

pub fn parse_primitive_type(parser: &mut Parser<'_>) -> Result<Type, Error> {
    let token = parser.advance();

    match token.kind {
        TokenKind::Integer => Ok(Type::Int),
        TokenKind::Float => Ok(Type::Float),
        TokenKind::Bool => Ok(Type::Bool),
        _ => Err(Error::new(
            ErrorImpl::UnknownDataType {
                token: token.lexeme.to_string(),
            },
            token.line,
        )),
    }
}

/// Parses one `[INTEGER]` suffix.
///
/// Suffixes read left to right but nest right to left: each new dimension
/// goes innermost, so `integer[2][3]` is two arrays of three integers.
pub fn parse_array_type(parser: &mut Parser<'_>, left: Type) -> Result<Type, Error> {
    parser.expect(TokenKind::OpenBracket)?;
    let length_token = parser.expect(TokenKind::IntegerLiteral)?;
    let length = length_token.lexeme.parse::<usize>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: length_token.lexeme.to_string(),
            },
            length_token.line,
        )
    })?;
    parser.expect(TokenKind::CloseBracket)?;

    Ok(with_inner_dimension(left, length))
}

fn with_inner_dimension(ty: Type, length: usize) -> Type {
    match ty {
        Type::Array(array) => {
            let outer_length = array.length;
            Type::array_of(with_inner_dimension(*array.underlying, length), outer_length)
        }
        base => Type::array_of(base, length),
    }
}

pub fn parse_type(parser: &mut Parser<'_>) -> Result<Type, Error> {
    let nud_fn = parser
        .get_type_nud_lookup()
        .get(&parser.current_token_kind())
        .copied();

    let mut left = match nud_fn {
        Some(nud_fn) => nud_fn(parser)?,
        None => {
            let token = parser.current_token();
            return Err(match token.kind {
                TokenKind::Error => parser.unexpected_token_error(),
                TokenKind::EOF => Error::new(
                    ErrorImpl::UnknownDataType {
                        token: String::from("EOF"),
                    },
                    token.line,
                ),
                _ => Error::new(
                    ErrorImpl::UnknownDataType {
                        token: token.lexeme.to_string(),
                    },
                    token.line,
                ),
            });
        }
    };

    while let Some(led_fn) = parser
        .get_type_led_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        left = led_fn(parser, left)?;
    }

    Ok(left)
}
