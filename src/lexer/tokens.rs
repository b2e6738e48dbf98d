use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("var", TokenKind::Var);
        map.insert("let", TokenKind::Let);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("as", TokenKind::As);
        map.insert("float", TokenKind::Float);
        map.insert("integer", TokenKind::Integer);
        map.insert("bool", TokenKind::Bool);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Error,

    IntegerLiteral,
    FloatingLiteral,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Comma,
    Semicolon,

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Var,
    Let,
    True,
    False,
    If,
    Then,
    Else,
    As,
    Float,
    Integer,
    Bool,
}

impl TokenKind {
    pub fn is_reserved(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single lexeme. `lexeme` borrows straight from the source buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub line: u32,
    pub lexeme: &'src str,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::IntegerLiteral
            | TokenKind::FloatingLiteral
            | TokenKind::Identifier
            | TokenKind::Error => write!(f, "[Ln: {}] {} ({})", self.line, self.kind, self.lexeme),
            _ => write!(f, "[Ln: {}] {}", self.line, self.kind),
        }
    }
}

impl Token<'_> {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
