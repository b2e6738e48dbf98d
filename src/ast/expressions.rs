use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

use super::{ast::Expr, types::Type};

// OPERATORS

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Greater,
    GreaterEquals,
    Less,
    LessEquals,
}

impl BinaryOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Dash => Some(BinaryOperator::Subtract),
            TokenKind::Star => Some(BinaryOperator::Multiply),
            TokenKind::Slash => Some(BinaryOperator::Divide),
            TokenKind::Greater => Some(BinaryOperator::Greater),
            TokenKind::GreaterEquals => Some(BinaryOperator::GreaterEquals),
            TokenKind::Less => Some(BinaryOperator::Less),
            TokenKind::LessEquals => Some(BinaryOperator::LessEquals),
            _ => None,
        }
    }

    /// Comparisons always produce `bool`; the rest produce the promoted type.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOperator::Greater
                | BinaryOperator::GreaterEquals
                | BinaryOperator::Less
                | BinaryOperator::LessEquals
        )
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEquals => ">=",
            BinaryOperator::Less => "<",
            BinaryOperator::LessEquals => "<=",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    Negate,
    Plus,
}

impl PrefixOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Dash => Some(PrefixOperator::Negate),
            TokenKind::Plus => Some(PrefixOperator::Plus),
            _ => None,
        }
    }
}

// LITERALS

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

/// Literal Expression
/// The type is fixed when the node is built, from the literal's lexical form.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: LiteralValue,
    pub ty: Type,
    pub line: u32,
}

/// Symbol Expression
/// A reference to a declared variable.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
    pub line: u32,
}

/// Initializer Expression
/// A braced, non-empty list of initializers; lists nest for multi-dimensional arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct InitializerExpr {
    pub elements: Vec<Expr>,
    pub line: u32,
}

// COMPOUND

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub assignee: Box<Expr>,
    pub value: Box<Expr>,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOperator,
    pub right: Box<Expr>,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: PrefixOperator,
    pub right_expr: Box<Expr>,
    pub line: u32,
}

/// Cast Expression
/// `expr as target`
#[derive(Debug, Clone, PartialEq)]
pub struct CastExpr {
    pub expr: Box<Expr>,
    pub target: Type,
    pub line: u32,
}

/// Subscript Expression
/// Each subscript peels one array dimension; `a[i][j]` nests two of these.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptExpr {
    pub array: Box<Expr>,
    pub index: Box<Expr>,
    pub line: u32,
}

// CONSTRUCTORS

impl Expr {
    pub fn integer(value: i64, line: u32) -> Expr {
        Expr::Literal(LiteralExpr {
            value: LiteralValue::Integer(value),
            ty: Type::Int,
            line,
        })
    }

    pub fn float(value: f64, line: u32) -> Expr {
        Expr::Literal(LiteralExpr {
            value: LiteralValue::Float(value),
            ty: Type::Float,
            line,
        })
    }

    pub fn boolean(value: bool, line: u32) -> Expr {
        Expr::Literal(LiteralExpr {
            value: LiteralValue::Boolean(value),
            ty: Type::Bool,
            line,
        })
    }

    pub fn symbol(name: impl Into<String>, line: u32) -> Expr {
        Expr::Symbol(SymbolExpr {
            value: name.into(),
            line,
        })
    }

    pub fn initializer(elements: Vec<Expr>, line: u32) -> Expr {
        Expr::Initializer(InitializerExpr { elements, line })
    }

    pub fn assignment(assignee: Expr, value: Expr, line: u32) -> Expr {
        Expr::Assignment(AssignmentExpr {
            assignee: Box::new(assignee),
            value: Box::new(value),
            line,
        })
    }

    pub fn binary(operator: BinaryOperator, left: Expr, right: Expr, line: u32) -> Expr {
        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            line,
        })
    }

    pub fn prefix(operator: PrefixOperator, right_expr: Expr, line: u32) -> Expr {
        Expr::Prefix(PrefixExpr {
            operator,
            right_expr: Box::new(right_expr),
            line,
        })
    }

    pub fn cast(expr: Expr, target: Type, line: u32) -> Expr {
        Expr::Cast(CastExpr {
            expr: Box::new(expr),
            target,
            line,
        })
    }

    pub fn subscript(array: Expr, index: Expr, line: u32) -> Expr {
        Expr::Subscript(SubscriptExpr {
            array: Box::new(array),
            index: Box::new(index),
            line,
        })
    }
}
