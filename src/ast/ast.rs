use std::slice::Iter;

use super::{
    expressions::{
        AssignmentExpr, BinaryExpr, CastExpr, InitializerExpr, LiteralExpr, PrefixExpr,
        SubscriptExpr, SymbolExpr,
    },
    statements::{ExpressionStmt, IfStmt, VarDeclStmt},
};

/// A top-level declaration or a statement.
///
/// Only `if` branches nest statements; declarations appear at program level.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    If(IfStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    pub fn get_line(&self) -> u32 {
        match self {
            Stmt::VarDecl(stmt) => stmt.line,
            Stmt::If(stmt) => stmt.line,
            Stmt::Expression(stmt) => stmt.line,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Assignment(AssignmentExpr),
    Binary(BinaryExpr),
    Prefix(PrefixExpr),
    Cast(CastExpr),
    Subscript(SubscriptExpr),
    Symbol(SymbolExpr),
    Initializer(InitializerExpr),
    Literal(LiteralExpr),
}

impl Expr {
    pub fn get_line(&self) -> u32 {
        match self {
            Expr::Assignment(expr) => expr.line,
            Expr::Binary(expr) => expr.line,
            Expr::Prefix(expr) => expr.line,
            Expr::Cast(expr) => expr.line,
            Expr::Subscript(expr) => expr.line,
            Expr::Symbol(expr) => expr.line,
            Expr::Initializer(expr) => expr.line,
            Expr::Literal(expr) => expr.line,
        }
    }

    /// Only variables and subscripts may appear left of `=`.
    pub fn is_lvalue(&self) -> bool {
        matches!(self, Expr::Symbol(_) | Expr::Subscript(_))
    }
}

/// The parsed program: top-level items in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Stmt;
    type IntoIter = Iter<'a, Stmt>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
