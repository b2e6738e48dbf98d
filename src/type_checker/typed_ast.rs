//! Typed Abstract Syntax Tree definitions.
//!
//! This module contains the typed variants of AST nodes produced by
//! the type checker. The typed AST mirrors the structure of the untyped
//! AST but every expression carries the type the checker inferred for it.
//!
//! An expression type of `None` marks a reference to an undeclared
//! variable that no enclosing check needed a type from.

use std::slice::Iter;

use crate::ast::{
    expressions::{BinaryOperator, LiteralValue, PrefixOperator},
    types::Type,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypedProgram {
    pub body: Vec<TypedStmt>,
}

impl TypedProgram {
    pub fn iter(&self) -> Iter<'_, TypedStmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypedStmt {
    VarDecl(TypedVarDeclStmt),
    If(TypedIfStmt),
    Expression(TypedExpressionStmt),
}

impl TypedStmt {
    pub fn get_line(&self) -> u32 {
        match self {
            TypedStmt::VarDecl(stmt) => stmt.line,
            TypedStmt::If(stmt) => stmt.line,
            TypedStmt::Expression(stmt) => stmt.line,
        }
    }

    /// The statement's result type: the bound type for declarations, the
    /// expression type for expression statements, nothing for `if`.
    pub fn get_type(&self) -> Option<&Type> {
        match self {
            TypedStmt::VarDecl(stmt) => stmt.var_type.as_ref(),
            TypedStmt::If(_) => None,
            TypedStmt::Expression(stmt) => stmt.expression.get_type(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedVarDeclStmt {
    pub identifier: String,
    /// `None` only for an inferred declaration whose initializer has no type.
    pub var_type: Option<Type>,
    pub assigned_value: Option<TypedExpr>,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedIfStmt {
    pub condition: TypedExpr,
    pub then_body: Box<TypedStmt>,
    pub else_body: Option<Box<TypedStmt>>,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedExpressionStmt {
    pub expression: TypedExpr,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedExpr {
    pub kind: TypedExprKind,
    pub ty: Option<Type>,
    pub line: u32,
}

impl TypedExpr {
    pub fn new(kind: TypedExprKind, ty: Option<Type>, line: u32) -> Self {
        TypedExpr { kind, ty, line }
    }

    pub fn get_type(&self) -> Option<&Type> {
        self.ty.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypedExprKind {
    Assignment {
        assignee: Box<TypedExpr>,
        value: Box<TypedExpr>,
    },
    Binary {
        left: Box<TypedExpr>,
        operator: BinaryOperator,
        right: Box<TypedExpr>,
    },
    Prefix {
        operator: PrefixOperator,
        right_expr: Box<TypedExpr>,
    },
    Cast {
        expr: Box<TypedExpr>,
    },
    Subscript {
        array: Box<TypedExpr>,
        index: Box<TypedExpr>,
    },
    Symbol {
        name: String,
    },
    Initializer {
        elements: Vec<TypedExpr>,
    },
    Literal(LiteralValue),
}
