use super::{
    ast::{Expr, Stmt},
    types::Type,
};

/// `var name type (= initializer)?;` or `let name = initializer;`
///
/// `explicit_type` is resolved by the parser, so it is already a concrete
/// type descriptor. It is `None` exactly for `let`.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub explicit_type: Option<Type>,
    pub assigned_value: Option<Expr>,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Box<Stmt>,
    pub else_body: Option<Box<Stmt>>,
    pub line: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub line: u32,
}

impl Stmt {
    pub fn var_decl(
        identifier: impl Into<String>,
        explicit_type: Option<Type>,
        assigned_value: Option<Expr>,
        line: u32,
    ) -> Stmt {
        Stmt::VarDecl(VarDeclStmt {
            identifier: identifier.into(),
            explicit_type,
            assigned_value,
            line,
        })
    }

    pub fn if_stmt(condition: Expr, then_body: Stmt, else_body: Option<Stmt>, line: u32) -> Stmt {
        Stmt::If(IfStmt {
            condition,
            then_body: Box::new(then_body),
            else_body: else_body.map(Box::new),
            line,
        })
    }

    pub fn expression(expression: Expr, line: u32) -> Stmt {
        Stmt::Expression(ExpressionStmt { expression, line })
    }
}
