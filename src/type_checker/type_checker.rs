use tracing::debug;

use crate::{
    ast::{
        ast::{Expr, Program, Stmt},
        expressions::{
            AssignmentExpr, BinaryExpr, CastExpr, InitializerExpr, PrefixExpr, SubscriptExpr,
        },
        statements::{IfStmt, VarDeclStmt},
        types::{are_types_equal, can_assign_to, can_cast_to, promote, type_name, Type},
    },
    errors::errors::{Error, ErrorImpl},
};

use super::{
    symbol_table::SymbolTable,
    typed_ast::{
        TypedExpr, TypedExprKind, TypedExpressionStmt, TypedIfStmt, TypedProgram, TypedStmt,
        TypedVarDeclStmt,
    },
};

/// What the top-level loop does after an item fails its check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Record the error and move on to the next top-level item.
    #[default]
    CollectAll,
    /// Stop at the first error.
    FailFast,
}

/// Compatibility required between a value and the slot it is stored in.
///
/// Applies to declaration initializers and assignments alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssignmentRule {
    /// Structural equality only.
    #[default]
    Exact,
    /// Equality, or any conversion `can_cast_to` allows.
    Widening,
}

impl AssignmentRule {
    pub fn accepts(&self, from: &Type, to: &Type) -> bool {
        match self {
            AssignmentRule::Exact => are_types_equal(from, to),
            AssignmentRule::Widening => can_assign_to(from, to),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeCheckerOptions {
    pub error_policy: ErrorPolicy,
    pub assignment_rule: AssignmentRule,
}

#[derive(Debug)]
pub struct TypeChecker {
    pub typed_ast: TypedProgram,
    pub symbol_table: SymbolTable,
    options: TypeCheckerOptions,
}

impl TypeChecker {
    pub fn new(options: TypeCheckerOptions) -> Self {
        TypeChecker {
            typed_ast: TypedProgram::default(),
            symbol_table: SymbolTable::new(),
            options,
        }
    }

    pub fn fetch_variable_type(&self, variable: &str) -> Option<Type> {
        self.symbol_table.lookup(variable).cloned()
    }

    fn accepts_assignment(&self, from: Option<&Type>, to: Option<&Type>) -> bool {
        match (from, to) {
            (Some(from), Some(to)) => self.options.assignment_rule.accepts(from, to),
            _ => false,
        }
    }
}

fn numeric_operand(expr: &TypedExpr) -> Result<&Type, Error> {
    match expr.get_type() {
        Some(ty) if ty.is_numeric() => Ok(ty),
        other => Err(Error::new(
            ErrorImpl::ExpectedNumeric {
                received: type_name(other),
            },
            expr.line,
        )),
    }
}

pub fn type_check_expr(type_checker: &mut TypeChecker, ast: &Expr) -> Result<TypedExpr, Error> {
    match ast {
        Expr::Literal(literal) => Ok(TypedExpr::new(
            TypedExprKind::Literal(literal.value),
            Some(literal.ty.clone()),
            literal.line,
        )),
        Expr::Symbol(symbol) => {
            let var_type = type_checker.fetch_variable_type(&symbol.value);
            if var_type.is_none() {
                debug!(variable = %symbol.value, line = symbol.line, "reference to undeclared variable");
            }

            Ok(TypedExpr::new(
                TypedExprKind::Symbol {
                    name: symbol.value.clone(),
                },
                var_type,
                symbol.line,
            ))
        }
        Expr::Assignment(assignment) => type_check_assignment_expr(type_checker, assignment),
        Expr::Binary(binary) => type_check_binary_expr(type_checker, binary),
        Expr::Prefix(prefix) => type_check_prefix_expr(type_checker, prefix),
        Expr::Cast(cast) => type_check_cast_expr(type_checker, cast),
        Expr::Subscript(subscript) => type_check_subscript_expr(type_checker, subscript),
        Expr::Initializer(initializer) => type_check_initializer(type_checker, initializer),
    }
}

fn type_check_assignment_expr(type_checker: &mut TypeChecker, assignment: &AssignmentExpr) -> Result<TypedExpr, Error> {
    let assignee = type_check_expr(type_checker, &assignment.assignee)?;
    let value = type_check_expr(type_checker, &assignment.value)?;

    if !type_checker.accepts_assignment(value.get_type(), assignee.get_type()) {
        return Err(Error::new(
            ErrorImpl::InvalidAssignment {
                expected: type_name(assignee.get_type()),
                received: type_name(value.get_type()),
            },
            assignment.line,
        ));
    }

    let ty = assignee.ty.clone();
    Ok(TypedExpr::new(
        TypedExprKind::Assignment {
            assignee: Box::new(assignee),
            value: Box::new(value),
        },
        ty,
        assignment.line,
    ))
}

fn type_check_binary_expr(type_checker: &mut TypeChecker, binary: &BinaryExpr) -> Result<TypedExpr, Error> {
    let left = type_check_expr(type_checker, &binary.left)?;
    let right = type_check_expr(type_checker, &binary.right)?;

    let left_type = numeric_operand(&left)?;
    let right_type = numeric_operand(&right)?;

    let ty = if binary.operator.is_comparison() {
        Type::Bool
    } else {
        // Numeric operands always promote. `promote` rejects only pairs
        // involving an array, which `numeric_operand` has already ruled out.
        match promote(left_type, right_type) {
            Some(ty) => ty.clone(),
            None => {
                return Err(Error::new(
                    ErrorImpl::IncompatibleTypes {
                        left: left_type.to_string(),
                        right: right_type.to_string(),
                    },
                    binary.line,
                ))
            }
        }
    };

    Ok(TypedExpr::new(
        TypedExprKind::Binary {
            left: Box::new(left),
            operator: binary.operator,
            right: Box::new(right),
        },
        Some(ty),
        binary.line,
    ))
}

fn type_check_prefix_expr(type_checker: &mut TypeChecker, prefix: &PrefixExpr) -> Result<TypedExpr, Error> {
    let right_expr = type_check_expr(type_checker, &prefix.right_expr)?;
    let ty = numeric_operand(&right_expr)?.clone();

    Ok(TypedExpr::new(
        TypedExprKind::Prefix {
            operator: prefix.operator,
            right_expr: Box::new(right_expr),
        },
        Some(ty),
        prefix.line,
    ))
}

fn type_check_cast_expr(type_checker: &mut TypeChecker, cast: &CastExpr) -> Result<TypedExpr, Error> {
    let expr = type_check_expr(type_checker, &cast.expr)?;

    let castable = match expr.get_type() {
        Some(from) => can_cast_to(from, &cast.target),
        None => false,
    };

    if !castable {
        return Err(Error::new(
            ErrorImpl::InvalidCast {
                from: type_name(expr.get_type()),
                to: cast.target.to_string(),
            },
            cast.line,
        ));
    }

    Ok(TypedExpr::new(
        TypedExprKind::Cast { expr: Box::new(expr) },
        Some(cast.target.clone()),
        cast.line,
    ))
}

fn type_check_subscript_expr(type_checker: &mut TypeChecker, subscript: &SubscriptExpr) -> Result<TypedExpr, Error> {
    let array = type_check_expr(type_checker, &subscript.array)?;

    let element_type = match array.get_type().and_then(Type::underlying) {
        Some(underlying) => underlying.clone(),
        None => {
            return Err(Error::new(
                ErrorImpl::ExpectedArray {
                    received: type_name(array.get_type()),
                },
                subscript.line,
            ))
        }
    };

    let index = type_check_expr(type_checker, &subscript.index)?;
    if index.get_type() != Some(&Type::Int) {
        return Err(Error::new(
            ErrorImpl::InvalidIndex {
                received: type_name(index.get_type()),
            },
            subscript.line,
        ));
    }

    Ok(TypedExpr::new(
        TypedExprKind::Subscript {
            array: Box::new(array),
            index: Box::new(index),
        },
        Some(element_type),
        subscript.line,
    ))
}

/// Every element must have the first element's type; the result is an
/// array of that type with one slot per element.
fn type_check_initializer(type_checker: &mut TypeChecker, initializer: &InitializerExpr) -> Result<TypedExpr, Error> {
    let mut elements = Vec::with_capacity(initializer.elements.len());
    for element in &initializer.elements {
        elements.push(type_check_expr(type_checker, element)?);
    }

    let element_type = elements.first().and_then(TypedExpr::get_type).cloned();

    for element in &elements {
        let uniform = match (&element_type, element.get_type()) {
            (Some(expected), Some(received)) => are_types_equal(expected, received),
            _ => false,
        };

        if !uniform {
            return Err(Error::new(
                ErrorImpl::NonUniformInitializer {
                    expected: type_name(element_type.as_ref()),
                    received: type_name(element.get_type()),
                },
                element.line,
            ));
        }
    }

    // Empty lists are rejected by the parser, so an element type exists here.
    let ty = element_type.map(|element_type| Type::array_of(element_type, elements.len()));

    Ok(TypedExpr::new(
        TypedExprKind::Initializer { elements },
        ty,
        initializer.line,
    ))
}

fn type_check_var_decl_stmt(type_checker: &mut TypeChecker, decl: &VarDeclStmt) -> Result<TypedStmt, Error> {
    match &decl.explicit_type {
        Some(declared) => {
            // The name is bound even if the initializer turns out to be wrong.
            type_checker.symbol_table.bind(decl.identifier.clone(), declared.clone());

            let assigned_value = match &decl.assigned_value {
                Some(value) => {
                    let value = type_check_expr(type_checker, value)?;
                    if !type_checker.accepts_assignment(value.get_type(), Some(declared)) {
                        return Err(Error::new(
                            ErrorImpl::VariableInitMismatch {
                                variable: decl.identifier.clone(),
                                expected: declared.to_string(),
                                received: type_name(value.get_type()),
                            },
                            decl.line,
                        ));
                    }
                    Some(value)
                }
                None => None,
            };

            Ok(TypedStmt::VarDecl(TypedVarDeclStmt {
                identifier: decl.identifier.clone(),
                var_type: Some(declared.clone()),
                assigned_value,
                line: decl.line,
            }))
        }
        None => {
            let value = match &decl.assigned_value {
                Some(value) => Some(type_check_expr(type_checker, value)?),
                None => None,
            };
            let var_type = value.as_ref().and_then(|value| value.ty.clone());

            if let Some(var_type) = &var_type {
                type_checker.symbol_table.bind(decl.identifier.clone(), var_type.clone());
            }

            Ok(TypedStmt::VarDecl(TypedVarDeclStmt {
                identifier: decl.identifier.clone(),
                var_type,
                assigned_value: value,
                line: decl.line,
            }))
        }
    }
}

fn type_check_if_stmt(type_checker: &mut TypeChecker, if_stmt: &IfStmt) -> Result<TypedStmt, Error> {
    let condition = type_check_expr(type_checker, &if_stmt.condition)?;
    if condition.get_type() != Some(&Type::Bool) {
        return Err(Error::new(
            ErrorImpl::ExpectedBoolean {
                received: type_name(condition.get_type()),
            },
            if_stmt.condition.get_line(),
        ));
    }

    let then_body = type_check_stmt(type_checker, &if_stmt.then_body)?;
    let else_body = match &if_stmt.else_body {
        Some(else_body) => Some(Box::new(type_check_stmt(type_checker, else_body)?)),
        None => None,
    };

    Ok(TypedStmt::If(TypedIfStmt {
        condition,
        then_body: Box::new(then_body),
        else_body,
        line: if_stmt.line,
    }))
}

pub fn type_check_stmt(type_checker: &mut TypeChecker, ast: &Stmt) -> Result<TypedStmt, Error> {
    match ast {
        Stmt::VarDecl(decl) => type_check_var_decl_stmt(type_checker, decl),
        Stmt::If(if_stmt) => type_check_if_stmt(type_checker, if_stmt),
        Stmt::Expression(stmt) => Ok(TypedStmt::Expression(TypedExpressionStmt {
            expression: type_check_expr(type_checker, &stmt.expression)?,
            line: stmt.line,
        })),
    }
}

/// Checks every top-level item in order against a fresh symbol table.
///
/// Items that pass are collected into the checker's typed AST. Failed items
/// are left out, and their errors are returned in source order. The program
/// itself is only read, so checking it again gives the same result.
pub fn type_check(ast: &Program, options: TypeCheckerOptions) -> (TypeChecker, Vec<Error>) {
    let mut type_checker = TypeChecker::new(options);
    let mut errors = vec![];

    for stmt in ast {
        match type_check_stmt(&mut type_checker, stmt) {
            Ok(typed_stmt) => type_checker.typed_ast.body.push(typed_stmt),
            Err(error) => {
                debug!(line = error.get_line(), kind = error.get_error_name(), "type violation");
                errors.push(error);

                if type_checker.options.error_policy == ErrorPolicy::FailFast {
                    break;
                }
            }
        }
    }

    debug!(
        checked = type_checker.typed_ast.len(),
        errors = errors.len(),
        symbols = type_checker.symbol_table.len(),
        "type check finished"
    );

    (type_checker, errors)
}
