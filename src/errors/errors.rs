use std::fmt::Display;

use thiserror::Error;

/// How bad an error is for the pipeline.
///
/// Structural errors come from the lexer/parser and leave no AST behind.
/// Type errors come from the checker and only fail the item they occur in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Structural,
    Type,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: u32,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: u32) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn severity(&self) -> Severity {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. }
            | ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedTokenDetailed { .. }
            | ErrorImpl::UnknownExpression { .. }
            | ErrorImpl::UnknownDataType { .. }
            | ErrorImpl::NumberParseError { .. }
            | ErrorImpl::InvalidAssignmentTarget
            | ErrorImpl::UninitializedLet { .. }
            | ErrorImpl::NestingTooDeep { .. } => Severity::Structural,
            _ => Severity::Type,
        }
    }

    pub fn is_type_error(&self) -> bool {
        self.severity() == Severity::Type
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::UnknownExpression { .. } => "UnknownExpression",
            ErrorImpl::UnknownDataType { .. } => "UnknownDataType",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::InvalidAssignmentTarget => "InvalidAssignmentTarget",
            ErrorImpl::UninitializedLet { .. } => "UninitializedLet",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::InvalidAssignment { .. } => "InvalidAssignment",
            ErrorImpl::VariableInitMismatch { .. } => "VariableInitMismatch",
            ErrorImpl::IncompatibleTypes { .. } => "IncompatibleTypes",
            ErrorImpl::ExpectedBoolean { .. } => "ExpectedBoolean",
            ErrorImpl::ExpectedNumeric { .. } => "ExpectedNumeric",
            ErrorImpl::ExpectedArray { .. } => "ExpectedArray",
            ErrorImpl::InvalidCast { .. } => "InvalidCast",
            ErrorImpl::NonUniformInitializer { .. } => "NonUniformInitializer",
            ErrorImpl::InvalidIndex { .. } => "InvalidIndex",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.severity() {
            Severity::Structural => write!(f, "[Ln: {}] {}", self.line, self.internal_error),
            Severity::Type => write!(f, "typechecker: {} (line {})", self.internal_error, self.line),
        }
    }
}

impl std::error::Error for Error {}

/// Every failure the front end can report.
///
/// Type names are carried pre-rendered; an absent type renders as `<unknown>`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unknown expression at {token:?}")]
    UnknownExpression { token: String },
    #[error("unknown data type {token:?}")]
    UnknownDataType { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("cannot assign to an rvalue")]
    InvalidAssignmentTarget,
    #[error("variables declared with 'let' must be initialized ({variable:?})")]
    UninitializedLet { variable: String },
    #[error("nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize },

    #[error("cannot assign a value of type `{received}` to a target of type `{expected}`")]
    InvalidAssignment { expected: String, received: String },
    #[error("variable {variable:?} declared as `{expected}` but initialized with `{received}`")]
    VariableInitMismatch {
        variable: String,
        expected: String,
        received: String,
    },
    #[error("incompatible operand types `{left}` and `{right}`")]
    IncompatibleTypes { left: String, right: String },
    #[error("expected a `bool` condition, found `{received}`")]
    ExpectedBoolean { received: String },
    #[error("expected a numeric operand, found `{received}`")]
    ExpectedNumeric { received: String },
    #[error("subscript expects an array, found `{received}`")]
    ExpectedArray { received: String },
    #[error("cannot cast `{from}` to `{to}`")]
    InvalidCast { from: String, to: String },
    #[error("initializer elements must share one type: expected `{expected}`, found `{received}`")]
    NonUniformInitializer { expected: String, received: String },
    #[error("subscript index must be `integer`, found `{received}`")]
    InvalidIndex { received: String },
}
