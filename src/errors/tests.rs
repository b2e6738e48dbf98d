//! Unit tests for error handling.
//!
//! This module contains tests for error kinds, severities and the rendered
//! diagnostic text.

use rstest::rstest;

use crate::errors::errors::{Error, ErrorImpl, Severity};

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        10,
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_line(), 10);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnrecognisedToken {
            token: "@".to_string()
        }
    );
}

#[rstest]
#[case(ErrorImpl::UnexpectedToken { token: "x".to_string() }, Severity::Structural)]
#[case(ErrorImpl::UnknownExpression { token: ";".to_string() }, Severity::Structural)]
#[case(ErrorImpl::UnknownDataType { token: "string".to_string() }, Severity::Structural)]
#[case(ErrorImpl::NumberParseError { token: "99999999999999999999".to_string() }, Severity::Structural)]
#[case(ErrorImpl::InvalidAssignmentTarget, Severity::Structural)]
#[case(ErrorImpl::UninitializedLet { variable: "x".to_string() }, Severity::Structural)]
#[case(ErrorImpl::NestingTooDeep { limit: 256 }, Severity::Structural)]
#[case(ErrorImpl::ExpectedBoolean { received: "integer".to_string() }, Severity::Type)]
#[case(ErrorImpl::InvalidIndex { received: "float".to_string() }, Severity::Type)]
#[case(ErrorImpl::InvalidCast { from: "float".to_string(), to: "integer".to_string() }, Severity::Type)]
fn test_error_severity(#[case] error_impl: ErrorImpl, #[case] expected: Severity) {
    let error = Error::new(error_impl, 1);

    assert_eq!(error.severity(), expected);
    assert_eq!(error.is_type_error(), expected == Severity::Type);
}

#[test]
fn test_structural_error_display() {
    let error = Error::new(ErrorImpl::InvalidAssignmentTarget, 3);

    assert_eq!(error.to_string(), "[Ln: 3] cannot assign to an rvalue");
}

#[test]
fn test_unexpected_token_display() {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: "integer".to_string(),
            message: "Expected variable name in declaration".to_string(),
        },
        1,
    );

    assert_eq!(
        error.to_string(),
        "[Ln: 1] unexpected token (Expected variable name in declaration): \"integer\""
    );
}

#[test]
fn test_type_error_display() {
    let error = Error::new(
        ErrorImpl::NonUniformInitializer {
            expected: "integer".to_string(),
            received: "bool".to_string(),
        },
        7,
    );

    assert_eq!(
        error.to_string(),
        "typechecker: initializer elements must share one type: expected `integer`, found `bool` (line 7)"
    );
    assert_eq!(error.get_error_name(), "NonUniformInitializer");
}

#[test]
fn test_error_is_std_error() {
    let error: Box<dyn std::error::Error> = Box::new(Error::new(
        ErrorImpl::ExpectedArray {
            received: "integer".to_string(),
        },
        2,
    ));

    assert!(error.to_string().starts_with("typechecker: "));
}
