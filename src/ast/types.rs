//! Type descriptors and the rules that relate them.
//!
//! The language has three primitive types and fixed-length arrays:
//!
//! - `integer`, `float` and `bool`
//! - `T[n]`, an array of `n` elements of `T` (arrays nest)
//!
//! Array types are never interned. Two separately built array types with the
//! same shape are different values that compare equal structurally, which is
//! what `are_types_equal` checks.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Int,
    Float,
    Bool,
    Array(ArrayType),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub underlying: Box<Type>,
    pub length: usize,
}

impl Type {
    pub fn array_of(underlying: Type, length: usize) -> Type {
        Type::Array(ArrayType {
            underlying: Box::new(underlying),
            length,
        })
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }

    /// The element type for arrays, `None` for primitives.
    pub fn underlying(&self) -> Option<&Type> {
        match self {
            Type::Array(array) => Some(&array.underlying),
            _ => None,
        }
    }

    /// The innermost non-array type.
    pub fn base(&self) -> &Type {
        match self {
            Type::Array(array) => array.underlying.base(),
            _ => self,
        }
    }

    /// Array lengths from the outermost dimension inwards.
    pub fn dimensions(&self) -> Vec<usize> {
        let mut dimensions = vec![];
        let mut current = self;
        while let Type::Array(array) = current {
            dimensions.push(array.length);
            current = &array.underlying;
        }
        dimensions
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.base() {
            Type::Int => write!(f, "integer")?,
            Type::Float => write!(f, "float")?,
            Type::Bool => write!(f, "bool")?,
            Type::Array(_) => unreachable!("base() never returns an array"),
        }

        for length in self.dimensions() {
            write!(f, "[{}]", length)?;
        }

        Ok(())
    }
}

/// Renders a possibly-absent type for diagnostics.
pub fn type_name(ty: Option<&Type>) -> String {
    match ty {
        Some(ty) => ty.to_string(),
        None => String::from("<unknown>"),
    }
}

/// Deep structural equality: same kind, and for arrays the same length and
/// recursively equal element types.
pub fn are_types_equal(a: &Type, b: &Type) -> bool {
    match (a, b) {
        (Type::Int, Type::Int) | (Type::Float, Type::Float) | (Type::Bool, Type::Bool) => true,
        (Type::Array(a), Type::Array(b)) => {
            a.length == b.length && are_types_equal(&a.underlying, &b.underlying)
        }
        _ => false,
    }
}

pub fn can_cast_to(from: &Type, to: &Type) -> bool {
    match from {
        Type::Int => matches!(to, Type::Float),
        Type::Float => false,
        Type::Bool => to.is_numeric(),
        Type::Array(_) => false,
    }
}

pub fn can_assign_to(from: &Type, to: &Type) -> bool {
    are_types_equal(from, to) || can_cast_to(from, to)
}

/// Picks the wider operand type. Falls back to `a` when neither converts to
/// the other, so callers must have validated the operands already.
pub fn cast_to_bigger<'a>(a: &'a Type, b: &'a Type) -> &'a Type {
    promote(a, b).unwrap_or(a)
}

/// Like `cast_to_bigger`, but reports the no-conversion case instead of
/// falling back.
pub fn promote<'a>(a: &'a Type, b: &'a Type) -> Option<&'a Type> {
    if are_types_equal(a, b) {
        Some(a)
    } else if can_cast_to(a, b) {
        Some(b)
    } else if can_cast_to(b, a) {
        Some(a)
    } else {
        None
    }
}
