//! Unit tests for type descriptors and the type registry rules.

use proptest::prelude::*;
use rstest::rstest;

use super::types::{are_types_equal, can_assign_to, can_cast_to, cast_to_bigger, promote, type_name, Type};

fn arb_type() -> impl Strategy<Value = Type> {
    let leaf = prop_oneof![Just(Type::Int), Just(Type::Float), Just(Type::Bool)];
    leaf.prop_recursive(4, 16, 1, |inner| {
        (inner, 0usize..6).prop_map(|(underlying, length)| Type::array_of(underlying, length))
    })
}

#[rstest]
#[case(Type::Int)]
#[case(Type::Float)]
#[case(Type::Bool)]
fn test_primitive_equals_itself_but_not_its_array(#[case] ty: Type) {
    assert!(are_types_equal(&ty, &ty));
    for length in [0, 1, 5] {
        assert!(!are_types_equal(&ty, &Type::array_of(ty.clone(), length)));
    }
}

#[rstest]
#[case(Type::Int, Type::Float, true)]
#[case(Type::Float, Type::Int, false)]
#[case(Type::Float, Type::Bool, false)]
#[case(Type::Bool, Type::Int, true)]
#[case(Type::Bool, Type::Float, true)]
#[case(Type::Int, Type::Bool, false)]
#[case(Type::Int, Type::Int, false)]
#[case(Type::Bool, Type::Bool, false)]
fn test_cast_table(#[case] from: Type, #[case] to: Type, #[case] expected: bool) {
    assert_eq!(can_cast_to(&from, &to), expected);
}

#[test]
fn test_arrays_never_cast() {
    let ints = Type::array_of(Type::Int, 3);
    let floats = Type::array_of(Type::Float, 3);

    assert!(!can_cast_to(&ints, &floats));
    assert!(!can_cast_to(&ints, &ints));
    assert!(!can_cast_to(&ints, &Type::Int));
}

#[test]
fn test_array_equality_needs_length_and_shape() {
    let three = Type::array_of(Type::Int, 3);
    let four = Type::array_of(Type::Int, 4);
    let nested = Type::array_of(Type::array_of(Type::Int, 1), 3);

    assert!(!are_types_equal(&three, &four));
    assert!(!are_types_equal(&three, &nested));
    assert!(are_types_equal(&three, &Type::array_of(Type::Int, 3)));
}

#[test]
fn test_can_assign_to_allows_widening() {
    assert!(can_assign_to(&Type::Int, &Type::Float));
    assert!(can_assign_to(&Type::Bool, &Type::Int));
    assert!(!can_assign_to(&Type::Float, &Type::Int));
}

#[rstest]
#[case(Type::Int, Type::Int, Some(Type::Int))]
#[case(Type::Int, Type::Float, Some(Type::Float))]
#[case(Type::Float, Type::Int, Some(Type::Float))]
#[case(Type::Bool, Type::Float, Some(Type::Float))]
#[case(Type::Float, Type::Bool, Some(Type::Float))]
#[case(Type::Int, Type::array_of(Type::Int, 2), None)]
fn test_promote(#[case] a: Type, #[case] b: Type, #[case] expected: Option<Type>) {
    assert_eq!(promote(&a, &b).cloned(), expected);
}

#[test]
fn test_cast_to_bigger_falls_back_to_left() {
    let array = Type::array_of(Type::Float, 2);

    assert_eq!(cast_to_bigger(&Type::Int, &array), &Type::Int);
    assert_eq!(cast_to_bigger(&Type::Int, &Type::Float), &Type::Float);
}

#[test]
fn test_type_display() {
    assert_eq!(Type::Int.to_string(), "integer");
    assert_eq!(Type::array_of(Type::Float, 3).to_string(), "float[3]");
    assert_eq!(
        Type::array_of(Type::array_of(Type::Bool, 3), 2).to_string(),
        "bool[2][3]"
    );
    assert_eq!(type_name(None), "<unknown>");
    assert_eq!(type_name(Some(&Type::Float)), "float");
}

#[test]
fn test_dimensions_and_base() {
    let ty = Type::array_of(Type::array_of(Type::Int, 3), 2);

    assert_eq!(ty.dimensions(), vec![2, 3]);
    assert_eq!(ty.base(), &Type::Int);
    assert_eq!(ty.underlying(), Some(&Type::array_of(Type::Int, 3)));
    assert_eq!(Type::Bool.underlying(), None);
}

proptest! {
    #[test]
    fn prop_equal_types_are_assignable(ty in arb_type()) {
        let copy = ty.clone();
        prop_assert!(are_types_equal(&ty, &copy));
        prop_assert!(can_assign_to(&ty, &copy));
    }

    #[test]
    fn prop_equality_implies_assignability(a in arb_type(), b in arb_type()) {
        if are_types_equal(&a, &b) {
            prop_assert!(can_assign_to(&a, &b));
        }
    }

    #[test]
    fn prop_arrays_never_cast(a in arb_type(), b in arb_type(), length in 0usize..4) {
        let array = Type::array_of(a, length);
        prop_assert!(!can_cast_to(&array, &b));
    }

    #[test]
    fn prop_numeric_operands_always_promote(a in arb_type(), b in arb_type()) {
        if a.is_numeric() && b.is_numeric() {
            prop_assert!(promote(&a, &b).is_some());
        }

        let array = Type::array_of(a.clone(), 1);
        if !are_types_equal(&array, &b) {
            prop_assert!(promote(&array, &b).is_none());
        }
    }

    #[test]
    fn prop_structural_equality_matches_derived_eq(a in arb_type(), b in arb_type()) {
        prop_assert_eq!(are_types_equal(&a, &b), a == b);
    }
}
