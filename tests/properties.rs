//! Property-based tests for the conversion and evaluation pipeline.
//!
//! Random expression trees are printed in fully parenthesized infix form,
//! run back through conversion and AST building, and checked against a
//! direct evaluation of the generated tree.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use boolexpr::{
    ast::{BinaryOperator, Expr},
    interpreter::{bindings::Bindings, converter::convert, parser::build_ast},
};
use proptest::prelude::*;

const LETTERS: [char; 7] = ['a', 'b', 'c', 'd', 'e', 'T', 'F'];

fn letter_strategy() -> impl Strategy<Value = char> {
    prop::sample::select(LETTERS.to_vec())
}

fn operator_strategy() -> impl Strategy<Value = BinaryOperator> {
    prop_oneof![Just(BinaryOperator::Or), Just(BinaryOperator::And), Just(BinaryOperator::Xor)]
}

fn expr_strategy() -> impl Strategy<Value = Expr> {
    letter_strategy().prop_map(Expr::variable)
                     .prop_recursive(6, 48, 2, |inner| {
                         prop_oneof![inner.clone().prop_map(Expr::not),
                                     (inner.clone(), operator_strategy(), inner)
                                         .prop_map(|(left, op, right)| Expr::binary(left, op, right)),]
                     })
}

fn bindings_strategy() -> impl Strategy<Value = Bindings> {
    prop::array::uniform5(any::<bool>()).prop_map(|values| {
                                            let mut bindings = Bindings::default();
                                            bindings.extend(LETTERS[..5].iter().copied().zip(values));
                                            bindings
                                        })
}

/// Evaluates a generated tree without going through the crate's evaluator.
fn reference_eval(expr: &Expr, bindings: &Bindings) -> bool {
    match expr {
        Expr::Variable { name } => bindings.get(*name).unwrap_or(false),
        Expr::UnaryOp { expr, .. } => !reference_eval(expr, bindings),
        Expr::BinaryOp { left, op, right } => {
            let (l, r) = (reference_eval(left, bindings), reference_eval(right, bindings));
            match op {
                BinaryOperator::Or => l | r,
                BinaryOperator::And => l & r,
                BinaryOperator::Xor => l ^ r,
            }
        },
    }
}

proptest! {
    #[test]
    fn parenthesized_infix_evaluates_like_the_tree(expr in expr_strategy(), bindings in bindings_strategy()) {
        let infix = expr.to_string();
        let rebuilt = build_ast(&convert(&infix).unwrap()).unwrap();
        prop_assert_eq!(rebuilt.evaluate(&bindings), reference_eval(&expr, &bindings));
    }

    #[test]
    fn parenthesized_infix_rebuilds_the_same_tree(expr in expr_strategy()) {
        let rebuilt = build_ast(&convert(&expr.to_string()).unwrap()).unwrap();
        prop_assert_eq!(rebuilt, expr);
    }

    #[test]
    fn evaluation_does_not_mutate(expr in expr_strategy(), bindings in bindings_strategy()) {
        let (expr_before, bindings_before) = (expr.clone(), bindings.clone());
        let first = expr.evaluate(&bindings);
        let second = expr.evaluate(&bindings);
        prop_assert_eq!(first, second);
        prop_assert_eq!(expr, expr_before);
        prop_assert_eq!(bindings, bindings_before);
    }

    #[test]
    fn postfix_has_no_parentheses(expr in expr_strategy()) {
        let postfix = convert(&expr.to_string()).unwrap();
        prop_assert!(!postfix.contains(['(', ')', ' ']));
    }
}
