//! # boolexpr
//!
//! boolexpr evaluates boolean-algebra expressions written in infix notation.
//! Expressions use `+` (OR), `*` (AND), `^` (XOR), prefix `-` (NOT),
//! single-letter variables, the literals `T` and `F`, and parentheses.
//!
//! Each expression is converted to postfix, built into an AST, evaluated
//! against a table of variable bindings and drawn as an indented tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::fmt;

use crate::{
    error::ParseError,
    interpreter::{
        bindings::Bindings,
        converter::convert,
        display::build_display_tree,
        parser::build_ast,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types. The AST is
/// built by the parser from postfix input and walked by the evaluator and the
/// display renderer.
pub mod ast;
/// Provides the error types for conversion, tree building and bindings.
///
/// # Responsibilities
/// - Defines error enums for every structural failure mode.
/// - Attaches the position of the offending character where there is one.
pub mod error;
/// Orchestrates the processing of a single expression.
///
/// This module ties together lexing, infix-to-postfix conversion, AST
/// construction, evaluation and rendering.
///
/// # Responsibilities
/// - Coordinates the lexer, converter, parser, evaluator and display tree.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Everything produced for one expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The expression in postfix form.
    pub postfix: String,
    /// The fully parenthesized infix form of the AST.
    pub infix:   String,
    /// The lines of the tree outline.
    pub outline: Vec<String>,
    /// The truth value of the expression.
    pub value:   bool,
    /// Letters that had no binding and were read as false.
    pub unbound: Vec<char>,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Postfix: {}", self.postfix)?;
        writeln!(f, "Expression: {}", self.infix)?;
        writeln!(f, "Tree:")?;
        for line in &self.outline {
            writeln!(f, "{line}")?;
        }
        write!(f, "Result: {}", if self.value { "True" } else { "False" })
    }
}

/// Runs the whole pipeline on one infix expression.
///
/// The expression is converted to postfix once. The AST and the display tree
/// are then built from that postfix string; the AST is evaluated against
/// `bindings` and rendered back to infix. Both trees are dropped before this
/// function returns, on success and on failure alike.
///
/// # Errors
/// Returns the first structural error found: unbalanced parentheses, an
/// operator without enough operands, leftover operands, or an expression
/// with no operands at all.
///
/// # Examples
/// ```
/// use boolexpr::{get_result, interpreter::bindings::Bindings};
///
/// let bindings = Bindings::default().with('a', true).with('b', false);
/// let evaluation = get_result("a^b", &bindings).unwrap();
/// assert_eq!(evaluation.postfix, "ab^");
/// assert_eq!(evaluation.infix, "(a ^ b)");
/// assert!(evaluation.value);
///
/// // Unbalanced parentheses are reported.
/// assert!(get_result("(a^b", &bindings).is_err());
/// ```
#[tracing::instrument(level = "debug", skip(bindings))]
pub fn get_result(source: &str, bindings: &Bindings) -> Result<Evaluation, ParseError> {
    let postfix = convert(source)?;

    let expr = build_ast(&postfix)?;
    let tree = build_display_tree(&postfix)?;

    let value = expr.evaluate(bindings);
    tracing::debug!(%postfix, value, "evaluated expression");

    Ok(Evaluation { infix: expr.to_string(),
                    outline: tree.outline().collect(),
                    unbound: expr.unbound_variables(bindings).into_iter().collect(),
                    postfix,
                    value })
}
