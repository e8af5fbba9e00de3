use std::{collections::BTreeSet, fmt};

use crate::{ast::Expr, interpreter::bindings::Bindings};

impl Expr {
    /// Evaluates the expression against a bindings table.
    ///
    /// - `Variable`: the bound value, or `false` if the letter is unbound.
    /// - `BinaryOp`: both operands are evaluated, then combined with OR (`+`),
    ///   AND (`*`) or XOR (`^`).
    /// - `UnaryOp`: the operand is evaluated and negated.
    ///
    /// Neither the tree nor the table is modified, so repeated calls with the
    /// same table give the same answer.
    ///
    /// # Example
    /// ```
    /// use boolexpr::interpreter::{bindings::Bindings, parser::parse};
    ///
    /// let bindings = Bindings::default().with('a', false).with('b', true).with('c', true);
    /// let expr = parse("a+b*c").unwrap();
    /// assert!(expr.evaluate(&bindings));
    /// ```
    #[must_use]
    pub fn evaluate(&self, bindings: &Bindings) -> bool {
        match self {
            Self::Variable { name } => bindings.lookup(*name),
            Self::UnaryOp { op, expr } => op.apply(expr.evaluate(bindings)),
            Self::BinaryOp { left, op, right } => {
                let left = left.evaluate(bindings);
                let right = right.evaluate(bindings);
                op.apply(left, right)
            },
        }
    }

    /// Letters in the expression that `bindings` has no entry for.
    ///
    /// These evaluate to `false`; callers use this to warn about them.
    #[must_use]
    pub fn unbound_variables(&self, bindings: &Bindings) -> BTreeSet<char> {
        self.variables()
            .into_iter()
            .filter(|name| !bindings.contains(*name))
            .collect()
    }
}

/// Fully parenthesized infix form: `(L op R)` for binary nodes, `(-X)` for
/// NOT and the bare letter for variables.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable { name } => write!(f, "{name}"),
            Self::UnaryOp { op, expr } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
        }
    }
}
