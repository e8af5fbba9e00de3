use thiserror::Error;

/// Represents all errors that can occur while converting or building an
/// expression.
///
/// Positions are zero-based byte offsets into the string that was being read:
/// the infix source for the converter, the postfix sequence for the builders.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// An opening parenthesis `(` was never closed.
    #[error("Error at position {position}: Unmatched opening parenthesis '('.")]
    UnmatchedOpeningParen {
        /// Offset of the unmatched `(`.
        position: usize,
    },
    /// A closing parenthesis `)` had no matching `(`.
    #[error("Error at position {position}: Unmatched closing parenthesis ')'.")]
    UnmatchedClosingParen {
        /// Offset of the unmatched `)`.
        position: usize,
    },
    /// The expression contained no operands at all.
    #[error("Expression is empty.")]
    EmptyExpression,
    /// An operator was reached with fewer operands available than it takes.
    #[error("Error at position {position}: Operator '{operator}' needs {needed} operand(s) but only {available} available.")]
    StackUnderflow {
        /// The operator symbol.
        operator:  char,
        /// Offset of the operator in the postfix sequence.
        position:  usize,
        /// Arity of the operator.
        needed:    usize,
        /// Operands that were on the stack.
        available: usize,
    },
    /// A symbol outside the supported operator set reached a builder.
    #[error("Error at position {position}: Unknown operator '{symbol}'.")]
    UnknownOperator {
        /// The offending character.
        symbol:   char,
        /// Offset of the character in the postfix sequence.
        position: usize,
    },
    /// The expression nests deeper than the builders accept.
    #[error("Error at position {position}: Expression nests deeper than {limit} levels.")]
    TooDeep {
        /// Offset of the operator that crossed the limit.
        position: usize,
        /// The maximum depth.
        limit:    usize,
    },
    /// Operands were left over once every operator had been applied.
    #[error("Expression leaves {count} operands without an operator to join them.")]
    DanglingOperands {
        /// Number of subtrees left on the stack.
        count: usize,
    },
}
