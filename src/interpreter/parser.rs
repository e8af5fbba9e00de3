use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::converter::convert,
};

/// Result type used by the converter and the tree builders.
pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest tree `build_ast` will produce.
///
/// Evaluation, rendering and teardown recurse once per level, so bounding the
/// depth here keeps them within an ordinary thread stack.
pub const MAX_DEPTH: usize = 512;

/// A finished subtree together with its height.
type Subtree = (Expr, usize);

/// Builds an [`Expr`] tree from a postfix sequence.
///
/// The sequence is scanned left to right with a stack of finished subtrees.
/// A letter pushes a variable leaf. `-` pops one subtree and wraps it in a
/// NOT node. `+`, `*` and `^` pop the right operand, then the left one, and
/// push the joined node.
///
/// An empty sequence yields the literal `F`. Positions in errors are byte
/// offsets into `postfix`.
///
/// # Errors
/// - `StackUnderflow` if an operator finds too few subtrees on the stack.
/// - `UnknownOperator` for any character that is neither a letter nor one of
///   the four operators.
/// - `DanglingOperands` if more than one subtree remains at the end.
/// - `TooDeep` if the tree would be more than [`MAX_DEPTH`] levels deep.
///
/// # Example
/// ```
/// use boolexpr::interpreter::parser::build_ast;
///
/// let expr = build_ast("ab+c*").unwrap();
/// assert_eq!(expr.to_string(), "((a + b) * c)");
///
/// assert_eq!(build_ast("").unwrap().to_string(), "F");
/// ```
pub fn build_ast(postfix: &str) -> ParseResult<Expr> {
    let mut stack: Vec<Subtree> = Vec::new();

    for (position, symbol) in postfix.char_indices() {
        if symbol.is_ascii_alphabetic() {
            stack.push((Expr::variable(symbol), 1));
            continue;
        }

        let (expr, height) = if let Ok(op) = UnaryOperator::try_from(symbol) {
            let [(expr, height)] = pop_operands(&mut stack, symbol, position)?;
            (Expr::UnaryOp { op,
                             expr: Box::new(expr) },
             height)
        } else if let Ok(op) = BinaryOperator::try_from(symbol) {
            let [(left, lh), (right, rh)] = pop_operands(&mut stack, symbol, position)?;
            (Expr::binary(left, op, right), lh.max(rh))
        } else {
            return Err(ParseError::UnknownOperator { symbol, position });
        };

        if height >= MAX_DEPTH {
            return Err(ParseError::TooDeep { position,
                                             limit: MAX_DEPTH });
        }
        stack.push((expr, height + 1));
    }

    if stack.len() > 1 {
        return Err(ParseError::DanglingOperands { count: stack.len() });
    }

    Ok(stack.pop().map_or(Expr::FALLBACK, |(expr, _)| expr))
}

/// Parses an infix expression straight to its AST.
///
/// Equivalent to `build_ast(&convert(expr)?)`.
///
/// # Example
/// ```
/// use boolexpr::interpreter::parser::parse;
///
/// assert_eq!(parse("-(a^b)").unwrap().to_string(), "(-(a ^ b))");
/// ```
pub fn parse(expr: &str) -> ParseResult<Expr> {
    build_ast(&convert(expr)?)
}

/// Pops the `N` operands an operator needs, first operand first.
fn pop_operands<const N: usize>(stack: &mut Vec<Subtree>,
                                operator: char,
                                position: usize)
                                -> ParseResult<[Subtree; N]> {
    let available = stack.len();
    let underflow = ParseError::StackUnderflow { operator,
                                                 position,
                                                 needed: N,
                                                 available };
    if available < N {
        return Err(underflow);
    }

    stack.split_off(available - N).try_into().map_err(|_| underflow)
}
