use std::fmt;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::parser::{ParseResult, build_ast},
};

/// Indentation emitted for each ancestor above the marked level.
const INDENT: &str = "    ";
/// Prefix marking a node as the child of the line above it at lower depth.
const MARKER: &str = "|-- ";

/// A node of the tree shown to the user.
///
/// Display nodes carry only a symbol and up to two children. Binary operators
/// have both children, NOT has only a left child and leaves have none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNode {
    /// The operator or letter shown for this node.
    pub data:  char,
    /// First operand.
    pub left:  Option<Box<Self>>,
    /// Second operand.
    pub right: Option<Box<Self>>,
}

impl DisplayNode {
    /// Creates a node without children.
    #[must_use]
    pub const fn leaf(data: char) -> Self {
        Self { data,
               left: None,
               right: None }
    }

    /// Returns a lazy, depth-first outline of the tree.
    ///
    /// Each call starts a fresh walk, so the outline can be produced any
    /// number of times.
    ///
    /// # Example
    /// ```
    /// use boolexpr::interpreter::display::build_display_tree;
    ///
    /// let tree = build_display_tree("ab+").unwrap();
    /// let lines: Vec<String> = tree.outline().collect();
    /// assert_eq!(lines, ["+", "|-- a", "|-- b"]);
    /// ```
    #[must_use]
    pub fn outline(&self) -> Outline<'_> {
        Outline { pending: vec![(self, 0)] }
    }
}

impl From<&Expr> for DisplayNode {
    fn from(expr: &Expr) -> Self {
        match expr {
            Expr::Variable { name } => Self::leaf(*name),
            Expr::UnaryOp { op, expr } => Self { data:  op.symbol(),
                                                 left:  Some(Box::new(Self::from(&**expr))),
                                                 right: None, },
            Expr::BinaryOp { left, op, right } => {
                Self { data:  op.symbol(),
                       left:  Some(Box::new(Self::from(&**left))),
                       right: Some(Box::new(Self::from(&**right))), }
            },
        }
    }
}

impl fmt::Display for DisplayNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.outline().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Iterator over the lines of a [`DisplayNode`] outline.
///
/// The root is printed bare. A node at depth `d` is indented by `d - 1`
/// blocks of four spaces followed by `|-- `. Children are visited left
/// before right.
#[derive(Debug, Clone)]
pub struct Outline<'a> {
    pending: Vec<(&'a DisplayNode, usize)>,
}

impl Iterator for Outline<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.pending.pop()?;

        if let Some(right) = &node.right {
            self.pending.push((&**right, depth + 1));
        }
        if let Some(left) = &node.left {
            self.pending.push((&**left, depth + 1));
        }

        let mut line = String::with_capacity(depth * INDENT.len() + 1);
        if depth > 0 {
            line.push_str(&INDENT.repeat(depth - 1));
            line.push_str(MARKER);
        }
        line.push(node.data);
        Some(line)
    }
}

/// Builds the display tree for a postfix sequence.
///
/// The tree is derived from the same AST that is evaluated, so the picture
/// always matches the result, NOT nodes included.
///
/// # Errors
/// - `EmptyExpression` if `postfix` is empty.
/// - Any error [`build_ast`] reports.
///
/// # Example
/// ```
/// use boolexpr::interpreter::display::build_display_tree;
///
/// let tree = build_display_tree("a-b*").unwrap();
/// assert_eq!(tree.to_string(), "*\n|-- -\n    |-- a\n|-- b");
/// assert!(build_display_tree("").is_err());
/// ```
pub fn build_display_tree(postfix: &str) -> ParseResult<DisplayNode> {
    if postfix.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    Ok(DisplayNode::from(&build_ast(postfix)?))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::converter::convert;

    fn outline_of(infix: &str) -> Vec<String> {
        build_display_tree(&convert(infix).unwrap()).unwrap().outline().collect()
    }

    #[test]
    fn single_letter_is_a_bare_root() {
        assert_eq!(outline_of("a"), ["a"]);
    }

    #[test]
    fn nested_operators_indent_by_depth() {
        assert_eq!(outline_of("a+b*c"), ["+", "|-- a", "|-- *", "    |-- b", "    |-- c"]);
    }

    #[test]
    fn left_subtree_is_printed_first() {
        assert_eq!(outline_of("(a^b)*(-c)"),
                   ["*", "|-- ^", "    |-- a", "    |-- b", "|-- -", "    |-- c"]);
    }

    #[test]
    fn not_has_a_single_child() {
        let tree = build_display_tree("a-").unwrap();
        assert_eq!(tree,
                   DisplayNode { data:  '-',
                                 left:  Some(Box::new(DisplayNode::leaf('a'))),
                                 right: None, });
    }

    #[test]
    fn outline_can_be_restarted() {
        let tree = build_display_tree("ab^c+").unwrap();
        let outline = tree.outline();
        let first: Vec<String> = outline.clone().collect();
        let second: Vec<String> = outline.collect();
        assert_eq!(first, second);
        assert_eq!(first, tree.outline().collect::<Vec<_>>());
    }

    #[test]
    fn structural_errors_are_reported() {
        assert_eq!(build_display_tree(""), Err(ParseError::EmptyExpression));
        assert!(matches!(build_display_tree("a*"), Err(ParseError::StackUnderflow { .. })));
        assert!(matches!(build_display_tree("ab/"), Err(ParseError::UnknownOperator { .. })));
    }
}
