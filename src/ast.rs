use std::collections::BTreeSet;

/// An abstract syntax tree (AST) node representing a boolean expression.
///
/// `Expr` is a closed sum type: every operator the language knows is covered
/// by [`BinaryOperator`] or [`UnaryOperator`], so evaluation never meets an
/// operator it cannot handle. Each node exclusively owns its children and the
/// whole tree is released when the root is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Reference to a variable or literal letter (`a`, `T`, `f`, ...).
    Variable {
        /// The letter naming the variable.
        name: char,
    },
    /// A unary operation (logical NOT).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation (OR, AND, XOR).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// The expression an empty postfix sequence stands for: the literal `F`.
    pub const FALLBACK: Self = Self::Variable { name: 'F' };

    /// Creates a variable leaf.
    #[must_use]
    pub const fn variable(name: char) -> Self {
        Self::Variable { name }
    }

    /// Wraps `expr` in a NOT node.
    #[must_use]
    pub fn not(expr: Self) -> Self {
        Self::UnaryOp { op:   UnaryOperator::Not,
                        expr: Box::new(expr), }
    }

    /// Joins two operands with a binary operator.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Returns the symbol shown for this node in a display tree.
    ///
    /// ## Example
    /// ```
    /// use boolexpr::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(Expr::variable('a'), BinaryOperator::Xor, Expr::variable('b'));
    /// assert_eq!(expr.symbol(), '^');
    /// ```
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Variable { name } => *name,
            Self::UnaryOp { op, .. } => op.symbol(),
            Self::BinaryOp { op, .. } => op.symbol(),
        }
    }

    /// Collects every distinct letter referenced by the expression.
    ///
    /// ## Example
    /// ```
    /// use boolexpr::interpreter::parser::parse;
    ///
    /// let expr = parse("-T+b*(a+b)").unwrap();
    /// assert_eq!(expr.variables().into_iter().collect::<String>(), "Tab");
    /// ```
    #[must_use]
    pub fn variables(&self) -> BTreeSet<char> {
        let mut names = BTreeSet::new();
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            match node {
                Self::Variable { name } => {
                    names.insert(*name);
                },
                Self::UnaryOp { expr, .. } => pending.push(expr),
                Self::BinaryOp { left, right, .. } => {
                    pending.push(right);
                    pending.push(left);
                },
            }
        }

        names
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Logical or (`+`)
    Or,
    /// Logical and (`*`)
    And,
    /// Logical exclusive or (`^`)
    Xor,
}

impl BinaryOperator {
    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Or => '+',
            Self::And => '*',
            Self::Xor => '^',
        }
    }

    /// Applies the operator to two truth values.
    #[must_use]
    pub const fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Self::Or => left || right,
            Self::And => left && right,
            Self::Xor => left != right,
        }
    }
}

impl TryFrom<char> for BinaryOperator {
    type Error = char;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Self::Or),
            '*' => Ok(Self::And),
            '^' => Ok(Self::Xor),
            other => Err(other),
        }
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Logical NOT (`-x`).
    Not,
}

impl UnaryOperator {
    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Not => '-',
        }
    }

    /// Applies the operator to a truth value.
    #[must_use]
    pub const fn apply(self, value: bool) -> bool {
        match self {
            Self::Not => !value,
        }
    }
}

impl TryFrom<char> for UnaryOperator {
    type Error = char;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '-' => Ok(Self::Not),
            other => Err(other),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
