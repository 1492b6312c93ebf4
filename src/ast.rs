/// A binary operator appearing in an expression tree.
///
/// Arithmetic operators produce ordinary integer results; comparison
/// operators produce `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/` (integer division, truncating toward zero)
    Div,
    /// `%` (integer remainder)
    Mod,
    /// `^` (integer exponentiation, right-associative)
    Pow,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `!=`
    NotEqual,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Leaves are integer literals and internal nodes are binary operators. Each
/// node owns its children exclusively; the tree is built bottom-up during
/// parsing and consumed once by the evaluator. Variable reads and assignments
/// are resolved while parsing, so they appear in the tree as plain `Number`
/// leaves holding the value that was read or assigned.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal.
    Number {
        /// The constant value.
        value: i64,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A `printf(...)` statement; prints the value of its expression.
    Print {
        /// The expression whose value is printed.
        expr: Expr,
    },
    /// A bare expression used as a statement.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
}
