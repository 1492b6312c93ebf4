use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns the resulting integer.
///
/// This is a pure function over the tree: variable reads and assignments
/// were already resolved while parsing, so only literals and binary
/// operators remain.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
///
/// # Returns
/// The computed value, or a runtime error for division or modulo by zero, a
/// negative exponent, or arithmetic overflow.
///
/// # Example
/// ```
/// use linecalc::{
///     ast::{BinaryOperator, Expr},
///     interpreter::evaluator::evaluate,
/// };
///
/// let expr = Expr::BinaryOp { left:  Box::new(Expr::Number { value: 2 }),
///                             op:    BinaryOperator::Add,
///                             right: Box::new(Expr::Number { value: 3 }), };
///
/// assert_eq!(evaluate(&expr).unwrap(), 5);
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    match expr {
        Expr::Number { value } => Ok(*value),
        Expr::BinaryOp { left, op, right } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            apply_binary(*op, left, right)
        },
    }
}

/// Applies a binary operator to two evaluated operands.
///
/// Arithmetic uses checked 64-bit operations; division and modulo check the
/// divisor explicitly so a zero divisor reports as `DivisionByZero` rather
/// than overflow. Comparison operators yield `0` or `1`.
fn apply_binary(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
    use BinaryOperator::{
        Add, Div, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Pow, Sub,
    };

    match op {
        Add => left.checked_add(right).ok_or(RuntimeError::Overflow),
        Sub => left.checked_sub(right).ok_or(RuntimeError::Overflow),
        Mul => left.checked_mul(right).ok_or(RuntimeError::Overflow),
        Div => {
            if right == 0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                left.checked_div(right).ok_or(RuntimeError::Overflow)
            }
        },
        Mod => {
            if right == 0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                left.checked_rem(right).ok_or(RuntimeError::Overflow)
            }
        },
        Pow => eval_pow(left, right),
        Less => Ok(i64::from(left < right)),
        LessEqual => Ok(i64::from(left <= right)),
        Greater => Ok(i64::from(left > right)),
        GreaterEqual => Ok(i64::from(left >= right)),
        NotEqual => Ok(i64::from(left != right)),
    }
}

/// Evaluates an exponentiation operation.
///
/// Integer exponentiation uses checked arithmetic. A negative exponent is a
/// runtime error; an exponent beyond `u32::MAX` cannot produce a
/// representable result and reports as overflow.
fn eval_pow(base: i64, exponent: i64) -> EvalResult<i64> {
    if exponent < 0 {
        return Err(RuntimeError::NegativeExponent);
    }

    let exponent = u32::try_from(exponent).map_err(|_| RuntimeError::Overflow)?;
    base.checked_pow(exponent).ok_or(RuntimeError::Overflow)
}
