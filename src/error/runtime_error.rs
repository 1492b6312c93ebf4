#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero,
    /// Attempted exponentiation with a negative exponent.
    NegativeExponent,
    /// Arithmetic operation overflowed.
    Overflow,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Unknown variable '{name}'."),
            Self::DivisionByZero => write!(f, "Division or modulo by zero."),
            Self::NegativeExponent => write!(f, "Exponent must not be negative."),
            Self::Overflow => write!(f,
                                     "Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
