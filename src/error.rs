/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of one
/// line. Parse errors include unrecognized characters, unexpected tokens,
/// oversized literals, and leftover input after a complete statement.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero, negative exponents, arithmetic overflow, or reading a
/// variable that was never assigned.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Any failure raised while interpreting one line.
///
/// Every variant is local to the line it occurred on: the session context and
/// all variables established by earlier lines survive, and subsequent lines
/// are still accepted.
pub enum Error {
    /// The line could not be tokenized or parsed.
    Parse(ParseError),
    /// The line parsed but failed during evaluation.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
