#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The input contained a character sequence that is not part of the
    /// language.
    UnrecognizedToken {
        /// The offending slice of the input.
        text: String,
    },
    /// A numeric literal did not fit into a 64-bit integer.
    LiteralTooLarge {
        /// The literal as written.
        text: String,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The token actually encountered.
        found:    String,
    },
    /// Reached the end of the line unexpectedly.
    UnexpectedEndOfInput,
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedToken { text } => {
                write!(f, "Syntax error: unrecognized token '{text}'.")
            },

            Self::LiteralTooLarge { text } => {
                write!(f, "Syntax error: numeric literal '{text}' is too large.")
            },

            Self::UnexpectedToken { expected, found } => {
                write!(f, "Syntax error: expected {expected} but found {found}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Syntax error: unexpected end of line."),

            Self::UnexpectedTrailingTokens { token } => write!(f,
                                                               "Syntax error: extra tokens after expression, starting at {token}."),
        }
    }
}

impl std::error::Error for ParseError {}
