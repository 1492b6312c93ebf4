use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// `printf`
    #[token("printf")]
    Printf,
    /// Identifier tokens; variable names such as `x` or `count`. Identifiers
    /// are letter runs and never contain digits.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `!=`
    ///
    /// A bare `!` matches no rule, so `!` without a following `=` is a
    /// lexical error.
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,

    /// Tabs, spaces and feeds.
    #[regex(r"[ \t\f]+", logos::skip)]
    Ignored,
}

/// Tokenizes one line of input.
///
/// Runs the lexer to completion and collects the classified tokens. A blank
/// line yields an empty vector. End of input is simply the end of the
/// sequence; the parser's lookahead observes it as often as it likes without
/// side effects.
///
/// # Errors
/// - `UnrecognizedToken` for a character sequence outside the language.
/// - `LiteralTooLarge` for a digit run that does not fit into an `i64`.
pub fn tokenize(line: &str) -> Result<Vec<Token>, ParseError> {
    let mut lexer = Token::lexer(line);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            let text = lexer.slice().to_string();
            return Err(if text.starts_with(|c: char| c.is_ascii_digit()) {
                           ParseError::LiteralTooLarge { text }
                       } else {
                           ParseError::UnrecognizedToken { text }
                       });
        }
    }

    Ok(tokens)
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the digit run overflows an `i64`, turning the slice into a
///   lexer error.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
