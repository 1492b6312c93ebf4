/// The session context holding the symbol table.
///
/// Stores the variable bindings for one interpreter session. A single owned
/// instance is passed by reference through the parser and evaluator; it is
/// the only state that survives from one line to the next.
pub mod context;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the expression tree and performs all arithmetic
/// and comparison operations with checked 64-bit integer arithmetic. It is a
/// pure function over the tree: variable reads and assignments are already
/// resolved by the time it runs.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Reports runtime errors such as division by zero, negative exponents, or
///   overflow.
pub mod evaluator;
/// The lexer module tokenizes one line of source code for further parsing.
///
/// The lexer (tokenizer) reads the raw line and produces a sequence of
/// tokens, each corresponding to a meaningful language element such as a
/// number, an identifier, an operator, or the `printf` keyword.
///
/// # Responsibilities
/// - Converts the input character stream into classified tokens.
/// - Handles numeric literals, identifiers, and one- and two-character
///   operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token stream with one token of lookahead and
/// constructs an expression tree honoring operator precedence and
/// associativity. Assignments are evaluated eagerly while parsing and stored
/// in the session context.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting expected/actual tokens.
/// - Resolves variable reads and assignments through the session context.
pub mod parser;
