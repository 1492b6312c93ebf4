/// Binary operator parsing.
///
/// Implements the left-associative precedence tiers: addition, subtraction
/// and comparisons at the lowest level, then multiplication, division and
/// modulo above them.
pub mod binary;

/// Core parsing logic.
///
/// Contains the parser result type, the expression entry point, and the
/// token-matching helper shared by the other parser modules.
pub mod core;

/// Factor parsing.
///
/// Handles the atoms of the grammar: number literals, parenthesized
/// sub-expressions, identifiers (reads and assignments), and the
/// right-associative `^` postfix.
pub mod factor;

/// Statement parsing.
///
/// Dispatches one line to either the `printf` statement or a bare
/// expression.
pub mod statement;
