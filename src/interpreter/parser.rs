/// The parser cursor and the `program` rule.
///
/// Defines the `Parser` cursor together with the token primitives every rule is
/// built from: `peek`, `accept` and `expect`.
pub mod core;

/// Declarations and simple statements.
///
/// Implements `declaration`, `statement`, `assignment` and `print`.
pub mod statement;

/// Arithmetic expressions.
///
/// Implements `aexpr`, `term` and `factor` with left-associative precedence
/// climbing and a prefix unary minus.
pub mod expression;

/// Boolean conditions.
///
/// Implements `bexpr`, a single relational comparison between two declared
/// identifiers.
pub mod condition;

/// Control flow.
///
/// Implements `while` and `if`: capturing condition and block tokens,
/// validating them with dry-run parsers, then handing them to the mode for
/// execution.
pub mod block;
