/// Lexical errors.
///
/// Raised while a line is split into pieces and each piece is classified.
/// A single unclassifiable piece rejects the whole line; there is no partial
/// tokenization.
pub mod lex_error;
/// Syntax errors.
///
/// Raised by the grammar engine: unexpected tokens, undeclared identifiers,
/// unbalanced braces, and arithmetic that does not fit in 64 bits.
pub mod syntax_error;

pub use lex_error::LexError;
pub use syntax_error::SyntaxError;
use thiserror::Error;

/// Any reason a line was rejected.
///
/// Both kinds are reported to the user with the same marker line. The
/// distinction only records where processing of the line stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// The line could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The line was tokenized but failed to parse or execute.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}
