use thiserror::Error;

/// Represents all errors raised by the grammar engine.
///
/// Errors carry no position: blocks are re-parsed as independent slices, so an
/// index would be relative to whichever slice happened to fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The current token does not fit the rule being parsed.
    #[error("Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// Description of what the rule accepts at this point.
        expected: String,
        /// Description of the token actually found.
        found:    String,
    },
    /// An identifier was read or written before `integer <name> ;` ran.
    #[error("Identifier '{name}' is used before its declaration.")]
    UndeclaredIdentifier {
        /// The undeclared identifier.
        name: String,
    },
    /// A `{` has no matching `}` before the end of the line.
    #[error("Unbalanced braces: a block is never closed.")]
    UnbalancedBraces,
    /// A delimited region has no closing token before the end of the line.
    #[error("Expected '{closer}' before the end of the line.")]
    Unterminated {
        /// The closing token that was never found.
        closer: String,
    },
    /// A checked arithmetic operation left the 64-bit range.
    #[error("Integer overflow while trying to compute result.")]
    Overflow,
    /// A `while` loop exceeded the configured iteration limit.
    #[error("Loop exceeded the limit of {limit} iterations.")]
    IterationLimit {
        /// The configured limit.
        limit: u64,
    },
}
