use crate::{
    error::SyntaxError,
    interpreter::{lexer::Token, state::State},
    operator::{ArithmeticOperator, RelationalOperator},
};

/// Result type used by every grammar rule.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// The effects a grammar rule may perform once it has recognised its syntax.
///
/// A parser is constructed with exactly one mode and keeps it for its whole
/// lifetime. The grammar rules are written once against this trait; whether a
/// rule executes or merely validates is decided by which implementation the
/// parser was built with.
///
/// Declared-identifier checks are not part of the mode. They read
/// [`Mode::state`] and apply equally in both modes.
pub trait Mode {
    /// The state used for declared-identifier checks and value lookups.
    fn state(&self) -> &State;

    /// Registers `name` in the declared set and resets it to zero.
    fn declare(&mut self, name: &str);

    /// Stores the result of an assignment.
    fn assign(&mut self, name: &str, value: i64);

    /// Reads a declared identifier inside an arithmetic expression.
    fn read(&self, name: &str) -> i64;

    /// Combines two operands of a binary arithmetic operator.
    ///
    /// # Errors
    /// Returns [`SyntaxError::Overflow`] if the result does not fit.
    fn apply(&self, op: ArithmeticOperator, lhs: i64, rhs: i64) -> ParseResult<i64>;

    /// Applies unary minus.
    ///
    /// # Errors
    /// Returns [`SyntaxError::Overflow`] if the result does not fit.
    fn negate(&self, value: i64) -> ParseResult<i64>;

    /// Evaluates `lhs op rhs` for two declared identifiers.
    fn compare(&self, op: RelationalOperator, lhs: &str, rhs: &str) -> bool;

    /// Records the value of a `print` statement.
    fn print(&mut self, value: i64);

    /// Runs a `while` loop whose condition and body have been validated.
    ///
    /// # Errors
    /// Propagates any error raised while evaluating the condition or running
    /// the body.
    fn run_while(&mut self, condition: &[Token], body: &[Token]) -> ParseResult<()>;

    /// Runs the chosen arm of an `if` whose condition and arms have been
    /// validated.
    ///
    /// # Errors
    /// Propagates any error raised while evaluating the condition or running
    /// the chosen arm.
    fn run_if(&mut self,
              condition: &[Token],
              then_block: &[Token],
              else_block: &[Token])
              -> ParseResult<()>;
}
