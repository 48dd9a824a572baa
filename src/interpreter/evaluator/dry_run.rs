use crate::{
    interpreter::{
        evaluator::core::{Mode, ParseResult},
        lexer::Token,
        state::State,
    },
    operator::{ArithmeticOperator, RelationalOperator},
};

/// Validation-only mode.
///
/// Holds a shared borrow of the state so identifiers can be checked against
/// the declared set. Every value is zero and every condition is false, so
/// arithmetic can never overflow and loops never iterate.
#[derive(Debug, Clone, Copy)]
pub struct DryRun<'s> {
    state: &'s State,
}

impl<'s> DryRun<'s> {
    /// Creates a dry-run mode over `state`.
    #[must_use]
    pub const fn new(state: &'s State) -> Self {
        Self { state }
    }
}

impl Mode for DryRun<'_> {
    fn state(&self) -> &State {
        self.state
    }

    fn declare(&mut self, _name: &str) {}

    fn assign(&mut self, _name: &str, _value: i64) {}

    fn read(&self, _name: &str) -> i64 {
        0
    }

    fn apply(&self, _op: ArithmeticOperator, _lhs: i64, _rhs: i64) -> ParseResult<i64> {
        Ok(0)
    }

    fn negate(&self, _value: i64) -> ParseResult<i64> {
        Ok(0)
    }

    fn compare(&self, _op: RelationalOperator, _lhs: &str, _rhs: &str) -> bool {
        false
    }

    fn print(&mut self, _value: i64) {}

    fn run_while(&mut self, _condition: &[Token], _body: &[Token]) -> ParseResult<()> {
        Ok(())
    }

    fn run_if(&mut self,
              _condition: &[Token],
              _then_block: &[Token],
              _else_block: &[Token])
              -> ParseResult<()> {
        Ok(())
    }
}
