use tracing::{debug, trace};

use crate::{
    error::SyntaxError,
    interpreter::{
        evaluator::core::{Mode, ParseResult},
        lexer::Token,
        parser::core::Parser,
        state::State,
    },
    operator::{ArithmeticOperator, RelationalOperator},
};

/// Executing mode.
///
/// Borrows the session state and the output fragment list of the line being
/// processed. Nested blocks are run by parsers holding a reborrow of the same
/// mode, so every iteration and branch writes to the same state and appends
/// to the same fragment list in execution order.
#[derive(Debug)]
pub struct Execute<'s> {
    state:      &'s mut State,
    output:     &'s mut Vec<String>,
    loop_limit: Option<u64>,
}

impl<'s> Execute<'s> {
    /// Creates an executing mode.
    ///
    /// `loop_limit` bounds the number of iterations of any single `while`
    /// statement; `None` lets loops run forever.
    pub fn new(state: &'s mut State,
               output: &'s mut Vec<String>,
               loop_limit: Option<u64>)
               -> Self {
        Self { state,
               output,
               loop_limit }
    }

    fn reborrow(&mut self) -> Execute<'_> {
        Execute { state:      &mut *self.state,
                  output:     &mut *self.output,
                  loop_limit: self.loop_limit, }
    }

    /// Parses and evaluates a captured condition.
    fn holds(&mut self, condition: &[Token]) -> ParseResult<bool> {
        let mut parser = Parser::new(condition, self.reborrow());
        let holds = parser.condition()?;
        parser.finish()?;

        Ok(holds)
    }

    /// Parses and executes a captured block as a fresh program.
    fn run_block(&mut self, block: &[Token]) -> ParseResult<()> {
        Parser::new(block, self.reborrow()).program()
    }
}

impl Mode for Execute<'_> {
    fn state(&self) -> &State {
        &*self.state
    }

    fn declare(&mut self, name: &str) {
        trace!(name, "declare");
        self.state.declare(name);
    }

    fn assign(&mut self, name: &str, value: i64) {
        trace!(name, value, "assign");
        self.state.assign(name, value);
    }

    fn read(&self, name: &str) -> i64 {
        self.state.value(name)
    }

    fn apply(&self, op: ArithmeticOperator, lhs: i64, rhs: i64) -> ParseResult<i64> {
        op.apply(lhs, rhs).ok_or(SyntaxError::Overflow)
    }

    fn negate(&self, value: i64) -> ParseResult<i64> {
        value.checked_neg().ok_or(SyntaxError::Overflow)
    }

    fn compare(&self, op: RelationalOperator, lhs: &str, rhs: &str) -> bool {
        op.holds(self.state.value(lhs), self.state.value(rhs))
    }

    fn print(&mut self, value: i64) {
        self.output.push(value.to_string());
    }

    fn run_while(&mut self, condition: &[Token], body: &[Token]) -> ParseResult<()> {
        let mut iterations: u64 = 0;

        while self.holds(condition)? {
            if let Some(limit) = self.loop_limit
               && iterations >= limit
            {
                return Err(SyntaxError::IterationLimit { limit });
            }
            iterations += 1;
            trace!(iterations, "loop iteration");

            self.run_block(body)?;
        }
        debug!(iterations, "loop finished");

        Ok(())
    }

    fn run_if(&mut self,
              condition: &[Token],
              then_block: &[Token],
              else_block: &[Token])
              -> ParseResult<()> {
        let chosen = if self.holds(condition)? { then_block } else { else_block };
        self.run_block(chosen)
    }
}
