use crate::{
    interpreter::{
        evaluator::core::{Mode, ParseResult},
        parser::core::Parser,
    },
    operator::RelationalOperator,
};

impl<M: Mode> Parser<'_, M> {
    /// Parses and evaluates a comparison.
    ///
    /// Grammar: `bexpr := ID ("==" | "!=" | "<" | ">") ID`
    ///
    /// Both operands must be declared identifiers; literals and expressions
    /// are not allowed. A dry run always yields `false`.
    ///
    /// # Errors
    /// Returns a syntax error for a missing or undeclared operand or a missing
    /// relational operator.
    pub fn condition(&mut self) -> ParseResult<bool> {
        let lhs = self.declared_identifier()?;

        let Some(op) = RelationalOperator::from_token(self.peek()) else {
            return Err(self.unexpected("'==', '!=', '<' or '>'"));
        };
        self.advance();

        let rhs = self.declared_identifier()?;

        Ok(self.mode.compare(op, lhs, rhs))
    }
}
