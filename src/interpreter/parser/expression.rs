use crate::{
    interpreter::{
        evaluator::core::{Mode, ParseResult},
        lexer::Token,
        parser::core::Parser,
    },
    operator::ArithmeticOperator,
};

impl<M: Mode> Parser<'_, M> {
    /// Parses addition and subtraction.
    ///
    /// Grammar: `aexpr := term (("+" | "-") term)*`
    ///
    /// Operators of equal precedence associate to the left.
    pub(super) fn expression(&mut self) -> ParseResult<i64> {
        let mut value = self.term()?;
        loop {
            let op = match self.peek() {
                Token::Plus => ArithmeticOperator::Add,
                Token::Minus => ArithmeticOperator::Sub,
                _ => break,
            };
            self.advance();

            let rhs = self.term()?;
            value = self.mode.apply(op, value, rhs)?;
        }
        Ok(value)
    }

    /// Parses multiplication.
    ///
    /// Grammar: `term := factor ("*" factor)*`
    fn term(&mut self) -> ParseResult<i64> {
        let mut value = self.factor()?;
        while self.accept(&Token::Star) {
            let rhs = self.factor()?;
            value = self.mode.apply(ArithmeticOperator::Mul, value, rhs)?;
        }
        Ok(value)
    }

    /// Parses an operand with an optional leading minus.
    ///
    /// Grammar: `factor := ["-"] (NUM | ID | "(" aexpr ")")`
    ///
    /// The minus applies to the operand alone, so `- a * b` is `(-a) * b`.
    /// Only one minus is allowed per factor.
    fn factor(&mut self) -> ParseResult<i64> {
        let negated = self.accept(&Token::Minus);

        let value = match self.peek() {
            Token::Number(value) => {
                self.advance();
                *value
            },
            Token::Identifier(_) => {
                let name = self.declared_identifier()?;
                self.mode.read(name)
            },
            Token::LParen => {
                self.advance();
                let value = self.expression()?;
                self.expect(&Token::RParen)?;
                value
            },
            _ => return Err(self.unexpected("a number, an identifier or '('")),
        };

        if negated { self.mode.negate(value) } else { Ok(value) }
    }
}
