use crate::{
    error::SyntaxError,
    interpreter::{
        evaluator::core::{Mode, ParseResult},
        lexer::Token,
        parser::core::Parser,
    },
};

impl<'t, M: Mode> Parser<'t, M> {
    /// Parses a declaration.
    ///
    /// Grammar: `declaration := "integer" ID ";"`
    ///
    /// The identifier is registered and reset to zero only by the executing
    /// mode; a dry run merely checks the shape.
    pub(super) fn declaration(&mut self) -> ParseResult<()> {
        self.expect(&Token::Integer)?;
        let name = self.identifier()?;
        self.expect(&Token::Semicolon)?;

        self.mode.declare(name);
        Ok(())
    }

    /// Parses a single statement, dispatching on its first token.
    ///
    /// Grammar: `statement := assignment | print | while | if`
    pub(super) fn statement(&mut self) -> ParseResult<()> {
        match self.peek() {
            Token::Identifier(_) => self.assignment(),
            Token::Print => self.print(),
            Token::While => self.while_loop(),
            Token::If => self.if_else(),
            _ => Err(self.unexpected("a statement")),
        }
    }

    /// Grammar: `assignment := ID "=" aexpr ";"`
    fn assignment(&mut self) -> ParseResult<()> {
        let name = self.declared_identifier()?;
        self.expect(&Token::Assign)?;
        let value = self.expression()?;
        self.expect(&Token::Semicolon)?;

        self.mode.assign(name, value);
        Ok(())
    }

    /// Grammar: `print := "print" aexpr ";"`
    fn print(&mut self) -> ParseResult<()> {
        self.expect(&Token::Print)?;
        let value = self.expression()?;
        self.expect(&Token::Semicolon)?;

        self.mode.print(value);
        Ok(())
    }

    /// Consumes an identifier without checking the declared set.
    pub(super) fn identifier(&mut self) -> ParseResult<&'t str> {
        match self.peek() {
            Token::Identifier(name) => {
                self.advance();
                Ok(name)
            },
            _ => Err(self.unexpected("an identifier")),
        }
    }

    /// Consumes an identifier that must already be declared.
    ///
    /// The check applies in both modes, so undeclared names are rejected even
    /// inside blocks that never run.
    pub(super) fn declared_identifier(&mut self) -> ParseResult<&'t str> {
        let name = self.identifier()?;
        if !self.mode.state().is_declared(name) {
            return Err(SyntaxError::UndeclaredIdentifier { name: name.to_string() });
        }
        Ok(name)
    }
}
