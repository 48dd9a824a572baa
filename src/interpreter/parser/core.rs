use crate::{
    error::SyntaxError,
    interpreter::{
        evaluator::core::{Mode, ParseResult},
        lexer::Token,
    },
};

/// Returned by [`Parser::peek`] once the cursor has passed the last token.
static END: Token = Token::End;

/// A recursive-descent parser that performs its effects through a [`Mode`].
///
/// The parser walks a borrowed token slice. A top-level line ends in an
/// explicit [`Token::End`]; captured blocks are plain sub-slices and reading
/// past their last token yields `End` as well. The cursor never advances past
/// `End`, so every rule fails rather than reads beyond the input.
///
/// # Example
/// ```
/// use minint::interpreter::{
///     evaluator::execute::Execute, lexer::tokenize, parser::core::Parser, state::State,
/// };
///
/// let tokens = tokenize("integer x ; x = 2 * 3 ; print x - 1 ;").unwrap();
/// let mut state = State::new();
/// let mut output = Vec::new();
///
/// let mut parser = Parser::new(&tokens, Execute::new(&mut state, &mut output, None));
/// parser.program().unwrap();
///
/// assert_eq!(output, vec!["5".to_string()]);
/// assert_eq!(state.value("x"), 6);
/// ```
#[derive(Debug)]
pub struct Parser<'t, M> {
    pub(super) tokens: &'t [Token],
    pub(super) pos:    usize,
    pub(super) mode:   M,
}

impl<'t, M: Mode> Parser<'t, M> {
    /// Creates a parser positioned at the first token of `tokens`.
    pub const fn new(tokens: &'t [Token], mode: M) -> Self {
        Self { tokens,
               pos: 0,
               mode }
    }

    /// Returns the current token without advancing. Never fails.
    #[must_use]
    pub fn peek(&self) -> &'t Token {
        self.tokens.get(self.pos).unwrap_or(&END)
    }

    /// Advances past the current token, unless it is the end of input.
    pub(super) fn advance(&mut self) {
        if self.pos < self.tokens.len() && self.tokens[self.pos] != Token::End {
            self.pos += 1;
        }
    }

    /// Advances and returns `true` if the current token is `expected`.
    ///
    /// Only meaningful for tokens without a payload.
    pub fn accept(&mut self, expected: &Token) -> bool {
        if self.peek() == expected && *expected != Token::End {
            self.advance();
            return true;
        }
        false
    }

    /// Accepts `expected` or fails.
    ///
    /// # Errors
    /// Returns [`SyntaxError::UnexpectedToken`] if the current token differs.
    pub fn expect(&mut self, expected: &Token) -> ParseResult<()> {
        if self.accept(expected) {
            return Ok(());
        }
        Err(self.unexpected(&format!("'{expected}'")))
    }

    /// Succeeds only if every token has been consumed.
    ///
    /// # Errors
    /// Returns [`SyntaxError::UnexpectedToken`] if input remains.
    pub fn finish(&self) -> ParseResult<()> {
        match self.peek() {
            Token::End => Ok(()),
            _ => Err(self.unexpected("end of line")),
        }
    }

    /// Builds an error describing the current token.
    pub(super) fn unexpected(&self, expected: &str) -> SyntaxError {
        SyntaxError::UnexpectedToken { expected: expected.to_string(),
                                       found:    self.peek().describe(), }
    }

    /// Parses a whole program: all declarations first, then all statements.
    ///
    /// Grammar: `program := declaration* statement*`
    ///
    /// Once the first statement has been seen, a further `integer` token is a
    /// syntax error.
    ///
    /// # Errors
    /// Propagates the first error raised by any declaration or statement.
    pub fn program(&mut self) -> ParseResult<()> {
        while *self.peek() == Token::Integer {
            self.declaration()?;
        }
        while *self.peek() != Token::End {
            self.statement()?;
        }
        Ok(())
    }
}
