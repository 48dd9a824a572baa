use crate::{
    error::SyntaxError,
    interpreter::{
        evaluator::{
            core::{Mode, ParseResult},
            dry_run::DryRun,
        },
        lexer::Token,
        parser::core::Parser,
    },
};

impl<'t, M: Mode> Parser<'t, M> {
    /// Parses a `while` loop.
    ///
    /// Grammar: `while := "while" "(" bexpr ")" "do" "{" program "}" ";"`
    ///
    /// The condition and body are captured as token slices, validated by dry
    /// runs, and only then handed to the mode. The body is checked exactly
    /// once here even if the loop never iterates.
    pub(super) fn while_loop(&mut self) -> ParseResult<()> {
        self.expect(&Token::While)?;
        self.expect(&Token::LParen)?;
        let condition = self.capture_until(&Token::RParen)?;
        self.expect(&Token::RParen)?;
        self.expect(&Token::Do)?;
        let body = self.capture_block()?;
        self.expect(&Token::Semicolon)?;

        self.validate_condition(condition)?;
        self.validate_block(body)?;

        self.mode.run_while(condition, body)
    }

    /// Parses an `if` statement. The `else` arm is mandatory.
    ///
    /// Grammar:
    /// `if := "if" "(" bexpr ")" "{" program "}" "else" "{" program "}" ";"`
    ///
    /// Both arms are validated before the condition is evaluated, so the arm
    /// that is not taken is still checked.
    pub(super) fn if_else(&mut self) -> ParseResult<()> {
        self.expect(&Token::If)?;
        self.expect(&Token::LParen)?;
        let condition = self.capture_until(&Token::RParen)?;
        self.expect(&Token::RParen)?;
        let then_block = self.capture_block()?;
        self.expect(&Token::Else)?;
        let else_block = self.capture_block()?;
        self.expect(&Token::Semicolon)?;

        self.validate_condition(condition)?;
        self.validate_block(then_block)?;
        self.validate_block(else_block)?;

        self.mode.run_if(condition, then_block, else_block)
    }

    /// Captures the tokens up to, but not including, the first `stop`.
    ///
    /// The boundary is located before the cursor moves, so a missing `stop`
    /// leaves the cursor untouched. On success the cursor rests on `stop`.
    fn capture_until(&mut self, stop: &Token) -> ParseResult<&'t [Token]> {
        let tokens = self.tokens;
        let rest = &tokens[self.pos..];

        match rest.iter().position(|token| token == stop || *token == Token::End) {
            Some(len) if rest[len] == *stop => {
                self.pos += len;
                Ok(&rest[..len])
            },
            _ => Err(SyntaxError::Unterminated { closer: stop.to_string() }),
        }
    }

    /// Captures the tokens between a `{` and its matching `}`.
    ///
    /// Nested braces are tracked by depth. The cursor ends just past the
    /// closing brace; the returned slice excludes both braces.
    fn capture_block(&mut self) -> ParseResult<&'t [Token]> {
        self.expect(&Token::LBrace)?;

        let tokens = self.tokens;
        let start = self.pos;
        let mut depth = 1_usize;

        for (offset, token) in tokens[start..].iter().enumerate() {
            match token {
                Token::LBrace => depth += 1,
                Token::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        self.pos = start + offset + 1;
                        return Ok(&tokens[start..start + offset]);
                    }
                },
                Token::End => break,
                _ => {},
            }
        }

        Err(SyntaxError::UnbalancedBraces)
    }

    /// Checks that a captured condition is exactly one well-formed `bexpr`.
    fn validate_condition(&self, condition: &[Token]) -> ParseResult<()> {
        let mut parser = Parser::new(condition, DryRun::new(self.mode.state()));
        parser.condition()?;
        parser.finish()
    }

    /// Checks that a captured block is a well-formed program.
    fn validate_block(&self, block: &[Token]) -> ParseResult<()> {
        Parser::new(block, DryRun::new(self.mode.state())).program()
    }
}
