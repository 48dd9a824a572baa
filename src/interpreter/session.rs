use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::{
    config::Config,
    error::{LexError, LineError},
    interpreter::{
        evaluator::execute::Execute, lexer::tokenize, parser::core::Parser, state::State,
    },
};

/// Written before each line is read when prompting is enabled.
pub const PROMPT: &str = ">> ";
/// Precedes the output fragments of a successful line.
pub const OUTPUT_PREFIX: &str = ">> ";
/// The single line reported for any lexical or syntax error.
pub const ERROR_MARKER: &str = ">> Syntax Error!";

/// An interactive session.
///
/// Owns the [`State`] that every line reads and writes. Statements executed
/// before an error keep their effects; only the failing line's output is
/// discarded.
#[derive(Debug, Default)]
pub struct Session {
    state:  State,
    config: Config,
}

impl Session {
    /// Creates a session with an empty state.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { state: State::new(),
               config }
    }

    /// The state accumulated so far.
    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Lexes, parses and executes one line.
    ///
    /// Returns the output fragments in the order the `print` statements ran.
    /// A blank line produces no fragments and changes nothing.
    ///
    /// # Errors
    /// Returns a [`LineError`] if the line fails to tokenize or parse, or if
    /// execution fails.
    ///
    /// # Example
    /// ```
    /// use minint::{config::Config, interpreter::session::Session};
    ///
    /// let mut session = Session::new(Config::quiet());
    ///
    /// assert_eq!(session.run_line("integer x ; x = 4 ; print x ; print x * x ;").unwrap(),
    ///            vec!["4", "16"]);
    /// assert!(session.run_line("print y ;").is_err());
    /// ```
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn run_line(&mut self, line: &str) -> Result<Vec<String>, LineError> {
        let tokens = tokenize(line)?;
        let mut fragments = Vec::new();

        if tokens.is_empty() {
            return Ok(fragments);
        }

        let mode = Execute::new(&mut self.state, &mut fragments, self.config.loop_limit);
        Parser::new(&tokens, mode).program()?;

        Ok(fragments)
    }

    /// Runs one line and renders the response, if there is one.
    ///
    /// - `Some(">> a b c")` when at least one `print` ran,
    /// - `None` when the line succeeded without printing,
    /// - `Some(ERROR_MARKER)` when the line was rejected.
    pub fn respond(&mut self, line: &str) -> Option<String> {
        match self.run_line(line) {
            Ok(fragments) if fragments.is_empty() => None,
            Ok(fragments) => Some(format!("{OUTPUT_PREFIX}{}", fragments.join(" "))),
            Err(error) => {
                debug!(%error, "line rejected");
                Some(ERROR_MARKER.to_string())
            },
        }
    }

    /// Reads lines from `input` and writes responses to `output`.
    ///
    /// The loop ends at end of input or at the first blank line. A line that
    /// is not valid UTF-8 is rejected like any other lexical error and the
    /// loop moves on to the next one.
    ///
    /// # Errors
    /// Returns any I/O error raised by either stream.
    pub fn repl<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        let mut buffer = Vec::new();

        loop {
            if self.config.show_prompt {
                write!(output, "{PROMPT}")?;
                output.flush()?;
            }

            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                debug!("end of input");
                break;
            }

            let response = match std::str::from_utf8(&buffer) {
                Ok(line) if line.trim().is_empty() => {
                    debug!("blank line, ending session");
                    break;
                },
                Ok(line) => self.respond(line),
                Err(e) => {
                    let valid_up_to = e.valid_up_to();
                    let error = LineError::from(LexError::InvalidEncoding { valid_up_to });
                    debug!(%error, "line rejected");
                    Some(ERROR_MARKER.to_string())
                },
            };

            if let Some(response) = response {
                writeln!(output, "{response}")?;
            }
        }

        output.flush()
    }
}
