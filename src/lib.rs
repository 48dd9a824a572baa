//! # minint
//!
//! minint is a line-oriented interpreter for a minimal imperative language
//! with integer variables, arithmetic, `print`, `while` and `if`/`else`.
//! Every input line is a complete program: it is tokenized, parsed and, if
//! valid, executed immediately, producing at most one line of output.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io;

use crate::{config::Config, interpreter::session::Session};

/// Session configuration.
///
/// Holds the settings chosen on the command line: whether a prompt is
/// written, and an optional bound on loop iterations.
pub mod config;
/// Provides the error types for lexing and parsing.
///
/// Every rejected line carries exactly one error, either lexical or
/// syntactic. Both are reported to the user with the same marker line; the
/// detailed message is only logged.
///
/// # Responsibilities
/// - Defines `LexError` for pieces that match no token class.
/// - Defines `SyntaxError` for grammar, declaration and arithmetic failures.
/// - Wraps both in `LineError` so `?` can thread them through a line.
pub mod error;
/// Orchestrates the processing of a line.
///
/// Ties together the lexer, the grammar engine, its two modes, the shared
/// state and the REPL session.
///
/// # Responsibilities
/// - Converts lines to tokens and tokens to effects.
/// - Validates control-flow blocks before executing them.
/// - Drives the read-respond loop.
pub mod interpreter;
/// Arithmetic and relational operators.
///
/// Maps operator tokens to operations and applies them with overflow checks.
pub mod operator;

/// Runs `source` as if every line had been typed into a fresh session.
///
/// Returns everything the session wrote. Processing stops at the first blank
/// line, exactly as in an interactive session.
///
/// # Errors
/// Returns an error only if writing the output fails.
///
/// # Examples
/// ```
/// use minint::{config::Config, run_script};
///
/// let source = "integer i ; integer s ; i = 0 ; s = 0 ; while ( i < s ) do { } ;\nprint 1 ; print 2 ;\n";
/// assert_eq!(run_script(source, Config::quiet()).unwrap(), ">> 1 2\n");
///
/// let source = "print x ;\n";
/// assert_eq!(run_script(source, Config::quiet()).unwrap(), ">> Syntax Error!\n");
/// ```
pub fn run_script(source: &str, config: Config) -> io::Result<String> {
    let mut session = Session::new(config);
    let mut output = Vec::new();

    session.repl(source.as_bytes(), &mut output)?;

    Ok(String::from_utf8_lossy(&output).into_owned())
}
