/// The lexer splits a line into classified tokens.
///
/// Each whitespace-delimited piece is classified on its own as punctuation,
/// keyword, number or identifier. One bad piece rejects the whole line.
///
/// # Responsibilities
/// - Defines the closed `Token` set, including the `End` sentinel.
/// - Enforces the ten-character limit on numbers and identifiers.
/// - Reports lexical errors with the offending piece.
pub mod lexer;
/// The grammar engine: a recursive-descent parser fused with evaluation.
///
/// There is no syntax tree. Each rule checks its syntax and, through the
/// parser's mode, immediately performs its effect. Loop bodies and branch
/// arms are kept as token slices and re-parsed whenever they run.
///
/// # Responsibilities
/// - One method per grammar rule, sharing `peek`, `accept` and `expect`.
/// - Captures condition and block slices for `while` and `if`.
/// - Validates captured slices with dry runs before anything executes.
pub mod parser;
/// The two modes a parser can be built with.
///
/// The executing mode mutates state and produces output; the dry-run mode is
/// used for static validation and has no effects at all.
///
/// # Responsibilities
/// - Declares the `Mode` trait that every grammar rule acts through.
/// - Runs loops and branches by re-parsing captured blocks.
/// - Performs checked 64-bit arithmetic.
pub mod evaluator;
/// Symbol table and declared set.
///
/// Persists for the whole session and is lent to every parser in turn.
pub mod state;
/// One REPL turn and the loop that drives them.
///
/// # Responsibilities
/// - Lexes, parses and executes a line, collecting output fragments.
/// - Formats the single output line or the error marker.
/// - Reads lines until end of input or a blank line.
pub mod session;
