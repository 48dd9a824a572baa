/// Settings for a [`Session`](crate::interpreter::session::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Write the prompt before every line is read.
    pub show_prompt: bool,
    /// Maximum number of iterations of a single `while` statement.
    ///
    /// `None` lets loops run unbounded: an always-true condition never returns.
    pub loop_limit:  Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self { show_prompt: true,
               loop_limit:  None, }
    }
}

impl Config {
    /// A configuration for non-interactive use: no prompt, unbounded loops.
    #[must_use]
    pub const fn quiet() -> Self {
        Self { show_prompt: false,
               loop_limit:  None, }
    }
}
