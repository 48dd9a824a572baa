/// The capability interface shared by both parser modes.
///
/// Declares the `Mode` trait through which every grammar rule performs its
/// effects, and the `ParseResult` alias.
pub mod core;

/// The dry-run mode used by the static validation pass.
///
/// Reads the declared set but never mutates state, never produces output and
/// never runs loops or branches.
pub mod dry_run;

/// The execute mode used for top-level lines and for running blocks.
///
/// Mutates the shared state, computes checked arithmetic, collects output
/// fragments and re-parses captured blocks as loops and branches demand.
pub mod execute;
