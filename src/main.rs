use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use clap::{ArgAction, Parser};
use minint::{config::Config, interpreter::session::Session};
use tracing_subscriber::EnvFilter;

/// minint is an interactive interpreter for a minimal integer-only language.
/// Every line is a complete program; a blank line ends the session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads program lines from this file instead of standard input.
    file: Option<PathBuf>,

    /// Does not write the `>> ` prompt before each line.
    #[arg(long)]
    no_prompt: bool,

    /// Rejects a line once a single `while` loop has run this many
    /// iterations. Loops are unbounded by default.
    #[arg(long, value_name = "N")]
    loop_limit: Option<u64>,

    /// Logs to standard error: `-v` for debug, `-vv` for trace. Without it,
    /// `RUST_LOG` is honoured.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = Config { show_prompt: !args.no_prompt && args.file.is_none(),
                          loop_limit:  args.loop_limit, };
    let mut session = Session::new(config);

    let result = if let Some(path) = &args.file {
        let file = File::open(path).unwrap_or_else(|_| {
                                       eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                 path.display());
                                       std::process::exit(1);
                                   });
        session.repl(BufReader::new(file), io::stdout().lock())
    } else {
        session.repl(io::stdin().lock(), io::stdout().lock())
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("minint=debug"),
        _ => EnvFilter::new("minint=trace"),
    };

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(false)
                             .init();
}
