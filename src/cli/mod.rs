use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Starts the bundled Java runtime with the ZX-Poly emulator.
///
/// Without options the built-in launch profile is used and the runtime is
/// looked up next to this executable.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON launch profile to use instead of the built-in one. Missing fields keep their defaults.
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// Directory holding the runtime and payload. Defaults to the launcher's own directory.
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Print the resolved runtime command line (one argument per line) and exit without starting it.
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `ZXPOLY_LAUNCHER_LOG` overrides it.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Parses command-line arguments using `clap`.
///
/// On `--help`, `--version` or a usage error clap prints and exits by itself.
pub fn run() -> Args {
    Args::parse()
}
