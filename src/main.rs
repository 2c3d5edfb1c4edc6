//! Main entry point for the zxpoly-launcher binary

use std::process::ExitCode;

use zxpoly_launcher::cli::{self, Args};
use zxpoly_launcher::instance::NamedLockProvider;
use zxpoly_launcher::launch::SystemRunner;
use zxpoly_launcher::profile::LaunchProfile;
use zxpoly_launcher::resolve::{BaseDirResolver, CurrentExeResolver, FixedBaseDir};
use zxpoly_launcher::runner::Launcher;
use zxpoly_launcher::{banner, logging, LauncherError};

fn main() -> ExitCode {
    let args = cli::run();
    logging::init(args.verbose);
    println!("{}", banner());

    match run_app(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(LauncherError::AlreadyRunning) => {
            println!("Application already started....");
            ExitCode::from(LauncherError::AlreadyRunning.exit_code())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run_app(args: Args) -> Result<(), LauncherError> {
    let profile = match &args.profile {
        Some(path) => LaunchProfile::load(path)?,
        None => LaunchProfile::default(),
    };

    let resolver: Box<dyn BaseDirResolver> = match args.base_dir {
        Some(dir) => Box::new(FixedBaseDir(dir)),
        None => Box::new(CurrentExeResolver),
    };

    Launcher {
        locks: &NamedLockProvider::default(),
        resolver: resolver.as_ref(),
        runner: &SystemRunner,
        profile,
        dry_run: args.dry_run,
    }
    .run()
}
