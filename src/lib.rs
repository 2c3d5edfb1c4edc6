//! # ZX-Poly launcher
//!
//! A small native front for the ZX-Poly emulator. It guards against a second
//! running instance, then starts the bundled Java runtime with a fixed set of
//! tuning flags and waits for it.
//!
//! ## Key Modules
//!
//! - [`instance`]: single-instance guard over a named OS lock.
//! - [`resolve`]: finds the directory the launcher is installed in.
//! - [`profile`]: the runtime path, payload path and JVM flags, as data.
//! - [`launch`]: builds the runtime command line, spawns it and waits.
//! - [`runner`]: ties the steps together; `main` only maps its result to an exit code.
//!
//! ## Examples
//!
//! ```no_run
//! use zxpoly_launcher::instance::NamedLockProvider;
//! use zxpoly_launcher::launch::SystemRunner;
//! use zxpoly_launcher::profile::LaunchProfile;
//! use zxpoly_launcher::resolve::CurrentExeResolver;
//! use zxpoly_launcher::runner::Launcher;
//!
//! let launcher = Launcher {
//!     locks: &NamedLockProvider::default(),
//!     resolver: &CurrentExeResolver,
//!     runner: &SystemRunner,
//!     profile: LaunchProfile::default(),
//!     dry_run: false,
//! };
//! launcher.run().unwrap();
//! ```

pub mod cli;
pub mod error;
pub use error::LauncherError;

pub mod instance;
pub mod launch;
pub mod logging;
pub mod profile;
pub mod resolve;
pub mod runner;

/// Product line printed at start-up, e.g. `ZX-Poly Emulator 0.1.0`.
pub fn banner() -> String {
    format!(
        "{} {}\n{}",
        env!("ZXPOLY_PRODUCT_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("ZXPOLY_COPYRIGHT")
    )
}
