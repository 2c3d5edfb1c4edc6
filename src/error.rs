use std::path::PathBuf;

use thiserror::Error;

use crate::launch::ChildExit;

/// Exit code reserved for "another instance already holds the lock".
pub const EXIT_ALREADY_RUNNING: u8 = 3;

/// Exit code for every fatal error.
pub const EXIT_FAILURE: u8 = 1;

/// The primary error type for all operations in the launcher.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// A previous instance holds the single-instance lock. Expected, not a failure.
    #[error("Application already started")]
    AlreadyRunning,

    /// The OS refused to create the named lock for a reason other than
    /// "already exists".
    #[error("Cannot create instance lock '{name}' (os error {code})")]
    Lock { name: String, code: i32 },

    /// The OS could not report the path of the running executable.
    #[error("Cannot resolve launcher directory: {0}")]
    PathResolution(#[source] std::io::Error),

    /// The runtime executable could not be started (missing, not executable, ...).
    #[error("Cannot start '{}': {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Waiting on a started child failed.
    #[error("Cannot wait for application: {0}")]
    Wait(#[source] std::io::Error),

    /// The child ran but exited non-zero or was terminated abnormally.
    #[error("Application completed with status: {0}")]
    ChildFailure(ChildExit),

    /// A launch profile file could not be read or parsed.
    #[error("Invalid launch profile '{}': {source}", .path.display())]
    Profile {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl LauncherError {
    /// Process exit code for this error. Only `main` should act on it.
    pub fn exit_code(&self) -> u8 {
        match self {
            LauncherError::AlreadyRunning => EXIT_ALREADY_RUNNING,
            _ => EXIT_FAILURE,
        }
    }
}
