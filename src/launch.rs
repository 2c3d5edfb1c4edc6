//! Starting the runtime and waiting for it.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::profile::LaunchProfile;
use crate::LauncherError;

/// A fully resolved invocation of the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.program.display())?;
        for arg in &self.args {
            writeln!(f, "{}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// How a child process ended. `code == None` means it was killed by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildExit {
    pub code: Option<i32>,
}

impl ChildExit {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for ChildExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {}", code),
            None => f.write_str("terminated abnormally"),
        }
    }
}

/// Builds `<base_dir><runtime_path> <runtime args...> <payload_flag> <base_dir><payload_path>`.
///
/// Relative paths are appended to the base directory as-is, no separator added.
pub fn build_command(base_dir: &Path, profile: &LaunchProfile) -> CommandLine {
    let base = base_dir.as_os_str();

    let mut program = base.to_os_string();
    program.push(&profile.runtime_path);

    let mut payload = base.to_os_string();
    payload.push(&profile.payload_path);

    let mut args = profile.expanded_args(base);
    args.push(OsString::from(&profile.payload_flag));
    args.push(payload);

    CommandLine { program: PathBuf::from(program), args }
}

/// Spawns a command and blocks until it exits.
pub trait ProcessRunner {
    fn run(&self, command: &CommandLine) -> Result<ChildExit, LauncherError>;
}

/// Real child process: stdout/stderr inherited, no stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &CommandLine) -> Result<ChildExit, LauncherError> {
        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| LauncherError::Spawn { program: command.program.clone(), source })?;

        tracing::info!(pid = child.id(), "Waiting application completion...");

        let status = child.wait().map_err(LauncherError::Wait)?;
        Ok(ChildExit { code: status.code() })
    }
}

/// Starts the runtime described by `profile` from `base_dir` and waits for it.
///
/// Anything but a clean exit 0 is returned as [`LauncherError::ChildFailure`].
pub fn launch(
    runner: &dyn ProcessRunner,
    base_dir: &Path,
    profile: &LaunchProfile,
) -> Result<ChildExit, LauncherError> {
    let command = build_command(base_dir, profile);
    tracing::info!(program = %command.program.display(), "Application starting...");
    tracing::debug!(args = ?command.args, "runtime arguments");

    let exit = runner.run(&command)?;
    if exit.success() {
        tracing::info!("Application completed");
        Ok(exit)
    } else {
        Err(LauncherError::ChildFailure(exit))
    }
}
