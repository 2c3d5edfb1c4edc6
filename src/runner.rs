//! Top-level launch flow: lock check, resolve, spawn, wait.
//!
//! Every collaborator is injected so the flow can run against fakes. Nothing
//! here terminates the process; `main` turns the returned error into an exit
//! code.

use crate::instance::{acquire_lock, Acquisition, LockProvider};
use crate::launch::{build_command, launch, ProcessRunner};
use crate::profile::LaunchProfile;
use crate::resolve::BaseDirResolver;
use crate::LauncherError;

pub struct Launcher<'a> {
    pub locks: &'a dyn LockProvider,
    pub resolver: &'a dyn BaseDirResolver,
    pub runner: &'a dyn ProcessRunner,
    pub profile: LaunchProfile,
    /// Print the resolved command line instead of starting it.
    pub dry_run: bool,
}

impl Launcher<'_> {
    pub fn run(&self) -> Result<(), LauncherError> {
        // Held until this function returns, which is the end of the process.
        let _instance = match acquire_lock(self.locks, &self.profile.instance_lock_name)? {
            Acquisition::AlreadyRunning => return Err(LauncherError::AlreadyRunning),
            held => held,
        };

        let base_dir = self.resolver.base_dir()?;
        tracing::debug!(base_dir = %base_dir.display(), "resolved launcher directory");

        if self.dry_run {
            print!("{}", build_command(&base_dir, &self.profile));
            return Ok(());
        }

        launch(self.runner, &base_dir, &self.profile)?;
        Ok(())
    }
}
