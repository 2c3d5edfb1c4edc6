//! Locating the launcher's installation directory.

use std::io;
use std::path::{Path, PathBuf};

use crate::LauncherError;

/// Directory containing the running launcher executable.
pub fn resolve_base_directory() -> Result<PathBuf, LauncherError> {
    let exe = std::env::current_exe().map_err(LauncherError::PathResolution)?;
    parent_of(&exe)
}

fn parent_of(exe: &Path) -> Result<PathBuf, LauncherError> {
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            LauncherError::PathResolution(io::Error::new(
                io::ErrorKind::NotFound,
                format!("'{}' has no parent directory", exe.display()),
            ))
        })
}

/// Where the runtime and payload are looked up.
pub trait BaseDirResolver {
    fn base_dir(&self) -> Result<PathBuf, LauncherError>;
}

/// The directory of `current_exe()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurrentExeResolver;

impl BaseDirResolver for CurrentExeResolver {
    fn base_dir(&self) -> Result<PathBuf, LauncherError> {
        resolve_base_directory()
    }
}

/// A directory given up front (`--base-dir`).
#[derive(Debug, Clone)]
pub struct FixedBaseDir(pub PathBuf);

impl BaseDirResolver for FixedBaseDir {
    fn base_dir(&self) -> Result<PathBuf, LauncherError> {
        Ok(self.0.clone())
    }
}
