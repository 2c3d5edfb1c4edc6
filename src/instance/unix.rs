use std::fs::{File, OpenOptions};
use std::io;
use std::os::unix::io::AsRawFd;
use std::path::PathBuf;

use super::{LockHandle, LockProvider};
use crate::LauncherError;

/// Advisory `flock` on `<dir>/<name>.lock`.
///
/// The descriptor stays open inside the returned handle; closing it (process
/// exit) releases the lock.
#[derive(Debug)]
pub struct NamedLockProvider {
    dir: PathBuf,
}

impl Default for NamedLockProvider {
    fn default() -> Self {
        Self { dir: std::env::temp_dir() }
    }
}

impl NamedLockProvider {
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Lock file for `name`. Separators and other odd characters (mutex
    /// names like `Global\app`) are flattened to `_`.
    pub fn lock_path(&self, name: &str) -> PathBuf {
        let file_name: String = name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' { c } else { '_' })
            .collect();
        self.dir.join(format!("{file_name}.lock"))
    }
}

impl LockProvider for NamedLockProvider {
    fn acquire(&self, name: &str) -> Result<Option<LockHandle>, LauncherError> {
        let os_error = |e: io::Error| LauncherError::Lock {
            name: name.to_string(),
            code: e.raw_os_error().unwrap_or(-1),
        };

        let path = self.lock_path(name);
        let file: File = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(os_error)?;

        // SAFETY: `file` owns a valid descriptor for the duration of the call.
        let rc = unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX | libc::LOCK_NB) };
        if rc == 0 {
            tracing::debug!(path = %path.display(), "instance lock acquired");
            return Ok(Some(LockHandle::new(file)));
        }
        let err = io::Error::last_os_error();
        if err.kind() == io::ErrorKind::WouldBlock {
            Ok(None)
        } else {
            Err(os_error(err))
        }
    }
}
