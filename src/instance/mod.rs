//! Single-instance guard.
//!
//! A named, system-visible lock decides whether this launcher may proceed.
//! The lock is taken once and kept until the process exits; there is no
//! release API.

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use unix::NamedLockProvider;
#[cfg(windows)]
pub use windows::NamedLockProvider;

use std::any::Any;
use std::fmt;

use crate::LauncherError;

/// Opaque OS resource backing an acquired lock.
///
/// Dropping it is only expected at process exit.
pub struct LockHandle {
    _resource: Box<dyn Any>,
}

impl LockHandle {
    pub fn new<T: Any>(resource: T) -> Self {
        Self { _resource: Box::new(resource) }
    }
}

impl fmt::Debug for LockHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LockHandle(..)")
    }
}

/// Creates named exclusive locks.
pub trait LockProvider {
    /// `Ok(Some(_))` when the lock was newly created, `Ok(None)` when another
    /// instance already holds it. Anything else is an error.
    fn acquire(&self, name: &str) -> Result<Option<LockHandle>, LauncherError>;
}

/// Outcome of [`acquire_lock`].
#[derive(Debug)]
pub enum Acquisition {
    /// No lock name configured; the guard is off.
    Disabled,
    Acquired(LockHandle),
    /// A previous instance holds the lock.
    AlreadyRunning,
}

impl Acquisition {
    pub fn is_held(&self) -> bool {
        !matches!(self, Acquisition::AlreadyRunning)
    }
}

/// Takes the single-instance lock `name`. An empty name never reaches `provider`.
pub fn acquire_lock(provider: &dyn LockProvider, name: &str) -> Result<Acquisition, LauncherError> {
    if name.is_empty() {
        return Ok(Acquisition::Disabled);
    }
    tracing::info!(lock = name, "Trying to create mutex");
    match provider.acquire(name)? {
        Some(handle) => Ok(Acquisition::Acquired(handle)),
        None => {
            tracing::warn!(lock = name, "lock is held by another instance");
            Ok(Acquisition::AlreadyRunning)
        }
    }
}
