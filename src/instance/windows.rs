use std::ffi::{c_void, OsStr};
use std::os::windows::ffi::OsStrExt;
use std::ptr;

use super::{LockHandle, LockProvider};
use crate::LauncherError;

const ERROR_ALREADY_EXISTS: u32 = 183;

#[link(name = "kernel32")]
extern "system" {
    fn CreateMutexW(
        lpMutexAttributes: *mut c_void,
        bInitialOwner: i32,
        lpName: *const u16,
    ) -> *mut c_void;
    fn GetLastError() -> u32;
    fn CloseHandle(hObject: *mut c_void) -> i32;
}

/// Named kernel mutex (`CreateMutexW`), visible to every process in the session.
#[derive(Debug, Default)]
pub struct NamedLockProvider;

impl LockProvider for NamedLockProvider {
    fn acquire(&self, name: &str) -> Result<Option<LockHandle>, LauncherError> {
        let wide: Vec<u16> = OsStr::new(name).encode_wide().chain(Some(0)).collect();
        // SAFETY: `wide` is NUL-terminated and outlives the call.
        let (handle, err) = unsafe {
            let h = CreateMutexW(ptr::null_mut(), 0, wide.as_ptr());
            (h, GetLastError())
        };
        if handle.is_null() {
            return Err(LauncherError::Lock { name: name.to_string(), code: err as i32 });
        }
        if err == ERROR_ALREADY_EXISTS {
            // SAFETY: `handle` is a valid mutex handle we own.
            unsafe {
                CloseHandle(handle);
            }
            return Ok(None);
        }
        // Never closed: the OS releases it when the process exits.
        Ok(Some(LockHandle::new(handle)))
    }
}
