//! Launch profile: everything the launcher forwards to the runtime.
//!
//! The flag set lives here as data so that it can be changed (or overridden
//! with a JSON file) without touching the launch flow.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::LauncherError;

/// Placeholder in [`LaunchProfile::runtime_args`] replaced by the base directory.
pub const BASE_DIR_PLACEHOLDER: &str = "{base_dir}";

/// Single-instance lock name. Empty disables the guard.
pub const DEFAULT_LOCK_NAME: &str = "";

#[cfg(windows)]
pub const DEFAULT_RUNTIME_PATH: &str = "\\jre\\bin\\javaw.exe";
#[cfg(not(windows))]
pub const DEFAULT_RUNTIME_PATH: &str = "/jre/bin/java";

#[cfg(windows)]
pub const DEFAULT_PAYLOAD_PATH: &str = "\\zxpoly-emul.jar";
#[cfg(not(windows))]
pub const DEFAULT_PAYLOAD_PATH: &str = "/zxpoly-emul.jar";

pub const DEFAULT_PAYLOAD_FLAG: &str = "-jar";

/// JVM tuning flags, in the order they are passed.
pub const DEFAULT_RUNTIME_ARGS: &[&str] = &[
    "-XX:+UseZGC",
    "-XX:+TieredCompilation",
    "-XX:MaxMetaspaceSize=128m",
    "-Xms512M",
    "-Xmx1G",
    "-Dsun.rmi.transport.tcp.maxConnectionThreads=0",
    "-XX:-DontCompileHugeMethods",
    "-XX:+DisableAttachMechanism",
    "-Xverify:none",
    "-Dsun.java2d.d3d=true",
    "-Dsun.java2d.ddoffscreen=true",
    "-Dsun.java2d.ddforcevram=true",
    "-Dsun.java2d.ddscale=true",
    "-Dsun.java2d.accthreshold=0",
    "-Djava.library.path={base_dir}",
];

/// What to start and how.
///
/// `runtime_path` and `payload_path` are appended verbatim to the base
/// directory, so they carry their own leading separator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LaunchProfile {
    pub instance_lock_name: String,
    pub runtime_path: String,
    pub payload_path: String,
    pub payload_flag: String,
    pub runtime_args: Vec<String>,
}

impl Default for LaunchProfile {
    fn default() -> Self {
        Self {
            instance_lock_name: DEFAULT_LOCK_NAME.to_string(),
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
            payload_path: DEFAULT_PAYLOAD_PATH.to_string(),
            payload_flag: DEFAULT_PAYLOAD_FLAG.to_string(),
            runtime_args: DEFAULT_RUNTIME_ARGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl LaunchProfile {
    /// Reads a profile from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, LauncherError> {
        let raw = fs::read_to_string(path).map_err(|e| LauncherError::Profile {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        serde_json::from_str(&raw).map_err(|e| LauncherError::Profile {
            path: path.to_path_buf(),
            source: Box::new(e),
        })
    }

    /// Runtime arguments with [`BASE_DIR_PLACEHOLDER`] expanded.
    pub fn expanded_args(&self, base_dir: &OsStr) -> Vec<OsString> {
        self.runtime_args
            .iter()
            .map(|arg| {
                let mut out = OsString::new();
                for (i, piece) in arg.split(BASE_DIR_PLACEHOLDER).enumerate() {
                    if i > 0 {
                        out.push(base_dir);
                    }
                    out.push(piece);
                }
                out
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_profile_disables_guard() {
        let profile = LaunchProfile::default();
        assert!(profile.instance_lock_name.is_empty());
        assert_eq!(profile.payload_flag, "-jar");
        assert_eq!(profile.runtime_args.len(), 15);
        assert_eq!(profile.runtime_args[0], "-XX:+UseZGC");
    }

    #[test]
    fn library_path_follows_base_dir() {
        let args = LaunchProfile::default().expanded_args(OsStr::new("C:\\App"));
        assert_eq!(args.last(), Some(&OsString::from("-Djava.library.path=C:\\App")));
        assert_eq!(args.len(), DEFAULT_RUNTIME_ARGS.len());
        for (arg, expected) in args.iter().zip(&DEFAULT_RUNTIME_ARGS[..14]) {
            assert_eq!(arg, expected);
        }
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "instance_lock_name": "zxpoly" }}"#).unwrap();

        let profile = LaunchProfile::load(file.path()).unwrap();
        assert_eq!(profile.instance_lock_name, "zxpoly");
        assert_eq!(profile.runtime_path, DEFAULT_RUNTIME_PATH);
        assert_eq!(profile.runtime_args, LaunchProfile::default().runtime_args);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "heap": "2G" }}"#).unwrap();

        let err = LaunchProfile::load(file.path()).unwrap_err();
        assert!(matches!(err, LauncherError::Profile { .. }));
    }

    #[test]
    fn missing_file_is_a_profile_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LaunchProfile::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LauncherError::Profile { .. }));
    }
}
